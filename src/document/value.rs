//! Type-erased document values.
//!
//! This module provides the core data structures for representing decoded
//! documents in nestmap. A document is a tree of `Value` nodes: string-keyed
//! maps, sequences, and scalars, nested to arbitrary depth. Maps preserve
//! insertion order, so a document round-trips through mutation without its
//! keys being shuffled.
//!
//! # Example
//!
//! ```
//! use nestmap::{Map, Number, Value};
//!
//! let mut server = Map::new();
//! server.insert("host".to_string(), Value::from("localhost"));
//! server.insert("port".to_string(), Value::from(5000));
//!
//! let root = Value::Map(server);
//! assert!(root.is_map());
//! assert_eq!(root.as_map().unwrap()["port"], Value::Number(Number::Integer(5000)));
//! ```

use indexmap::IndexMap;

/// An order-preserving string-keyed map of values.
pub type Map = IndexMap<String, Value>;

/// A numeric value (integer or float).
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

/// A single node in a document tree.
///
/// This enum represents the shapes a decoded document can take: maps,
/// sequences, strings, numbers, booleans, and null. Maps and sequences
/// contain further `Value` instances, forming the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string-keyed map with stable key order
    Map(Map),
    /// A sequence of ordered values
    Sequence(Vec<Value>),
    /// A string scalar
    String(String),
    /// A number (integer or float)
    Number(Number),
    /// A boolean
    Bool(bool),
    /// A null value
    Null,
}

impl Value {
    /// Returns true if this value is a map.
    ///
    /// # Example
    ///
    /// ```
    /// use nestmap::{Map, Value};
    ///
    /// let map = Value::Map(Map::new());
    /// assert!(map.is_map());
    ///
    /// let num = Value::from(42);
    /// assert!(!num.is_map());
    /// ```
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns true if this value is a sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use nestmap::Value;
    ///
    /// let seq = Value::Sequence(vec![]);
    /// assert!(seq.is_sequence());
    ///
    /// let num = Value::from(42);
    /// assert!(!num.is_sequence());
    /// ```
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Returns true if this value is a container (map or sequence).
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Sequence(_))
    }

    /// Returns the map behind this value, if it is one.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the map behind this value mutably, if it is one.
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Consumes the value and returns the map behind it, if it is one.
    ///
    /// Handy when layering decoded documents with [`merge`](crate::merge()),
    /// which works on owned maps.
    pub fn into_map(self) -> Option<Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the sequence behind this value, if it is one.
    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the sequence behind this value mutably, if it is one.
    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the string behind this value, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The name of this value's shape, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Map(_) => "map",
            Value::Sequence(_) => "sequence",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Integer(i as i64))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl From<Vec<Value>> for Value {
    fn from(s: Vec<Value>) -> Self {
        Value::Sequence(s)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        let int = Number::Integer(42);
        assert_eq!(format!("{}", int), "42");

        let float = Number::Float(42.5);
        assert_eq!(format!("{}", float), "42.5");
    }

    #[test]
    fn test_number_type_checks() {
        let int = Number::Integer(42);
        assert!(int.is_integer());
        assert!(!int.is_float());

        let float = Number::Float(42.0);
        assert!(float.is_float());
        assert!(!float.is_integer());
    }

    #[test]
    fn test_number_as_f64() {
        assert_eq!(Number::Integer(3).as_f64(), 3.0);
        assert_eq!(Number::Float(10.5).as_f64(), 10.5);
    }

    #[test]
    fn test_shape_predicates() {
        assert!(Value::Map(Map::new()).is_map());
        assert!(Value::Sequence(vec![]).is_sequence());
        assert!(Value::Map(Map::new()).is_container());
        assert!(Value::Sequence(vec![]).is_container());
        assert!(!Value::Null.is_container());
        assert!(!Value::from("text").is_map());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Map(Map::new()).type_name(), "map");
        assert_eq!(Value::Sequence(vec![]).type_name(), "sequence");
        assert_eq!(Value::from("s").type_name(), "string");
        assert_eq!(Value::from(1).type_name(), "number");
        assert_eq!(Value::from(true).type_name(), "bool");
        assert_eq!(Value::Null.type_name(), "null");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from("a"), Value::String("a".to_string()));
        assert_eq!(Value::from(7), Value::Number(Number::Integer(7)));
        assert_eq!(Value::from(7i64), Value::Number(Number::Integer(7)));
        assert_eq!(Value::from(2.5), Value::Number(Number::Float(2.5)));
        assert_eq!(Value::from(false), Value::Bool(false));
        assert_eq!(Value::from(()), Value::Null);
    }

    #[test]
    fn test_accessors() {
        let mut map = Map::new();
        map.insert("k".to_string(), Value::from("v"));
        let mut value = Value::Map(map);

        assert_eq!(value.as_map().unwrap().len(), 1);
        value.as_map_mut().unwrap().insert("k2".to_string(), Value::Null);
        assert_eq!(value.as_map().unwrap().len(), 2);
        assert!(value.as_sequence().is_none());

        let seq = Value::Sequence(vec![Value::from("A")]);
        assert_eq!(seq.as_sequence().unwrap().len(), 1);
        assert_eq!(seq.as_sequence().unwrap()[0].as_str(), Some("A"));
    }
}
