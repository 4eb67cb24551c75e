//! Conversions between `Value` and the value types of the supported
//! serialization formats.

use super::value::{Map, Number, Value};

impl From<serde_json::Value> for Value {
    fn from(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
            serde_json::Value::Array(seq) => {
                Value::Sequence(seq.into_iter().map(Value::from).collect())
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Number(n) => Value::Number(convert_json_number(&n)),
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Null => Value::Null,
        }
    }
}

fn convert_json_number(n: &serde_json::Number) -> Number {
    match n.as_i64() {
        Some(i) => Number::Integer(i),
        None => Number::Float(n.as_f64().unwrap_or(0.0)),
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Sequence(seq) => serde_json::Value::Array(
                seq.into_iter().map(serde_json::Value::from).collect(),
            ),
            Value::String(s) => serde_json::Value::String(s),
            Value::Number(Number::Integer(i)) => serde_json::Value::Number(i.into()),
            Value::Number(Number::Float(f)) => match serde_json::Number::from_f64(f) {
                Some(n) => serde_json::Value::Number(n),
                None => serde_json::Value::Null,
            },
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Null => serde_json::Value::Null,
        }
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(raw: serde_yaml::Value) -> Self {
        match raw {
            serde_yaml::Value::Mapping(mapping) => {
                let mut map = Map::new();
                for (key, value) in mapping {
                    // Only scalar keys are addressable by a path;
                    // container keys are dropped.
                    if let Some(key) = yaml_key_to_string(&key) {
                        map.insert(key, Value::from(value));
                    }
                }
                Value::Map(map)
            }
            serde_yaml::Value::Sequence(seq) => {
                Value::Sequence(seq.into_iter().map(Value::from).collect())
            }
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Number(n) => Value::Number(convert_yaml_number(&n)),
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

fn yaml_key_to_string(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn convert_yaml_number(n: &serde_yaml::Number) -> Number {
    match n.as_i64() {
        Some(i) => Number::Integer(i),
        None => Number::Float(n.as_f64().unwrap_or(0.0)),
    }
}

impl From<toml::Value> for Value {
    fn from(raw: toml::Value) -> Self {
        match raw {
            toml::Value::Table(table) => Value::Map(
                table
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
            toml::Value::Array(seq) => {
                Value::Sequence(seq.into_iter().map(Value::from).collect())
            }
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Number(Number::Integer(i)),
            toml::Value::Float(f) => Value::Number(Number::Float(f)),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        }
    }
}
