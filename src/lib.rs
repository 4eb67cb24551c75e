//! Path-addressed access to nested, dynamically shaped documents.
//!
//! nestmap decodes JSON, YAML, or TOML into a type-erased [`Value`]
//! tree and addresses it with slash-delimited paths: [`NestedMap`]
//! reads, writes, and deletes by path, and [`merge`] layers several
//! documents into one. Maps keep their key order through all of it.
//!
//! # Example
//!
//! ```
//! use nestmap::{merge, MergePolicy, NestedMap, Value};
//!
//! let base = nestmap::codec::from_yaml_str(
//!     "server:\n  host: localhost\n  port: 5000\n",
//! ).unwrap();
//! let overlay = nestmap::codec::from_json_str(
//!     r#"{"server": {"port": 8080}}"#,
//! ).unwrap();
//!
//! // Layer the two documents, the overlay winning on conflicts.
//! let mut doc = base.into_map().unwrap();
//! merge(&mut doc, overlay.into_map().unwrap(), MergePolicy::Override);
//!
//! let mut map = NestedMap::new(Value::Map(doc)).unwrap();
//! assert_eq!(map.get("/server/host").unwrap(), &Value::from("localhost"));
//! assert_eq!(map.get("/server/port").unwrap(), &Value::from(8080));
//!
//! // Writes fabricate missing branches; deletes never fail.
//! map.set("/server/tls/enabled", true).unwrap();
//! map.delete("/server/host");
//! assert!(map.get("/server/tls/enabled").is_ok());
//! ```

pub mod codec;
pub mod document;
pub mod error;
pub mod merge;
pub mod path;

pub use document::map::NestedMap;
pub use document::value::{Map, Number, Value};
pub use error::Error;
pub use merge::{merge, MergePolicy};
