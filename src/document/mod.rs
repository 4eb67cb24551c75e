//! Document values and the path-addressed accessor.
//!
//! `Value` is the type-erased tree a decoded document becomes; `NestedMap`
//! wraps such a tree and resolves path expressions against it. The
//! private submodules wire `Value` into serde and the format value types.

mod convert;
mod ser;

pub mod map;
pub mod value;

pub use map::NestedMap;
pub use value::{Map, Number, Value};
