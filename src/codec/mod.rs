//! Decoding documents from JSON, YAML, and TOML, and encoding them back.
//!
//! Loaders and savers return `anyhow` errors carrying file context; the
//! typed [`Error`](crate::Error) enum is reserved for path and accessor
//! failures.

pub mod loader;
pub mod saver;

pub use loader::{
    from_json_str, from_toml_str, from_yaml_str, load_file, load_json_file, load_toml_file,
    load_yaml_file,
};
pub use saver::{
    save_file, save_json_file, save_yaml_file, to_json_string, to_json_string_pretty,
    to_yaml_string,
};
