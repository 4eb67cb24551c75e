//! Document loading from strings and files.
//!
//! Every loader produces a plain [`Value`] tree; wrapping it in a
//! `NestedMap` (and therefore requiring a map root) is the caller's
//! decision.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::document::value::Value;

/// Decodes a JSON document.
///
/// # Example
///
/// ```
/// use nestmap::codec::from_json_str;
///
/// let value = from_json_str(r#"{"a": 1}"#).unwrap();
/// assert!(value.is_map());
/// ```
pub fn from_json_str(content: &str) -> Result<Value> {
    let raw: serde_json::Value = serde_json::from_str(content).context("Failed to parse JSON")?;
    Ok(Value::from(raw))
}

/// Decodes a YAML document.
pub fn from_yaml_str(content: &str) -> Result<Value> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content).context("Failed to parse YAML")?;
    Ok(Value::from(raw))
}

/// Decodes a TOML document.
pub fn from_toml_str(content: &str) -> Result<Value> {
    let raw: toml::Value = content.parse().context("Failed to parse TOML")?;
    Ok(Value::from(raw))
}

/// Loads a document, picking the format from the file extension.
///
/// Supported extensions are `.json`, `.yaml`, `.yml`, and `.toml`.
///
/// # Example
///
/// ```no_run
/// use nestmap::codec::load_file;
///
/// let value = load_file("config.yaml").unwrap();
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    match extension_of(path).as_str() {
        "json" => load_json_file(path),
        "yaml" | "yml" => load_yaml_file(path),
        "toml" => load_toml_file(path),
        _ => bail!("Unsupported document format: {}", path.display()),
    }
}

/// Loads and parses a JSON file from the filesystem.
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = read_file(path.as_ref())?;
    from_json_str(&content)
}

/// Loads and parses a YAML file from the filesystem.
pub fn load_yaml_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = read_file(path.as_ref())?;
    from_yaml_str(&content)
}

/// Loads and parses a TOML file from the filesystem.
pub fn load_toml_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = read_file(path.as_ref())?;
    from_toml_str(&content)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}
