//! Document saving to strings and files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::document::value::Value;

/// Encodes a document as compact JSON.
pub fn to_json_string(value: &Value) -> Result<String> {
    serde_json::to_string(value).context("Failed to encode JSON")
}

/// Encodes a document as pretty-printed JSON.
pub fn to_json_string_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to encode JSON")
}

/// Encodes a document as YAML.
pub fn to_yaml_string(value: &Value) -> Result<String> {
    serde_yaml::to_string(value).context("Failed to encode YAML")
}

/// Saves a document, picking the format from the file extension.
///
/// JSON output is pretty-printed. Writing is decode/encode symmetric
/// for `.json`, `.yaml`, and `.yml`; TOML is decode-only since it has
/// no way to represent null.
pub fn save_file<P: AsRef<Path>>(path: P, value: &Value) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match extension.as_str() {
        "json" => save_json_file(path, value),
        "yaml" | "yml" => save_yaml_file(path, value),
        _ => bail!("Unsupported output format: {}", path.display()),
    }
}

/// Saves a document as pretty-printed JSON.
pub fn save_json_file<P: AsRef<Path>>(path: P, value: &Value) -> Result<()> {
    let mut content = to_json_string_pretty(value)?;
    content.push('\n');
    write_file_atomic(path.as_ref(), content.as_bytes())
}

/// Saves a document as YAML.
pub fn save_yaml_file<P: AsRef<Path>>(path: P, value: &Value) -> Result<()> {
    let content = to_yaml_string(value)?;
    write_file_atomic(path.as_ref(), content.as_bytes())
}

/// Writes data to a file atomically.
///
/// The data goes to a temporary file first and is renamed into place,
/// so the target is never left in a partially written state.
fn write_file_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, data).context("Failed to write temp file")?;
    fs::rename(&temp_path, path).context("Failed to rename temp file")?;
    Ok(())
}
