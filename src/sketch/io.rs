//! JSON I/O for sketches and analysis reports.
//!
//! - `load_sketch`: read a JSON array of shape records from disk.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::Shape;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read a sketch file: a JSON array of shape records.
pub fn load_sketch(path: &Path) -> Result<Vec<Shape>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read sketch {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse sketch {}: {e}", path.display()))
}

/// Pretty-print a serializable value to disk, creating parent directories
/// as needed.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
