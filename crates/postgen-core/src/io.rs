use crate::error::{PostgenError, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents partial writes from corrupting the destination file.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Load a JSON document as an untyped value. Unknown fields are kept exactly
/// as written so a later save round-trips foreign content.
pub fn load_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(PostgenError::CollectionNotFound(path.to_path_buf()));
    }
    let data = std::fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&data)?;
    Ok(doc)
}

/// Serialize `value` with two-space indentation and write it atomically.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut data = serde_json::to_string_pretty(value)?;
    data.push('\n');
    atomic_write(path, data.as_bytes())
}
