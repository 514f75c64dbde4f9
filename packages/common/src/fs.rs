//! Small filesystem helpers for the flat JSON data files.
//!
//! Every store in this project keeps its data as a single pretty-printed
//! JSON file. Writes go through a sibling temp file followed by a rename
//! so a crashed write never leaves a half-written data file behind.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::result::CommonResult;

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> CommonResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}

/// Read and parse a JSON data file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CommonResult<T> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Serialize `value` as pretty JSON and write it to `path`.
///
/// The bytes land in `<path>.tmp` first and are renamed into place, so
/// readers either see the old file or the new one, never a torn write.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> CommonResult<()> {
    ensure_parent_dir(path)?;

    let raw = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, raw)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
