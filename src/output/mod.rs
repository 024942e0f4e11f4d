//! # Catalog Output
//!
//! Serializes generated catalogs to disk.
//!
//! Writes go through a temporary file in the destination directory followed
//! by an atomic rename, so a failed run can never leave a truncated catalog
//! behind and a pre-existing catalog survives any failure untouched.

use crate::{QuestforgeError, QuestforgeResult};
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a catalog to `path` as pretty-printed JSON, atomically.
///
/// The temporary file is created in the destination directory so the final
/// rename never crosses a filesystem boundary.
pub fn write_catalog<T: Serialize>(path: &Path, entries: &T) -> QuestforgeResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_failed(path, e))?;
    serde_json::to_writer_pretty(tmp.as_file_mut(), entries).map_err(|e| write_failed(path, e))?;
    tmp.as_file_mut().flush().map_err(|e| write_failed(path, e))?;
    tmp.persist(path).map_err(|e| write_failed(path, e))?;

    log::debug!("catalog written to {}", path.display());
    Ok(())
}

fn write_failed(path: &Path, err: impl Display) -> QuestforgeError {
    QuestforgeError::WriteFailed(format!("{}: {}", path.display(), err))
}
