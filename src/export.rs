//! JSON export format and atomic file writing.
//!
//! An export is a pretty-printed JSON array with one object per contact,
//! in store order. Files are written to a temp file next to their destination
//! and renamed into place, so a failed export never leaves a truncated file.

use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, Country, Gender, DEFAULT_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// File extension for exports.
pub const EXPORT_EXTENSION: &str = "json";

/// One contact as it appears on disk.
///
/// Readers tolerate missing `name`, `country` and `gender` keys and fill in
/// the same defaults a freshly created contact would get.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub contact_id: String,

    #[serde(default = "default_name")]
    pub name: String,

    pub contact_number: String,

    #[serde(default)]
    pub country: Country,

    #[serde(default)]
    pub gender: Gender,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl From<&Contact> for ExportRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            contact_id: contact.id().to_string(),
            name: contact.name().to_string(),
            contact_number: contact.phone_number().to_string(),
            country: contact.country(),
            gender: contact.gender(),
        }
    }
}

/// Resolve `<dir>/<name>.json`.
pub fn export_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, EXPORT_EXTENSION))
}

/// Serialize `records` and atomically replace `path` with the result.
///
/// Each call writes its own uniquely named sibling temp file, so concurrent
/// exports to one destination never share a partial file. The last rename
/// wins.
pub fn write_records(path: &Path, records: &[ExportRecord]) -> StoreResult<()> {
    let payload = serde_json::to_vec_pretty(records)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = format!(
        ".{}.",
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    );

    // Dropping the temp file on any error path deletes it
    let mut tmp = Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(&payload)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;

    tracing::debug!("Export written: {} ({} bytes)", path.display(), payload.len());
    Ok(())
}

/// Read an export file back into records.
pub fn read_records(path: &Path) -> StoreResult<Vec<ExportRecord>> {
    let bytes = fs::read(path).map_err(|e| StoreError::io(path, e))?;
    Ok(serde_json::from_slice(&bytes)?)
}
