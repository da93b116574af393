//! Reading and writing the emitted catalog document.
//!
//! The catalog is a single pretty-printed JSON array of [`CatalogRecord`]s.
//! Writes go to a temporary sibling file that is renamed over the
//! destination, so the destination is either untouched or fully written.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::CatalogRecord;

#[derive(Debug, Error)]
pub enum CatalogIoError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl CatalogIoError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Render records as the catalog document (pretty-printed, trailing newline).
pub fn to_catalog_string(records: &[CatalogRecord]) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(records)?;
    out.push('\n');
    Ok(out)
}

/// Write the catalog to `path`, replacing any previous file atomically.
pub fn write_catalog(path: &Path, records: &[CatalogRecord]) -> Result<(), CatalogIoError> {
    let serialized = to_catalog_string(records).map_err(|e| CatalogIoError::json(path, e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CatalogIoError::io(parent, e))?;
    }

    let tmp = temp_path(path);
    if let Err(e) = std::fs::write(&tmp, serialized) {
        let _ = std::fs::remove_file(&tmp);
        return Err(CatalogIoError::io(&tmp, e));
    }
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        CatalogIoError::io(path, e)
    })
}

/// Load a previously emitted catalog.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogRecord>, CatalogIoError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogIoError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| CatalogIoError::json(path, e))
}

/// `emojis.json` → `emojis.json.tmp`, in the same directory so the final
/// rename never crosses filesystems.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
