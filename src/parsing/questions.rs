use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::core::question::QuestionRecord;

/// Suffix appended to the question bank path for the backup copy
pub const BACKUP_SUFFIX: &str = ".backup";

#[derive(Error, Debug)]
pub enum QuestionFileError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Expected questions to be a list")]
    NotAnArray,

    #[error("Failed to serialize questions: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load the question bank: a JSON array of question objects
///
/// # Errors
///
/// Returns `QuestionFileError::NotFound` if the file does not exist,
/// `QuestionFileError::Read` if it cannot be read, `QuestionFileError::InvalidJson` if
/// it is not valid JSON, or `QuestionFileError::NotAnArray` if the top-level value is
/// not an array.
pub fn load_questions(path: &Path) -> Result<Vec<QuestionRecord>, QuestionFileError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(QuestionFileError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(QuestionFileError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let value: Value =
        serde_json::from_str(&content).map_err(|source| QuestionFileError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    let Value::Array(items) = value else {
        return Err(QuestionFileError::NotAnArray);
    };

    tracing::debug!("Loaded {} question records from {}", items.len(), path.display());
    Ok(items.into_iter().map(QuestionRecord).collect())
}

/// Render records the way the question bank is stored: two-space indentation,
/// non-ASCII characters written literally
///
/// # Errors
///
/// Returns `QuestionFileError::Serialize` if serialization fails.
pub fn to_json_text(records: &[QuestionRecord]) -> Result<String, QuestionFileError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Path of the backup copy for a question bank (`<path>.backup`)
#[must_use]
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Write a backup copy of `records` next to `path` and return its location
///
/// # Errors
///
/// Returns `QuestionFileError::Write` if the backup cannot be written.
pub fn write_backup(path: &Path, records: &[QuestionRecord]) -> Result<PathBuf, QuestionFileError> {
    let backup_path = backup_path_for(path);
    let text = to_json_text(records)?;

    std::fs::write(&backup_path, text).map_err(|source| QuestionFileError::Write {
        path: backup_path.clone(),
        source,
    })?;

    Ok(backup_path)
}

/// Overwrite the question bank at `path` with `records`.
///
/// The content is written to a temporary file in the same directory and then moved over
/// the target, so a failed write leaves the existing file intact.
///
/// # Errors
///
/// Returns `QuestionFileError::Write` if the temporary file cannot be created, written
/// or moved into place.
pub fn save_questions(path: &Path, records: &[QuestionRecord]) -> Result<(), QuestionFileError> {
    let text = to_json_text(records)?;
    let write_error = |source: std::io::Error| QuestionFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(text.as_bytes()).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;

    // Keep the permissions of the file being replaced
    if let Ok(metadata) = std::fs::metadata(path) {
        if let Err(e) = std::fs::set_permissions(tmp.path(), metadata.permissions()) {
            tracing::warn!("Could not copy permissions of {}: {e}", path.display());
        }
    }

    tmp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
