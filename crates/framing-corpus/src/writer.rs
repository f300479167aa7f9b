//! Balanced dataset and audit report output.
//!
//! Writers are generic over `io::Write` so tests run against in-memory
//! buffers; the `_file` wrappers create the output directory and stream to
//! disk.

use std::io::Write;
use std::path::Path;

use framing_core::ArticleRecord;
use serde::Serialize;

use crate::CorpusError;

/// Write records as CSV with the standard dataset schema.
///
/// # Errors
///
/// Returns `CorpusError::Csv` if serialization or the underlying write fails.
pub fn write_dataset<W: Write>(writer: W, records: &[ArticleRecord]) -> Result<(), CorpusError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record).map_err(|e| CorpusError::Csv {
            file: "<dataset>".to_string(),
            source: e,
        })?;
    }
    csv_writer.flush().map_err(|e| CorpusError::Io {
        path: "<dataset>".to_string(),
        source: e,
    })?;
    Ok(())
}

/// Write the dataset CSV to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns `CorpusError` on directory creation, file creation, or write
/// failure.
pub fn write_dataset_file(path: &Path, records: &[ArticleRecord]) -> Result<(), CorpusError> {
    let file = create_output_file(path)?;
    write_dataset(file, records)?;
    tracing::info!(path = %path.display(), rows = records.len(), "wrote balanced dataset");
    Ok(())
}

/// Serialize any audit structure as pretty JSON.
///
/// # Errors
///
/// Returns `CorpusError::AuditSerialize` if JSON serialization fails.
pub fn write_audit<W: Write, T: Serialize>(writer: W, audit: &T) -> Result<(), CorpusError> {
    serde_json::to_writer_pretty(writer, audit)?;
    Ok(())
}

/// Write the audit JSON to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns `CorpusError` on directory creation, file creation, or write
/// failure.
pub fn write_audit_file<T: Serialize>(path: &Path, audit: &T) -> Result<(), CorpusError> {
    let file = create_output_file(path)?;
    write_audit(file, audit)?;
    tracing::info!(path = %path.display(), "wrote balance audit");
    Ok(())
}

fn create_output_file(path: &Path) -> Result<std::fs::File, CorpusError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CorpusError::Io {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    std::fs::File::create(path).map_err(|e| CorpusError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
