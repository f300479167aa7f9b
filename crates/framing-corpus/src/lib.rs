//! File-based corpus layer: raw collector CSV ingest, URL deduplication,
//! and balanced dataset / audit output.

use thiserror::Error;

pub mod reader;
pub mod writer;

pub use reader::{
    dedupe_by_url, load_raw_corpus, read_articles, read_dataset, read_dataset_file, IngestSummary,
    RawCorpus,
};
pub use writer::{write_audit, write_audit_file, write_dataset, write_dataset_file};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("audit serialization failed: {0}")]
    AuditSerialize(#[from] serde_json::Error),

    #[error(transparent)]
    Data(#[from] framing_core::DataError),
}
