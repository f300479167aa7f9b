//! Domain model, source registry, and configuration for the Tibet media
//! framing dataset builder.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod records;
pub mod sources;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{ArticleRecord, SourceCategory};
pub use sources::{load_sources, SourceRegistry, SourcesFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read sources file {path}: {source}")]
    SourcesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sources file: {0}")]
    SourcesFileParse(#[from] serde_yaml::Error),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}

/// A malformed input record. Raised fail-fast during ingest so that silently
/// dropped rows can never skew the balance invariant.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("record in {file} (row {row}) has no resolvable URL")]
    MissingUrl { file: String, row: usize },

    #[error("record {url} has no resolvable publication year (raw date: {raw:?})")]
    MissingYear { url: String, raw: Option<String> },

    #[error("record {url} names unknown source '{source_name}'; add it to the sources registry")]
    UnknownSource { url: String, source_name: String },
}
