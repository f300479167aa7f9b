//! The outlet → category registry.
//!
//! This is the single explicit lookup table for "which category does this
//! source belong to". Loaded from `config/sources.yaml`; every collector
//! output must resolve through it before entering the pipeline.

use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::records::SourceCategory;
use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    pub category: SourceCategory,
    /// Home domain, informational only (e.g. "chinadaily.com.cn").
    pub domain: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SourcesFile {
    pub sources: Vec<SourceConfig>,
}

/// Validated outlet registry with case-insensitive name lookup.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    by_name: HashMap<String, SourceCategory>,
}

impl SourceRegistry {
    /// Build a registry from a parsed sources file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` on empty names, duplicate names
    /// (case-insensitive), or an empty outlet list.
    pub fn from_file(file: &SourcesFile) -> Result<Self, ConfigError> {
        validate_sources(file)?;
        let by_name = file
            .sources
            .iter()
            .map(|s| (s.name.to_lowercase(), s.category))
            .collect();
        Ok(Self { by_name })
    }

    /// Resolve a source name to its category. Lookup is case-insensitive
    /// and ignores surrounding whitespace.
    #[must_use]
    pub fn category_for(&self, source_name: &str) -> Option<SourceCategory> {
        self.by_name
            .get(&source_name.trim().to_lowercase())
            .copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Load and validate the source registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_sources(path: &Path) -> Result<SourceRegistry, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SourcesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: SourcesFile = serde_yaml::from_str(&content)?;
    SourceRegistry::from_file(&file)
}

fn validate_sources(file: &SourcesFile) -> Result<(), ConfigError> {
    if file.sources.is_empty() {
        return Err(ConfigError::Validation(
            "sources file lists no outlets".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for source in &file.sources {
        if source.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "source name must be non-empty".to_string(),
            ));
        }
        if !seen.insert(source.name.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate source name: '{}'",
                source.name
            )));
        }
    }

    Ok(())
}
