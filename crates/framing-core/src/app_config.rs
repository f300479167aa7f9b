use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Resolved application configuration.
///
/// The balancing contract only needs three scalars (threshold, seed, input
/// location); the rest is ambient plumbing with defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory holding per-outlet subdirectories of raw collector CSVs.
    pub raw_data_dir: PathBuf,
    /// Directory the balanced dataset and audit report are written to.
    pub output_dir: PathBuf,
    /// Outlet → category registry file.
    pub sources_path: PathBuf,
    /// Minimum token count an article needs to survive the length filter.
    /// Signed so that a negative value can be rejected explicitly rather
    /// than wrapping at parse time.
    pub min_token_count: i64,
    /// Seed for the single per-run sampling generator.
    pub random_seed: u64,
    /// Inclusive publication-year window applied at ingest.
    pub year_min: i32,
    pub year_max: i32,
}
