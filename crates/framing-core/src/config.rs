use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_i64 = |var: &str, default: &str| -> Result<i64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<i64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_i32 = |var: &str, default: &str| -> Result<i32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<i32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let raw_data_dir = PathBuf::from(require("FRAMING_RAW_DATA_DIR")?);

    let env = parse_environment(&or_default("FRAMING_ENV", "development"));
    let log_level = or_default("FRAMING_LOG_LEVEL", "info");
    let output_dir = PathBuf::from(or_default("FRAMING_OUTPUT_DIR", "./data/processed"));
    let sources_path = PathBuf::from(or_default("FRAMING_SOURCES_PATH", "./config/sources.yaml"));

    let min_token_count = parse_i64("FRAMING_MIN_TOKEN_COUNT", "20")?;
    let random_seed = parse_u64("FRAMING_RANDOM_SEED", "42")?;
    let year_min = parse_i32("FRAMING_YEAR_MIN", "2017")?;
    let year_max = parse_i32("FRAMING_YEAR_MAX", "2024")?;

    if min_token_count < 0 {
        return Err(ConfigError::Validation(format!(
            "FRAMING_MIN_TOKEN_COUNT must be non-negative, got {min_token_count}"
        )));
    }
    if year_min > year_max {
        return Err(ConfigError::Validation(format!(
            "FRAMING_YEAR_MIN ({year_min}) must not exceed FRAMING_YEAR_MAX ({year_max})"
        )));
    }

    Ok(AppConfig {
        env,
        log_level,
        raw_data_dir,
        output_dir,
        sources_path,
        min_token_count,
        random_seed,
        year_min,
        year_max,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
