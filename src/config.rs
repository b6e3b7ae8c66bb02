//! Environment configuration.
//!
//! Everything comes from the process environment: `DATABASE_URL` (required),
//! `PORT` (default 3000), `STATIC_DIR` (default working directory).

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

/// Application configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Directory served verbatim for unmatched paths.
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidVar { var: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Ok(Self { database_url, port, static_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(DEFAULT_PORT, 3000);
    }

    #[test]
    fn test_missing_var_message_names_variable() {
        let err = ConfigError::MissingVar("DATABASE_URL");
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_invalid_var_message_includes_value() {
        let err = ConfigError::InvalidVar { var: "PORT", value: "eighty".to_string() };
        let display = err.to_string();
        assert!(display.contains("PORT"));
        assert!(display.contains("eighty"));
    }
}
