//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `DOCRANK_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_CUTOFF_K, DEFAULT_QUERY_CACHE_CAPACITY};

/// Run configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `DOCRANK_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Original-rank cutoff: candidates ranked beyond this are excluded
    /// from scoring. Default: `500`.
    pub cutoff_k: u32,

    /// Max entries in the query-decomposition cache. Default: `100`.
    pub query_cache_capacity: u64,

    /// JSONL input file with candidate records.
    pub input_path: Option<PathBuf>,

    /// JSONL output file for scored records.
    pub output_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cutoff_k: DEFAULT_CUTOFF_K,
            query_cache_capacity: DEFAULT_QUERY_CACHE_CAPACITY,
            input_path: None,
            output_path: None,
        }
    }
}

impl Config {
    const ENV_CUTOFF_K: &'static str = "DOCRANK_CUTOFF_K";
    const ENV_QUERY_CACHE_CAPACITY: &'static str = "DOCRANK_QUERY_CACHE_CAPACITY";
    const ENV_INPUT_PATH: &'static str = "DOCRANK_INPUT_PATH";
    const ENV_OUTPUT_PATH: &'static str = "DOCRANK_OUTPUT_PATH";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let cutoff_k = Self::parse_cutoff_from_env(defaults.cutoff_k)?;
        let query_cache_capacity =
            Self::parse_u64_from_env(Self::ENV_QUERY_CACHE_CAPACITY, defaults.query_cache_capacity);
        let input_path = Self::parse_optional_path_from_env(Self::ENV_INPUT_PATH);
        let output_path = Self::parse_optional_path_from_env(Self::ENV_OUTPUT_PATH);

        Ok(Self {
            cutoff_k,
            query_cache_capacity,
            input_path,
            output_path,
        })
    }

    /// Validates paths and basic invariants (does not create files).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.input_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if let Some(ref path) = self.output_path {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.is_dir() {
                    return Err(ConfigError::NotADirectory {
                        path: parent.to_path_buf(),
                    });
                }
            }
        }

        Ok(())
    }

    fn parse_cutoff_from_env(default: u32) -> Result<u32, ConfigError> {
        match env::var(Self::ENV_CUTOFF_K) {
            Ok(value) => {
                let cutoff: u32 =
                    value
                        .parse()
                        .map_err(|e| ConfigError::CutoffParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if cutoff == 0 {
                    return Err(ConfigError::InvalidCutoff { value });
                }

                Ok(cutoff)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
