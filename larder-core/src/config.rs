//! Configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::recipe::DirectionDelimiter;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET: &str = "recipes.csv";

/// Default number of matches to show.
pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct LarderConfig {
    /// Path to the recipe CSV.
    pub dataset_path: PathBuf,
    /// How many ranked matches to return.
    pub top_n: usize,
    /// How the directions column is split into steps.
    pub directions_delimiter: DirectionDelimiter,
}

impl Default for LarderConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            top_n: DEFAULT_TOP_N,
            directions_delimiter: DirectionDelimiter::Auto,
        }
    }
}

impl LarderConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `LARDER_DATASET`: Recipe CSV path (default: "recipes.csv")
    /// - `LARDER_TOP_N`: Matches to show (default: 3)
    /// - `LARDER_DIRECTIONS_DELIMITER`: "auto", "period" or "pipe" (default: "auto")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let dataset_path = lookup("LARDER_DATASET")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.dataset_path);

        let top_n = match lookup("LARDER_TOP_N") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "LARDER_TOP_N",
                    value,
                })?,
            None => defaults.top_n,
        };

        let directions_delimiter = match lookup("LARDER_DIRECTIONS_DELIMITER") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "LARDER_DIRECTIONS_DELIMITER",
                    value,
                })?,
            None => defaults.directions_delimiter,
        };

        Ok(Self {
            dataset_path,
            top_n,
            directions_delimiter,
        })
    }
}
