//! Configuration system for RideMatch.
//!
//! Load matcher configuration from TOML or YAML files to control how many
//! worker threads scan the offer collection without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use ridematch_config::{RideMatchConfig, ThreadCount};
//!
//! let config = RideMatchConfig::from_toml_str(r#"
//!     thread_count = { count = 4 }
//!     min_partition_size = 256
//! "#).unwrap();
//!
//! assert_eq!(config.thread_count, ThreadCount::Count(4));
//! assert_eq!(config.min_partition_size, 256);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use ridematch_config::RideMatchConfig;
//!
//! let config = RideMatchConfig::load("ridematch.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main matcher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RideMatchConfig {
    /// Number of worker threads scanning partitions.
    #[serde(default)]
    pub thread_count: ThreadCount,

    /// Smallest number of offers worth handing to a separate worker.
    #[serde(default = "default_min_partition_size")]
    pub min_partition_size: usize,
}

fn default_min_partition_size() -> usize {
    1
}

impl Default for RideMatchConfig {
    fn default() -> Self {
        Self {
            thread_count: ThreadCount::default(),
            min_partition_size: default_min_partition_size(),
        }
    }
}

impl RideMatchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the worker thread count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Sets the minimum partition size.
    pub fn with_min_partition_size(mut self, size: usize) -> Self {
        self.min_partition_size = size;
        self
    }

    /// Checks values that deserialize fine but cannot drive a matcher.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "thread_count must be at least 1".to_string(),
            ));
        }
        if self.min_partition_size == 0 {
            return Err(ConfigError::Invalid(
                "min_partition_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Thread count configuration for the partitioned scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// One worker per available CPU core.
    #[default]
    Auto,

    /// Scan on the calling thread only.
    Sequential,

    /// Specific number of workers.
    Count(usize),
}

impl ThreadCount {
    /// Resolves the thread count to an actual number, never below 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ridematch_config::ThreadCount;
    ///
    /// assert_eq!(ThreadCount::Sequential.resolve(), 1);
    /// assert_eq!(ThreadCount::Count(6).resolve(), 6);
    /// assert!(ThreadCount::Auto.resolve() >= 1);
    /// ```
    pub fn resolve(&self) -> usize {
        match self {
            ThreadCount::Auto => std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1),
            ThreadCount::Sequential => 1,
            ThreadCount::Count(n) => (*n).max(1),
        }
    }

    /// Maps a command line value to a thread count; `0` means auto.
    pub fn from_cli(value: usize) -> Self {
        match value {
            0 => ThreadCount::Auto,
            1 => ThreadCount::Sequential,
            n => ThreadCount::Count(n),
        }
    }
}

impl fmt::Display for ThreadCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreadCount::Auto => write!(f, "Auto"),
            ThreadCount::Sequential => write!(f, "Sequential"),
            ThreadCount::Count(n) => write!(f, "{}", n),
        }
    }
}
