//! Configuration types and management for argswap.
//!
//! Configuration is plain data with serde defaults on every field, so a YAML
//! file only needs to name the settings it changes.

pub mod validation;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{ArgswapError, Result};
pub use crate::detectors::swapped_args::config::{MorphemeConfig, SearchConfig};

pub use validation::{validate_bounded_usize, validate_margin, validate_positive_usize};

/// Main configuration for the argswap engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgswapConfig {
    /// Identifier normalization policy
    #[serde(default)]
    pub morphemes: MorphemeConfig,

    /// Pair search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Corpus scanning settings
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Configuration construction and I/O methods for [`ArgswapConfig`].
impl ArgswapConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(Into::into)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ArgswapError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        Self::from_yaml_str(&content)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            ArgswapError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Override the reporting margin
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.search.threshold = threshold;
        self
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        self.morphemes.validate()?;
        self.search.validate()?;
        self.scan.validate().map_err(|e| {
            ArgswapError::config_field(format!("Invalid scan configuration: {e}"), "scan")
        })?;
        Ok(())
    }
}

/// Corpus scanning configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Worker threads for the scan (None = rayon's global pool)
    #[serde(default)]
    pub max_threads: Option<usize>,
}

impl ScanConfig {
    /// Validate scan settings
    pub fn validate(&self) -> Result<()> {
        if let Some(threads) = self.max_threads {
            validate_positive_usize(threads, "scan.max_threads")?;
        }
        Ok(())
    }
}
