//! Configuration for swapped-argument detection.

use serde::{Deserialize, Serialize};

use crate::core::config::validation::{validate_bounded_usize, validate_margin};
use crate::core::errors::{ArgswapError, Result};

/// Largest margin a pair can reach: both swapped scores 1.0, both baseline scores 0.0.
pub const MAX_MARGIN: f64 = 2.0;

/// Identifier normalization policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphemeConfig {
    /// Tokens shorter than this (in characters) are dropped
    #[serde(default = "MorphemeConfig::default_min_token_len")]
    pub min_token_len: usize,
    /// Keep purely numeric tokens such as the `2` in `buf2`
    #[serde(default)]
    pub keep_numeric_tokens: bool,
    /// Connector tokens that carry no meaning on their own (matched lowercase)
    #[serde(default = "MorphemeConfig::default_stop_tokens")]
    pub stop_tokens: Vec<String>,
}

impl Default for MorphemeConfig {
    fn default() -> Self {
        Self {
            min_token_len: Self::default_min_token_len(),
            keep_numeric_tokens: false,
            stop_tokens: Self::default_stop_tokens(),
        }
    }
}

impl MorphemeConfig {
    const fn default_min_token_len() -> usize {
        1
    }

    fn default_stop_tokens() -> Vec<String> {
        ["a", "an", "the", "of", "and", "or"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Validate normalization settings
    pub fn validate(&self) -> Result<()> {
        validate_bounded_usize(self.min_token_len, 1, 64, "morphemes.min_token_len")?;
        if let Some(bad) = self.stop_tokens.iter().find(|t| t.is_empty()) {
            return Err(ArgswapError::validation_field(
                format!("stop token {bad:?} must not be empty"),
                "morphemes.stop_tokens",
            ));
        }
        Ok(())
    }
}

/// Pair search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum `swapped - baseline` margin for a pair to be reported
    #[serde(default = "SearchConfig::default_threshold")]
    pub threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
        }
    }
}

impl SearchConfig {
    /// Default reporting margin.
    ///
    /// An exact transposition scores 2.0 and `start_index`/`end_index` scores
    /// about 1.33; names that only half match in both slots score 1.0 and stay
    /// below the bar.
    pub const fn default_threshold() -> f64 {
        1.2
    }

    /// Validate search settings
    pub fn validate(&self) -> Result<()> {
        validate_margin(self.threshold)
    }
}
