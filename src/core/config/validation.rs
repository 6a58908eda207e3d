//! Validation helper functions for configuration types.

use crate::core::errors::{ArgswapError, Result};
use crate::detectors::swapped_args::MAX_MARGIN;

/// Validate that a usize value is greater than zero.
pub fn validate_positive_usize(value: usize, field: &str) -> Result<()> {
    if value == 0 {
        return Err(ArgswapError::validation_field(
            format!("{} must be greater than 0", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a usize value is within a bounded range (inclusive).
pub fn validate_bounded_usize(value: usize, min: usize, max: usize, field: &str) -> Result<()> {
    if value < min || value > max {
        return Err(ArgswapError::validation_field(
            format!("{} must be between {} and {}", field, min, max),
            field,
        ));
    }
    Ok(())
}

/// Validate a swap margin: finite and within (0.0, 2.0].
pub fn validate_margin(value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value > MAX_MARGIN {
        return Err(ArgswapError::invalid_threshold(value));
    }
    Ok(())
}
