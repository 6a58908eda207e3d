//! CLI Command Implementations
//!
//! - check: single call-site check
//! - scan: corpus scan
//! - config: configuration management commands

pub mod check;
pub mod config;
pub mod scan;

use std::path::Path;

use argswap::ArgswapConfig;

pub use check::check_command;
pub use config::{print_default_config, validate_config};
pub use scan::scan_command;

/// Load configuration from an optional YAML or JSON file, falling back to defaults.
pub async fn load_configuration(config_path: Option<&Path>) -> anyhow::Result<ArgswapConfig> {
    let config = match config_path {
        Some(path) => {
            let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e)
            })?;
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => serde_json::from_str(&content)?,
                _ => ArgswapConfig::from_yaml_str(&content)?,
            }
        }
        None => ArgswapConfig::default(),
    };

    config.validate()?;
    Ok(config)
}
