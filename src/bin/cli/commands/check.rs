//! Single call-site check.

use std::path::Path;

use tracing::debug;

use super::load_configuration;
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::cli::output::{print_check_result, print_json};
use argswap::ArgswapEngine;

/// Check one call given on the command line; exits with code 1 on findings.
pub async fn check_command(args: CheckArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let mut config = load_configuration(config_path).await?;
    if let Some(threshold) = args.threshold {
        config = config.with_threshold(threshold);
    }
    let engine = ArgswapEngine::new(config)?;

    let params = args.params.as_deref();
    debug!(
        arguments = args.args.len(),
        parameters = params.map(<[String]>::len),
        "Checking call site"
    );
    let result = engine.check(params, args.args.as_slice(), args.function.as_deref(), args.variadic)?;

    match args.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => {
            let callee = args.function.as_deref().unwrap_or("<anonymous>");
            print_check_result(callee, &result);
        }
    }

    if !result.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
