//! Configuration management commands.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use super::load_configuration;
use crate::cli::args::ValidateConfigArgs;
use argswap::ArgswapConfig;

/// Print default configuration in YAML format
pub async fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default argswap configuration".dimmed());
    println!(
        "{}",
        "# Save this to a file and customize as needed".dimmed()
    );
    println!(
        "{}",
        "# Usage: argswap --config your-config.yml scan calls.jsonl".dimmed()
    );
    println!();

    let yaml_output = serde_yaml::to_string(&ArgswapConfig::default())?;
    println!("{}", yaml_output);

    Ok(())
}

/// Validate an argswap configuration file
pub async fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.file.display().to_string().cyan()
    );
    println!();

    let config = match load_configuration(Some(&args.file)).await {
        Ok(config) => {
            println!("{}", "✅ Configuration file is valid!".bright_green().bold());
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Configuration validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check YAML syntax (indentation, colons, quotes)");
            println!("   • search.threshold must lie in (0, 2]");
            println!("   • scan.max_threads must be at least 1");
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'argswap print-default-config' to see valid format".dimmed()
            );
            return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
        }
    };

    println!(
        "   Threshold: {}",
        config.search.threshold.to_string().bright_yellow()
    );

    if args.detailed {
        println!();
        println!("{}", "🔧 Detailed Settings".bright_blue().bold());
        println!();

        /// Row used when printing detailed configuration.
        #[derive(Tabled)]
        struct DetailRow {
            setting: String,
            value: String,
        }

        let detail_rows = vec![
            DetailRow {
                setting: "search.threshold".to_string(),
                value: config.search.threshold.to_string(),
            },
            DetailRow {
                setting: "morphemes.min_token_len".to_string(),
                value: config.morphemes.min_token_len.to_string(),
            },
            DetailRow {
                setting: "morphemes.keep_numeric_tokens".to_string(),
                value: config.morphemes.keep_numeric_tokens.to_string(),
            },
            DetailRow {
                setting: "morphemes.stop_tokens".to_string(),
                value: config.morphemes.stop_tokens.join(", "),
            },
            DetailRow {
                setting: "scan.max_threads".to_string(),
                value: config
                    .scan
                    .max_threads
                    .map_or_else(|| "auto".to_string(), |n| n.to_string()),
            },
        ];

        let mut table = Table::new(detail_rows);
        table.with(TableStyle::rounded());
        println!("{}", table);
    }

    Ok(())
}
