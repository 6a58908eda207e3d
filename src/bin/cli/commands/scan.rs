//! Corpus scan command.

use std::path::Path;

use owo_colors::OwoColorize;
use serde_json::json;

use super::load_configuration;
use crate::cli::args::{OutputFormat, ScanArgs};
use crate::cli::output::{print_json, print_scan_summary, print_site_report};
use argswap::io::corpus::parse_corpus;
use argswap::{ArgswapEngine, CorpusScanner};

/// Scan a corpus file and report every flagged call site.
pub async fn scan_command(args: ScanArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_configuration(config_path).await?;
    let engine = ArgswapEngine::new(config)?;

    let mut scanner = CorpusScanner::new(&engine);
    if let Some(threshold) = args.threshold {
        scanner = scanner.with_threshold(threshold)?;
    }

    let content = tokio::fs::read_to_string(&args.corpus).await.map_err(|e| {
        anyhow::anyhow!("Failed to read corpus {}: {}", args.corpus.display(), e)
    })?;
    let documents = parse_corpus(&content)?;
    let report = scanner.scan(&documents)?;

    match args.format {
        OutputFormat::Json => {
            if args.all {
                print_json(&report)?;
            } else {
                let flagged: Vec<_> = report.flagged().collect();
                print_json(&json!({
                    "reports": flagged,
                    "summary": report.summary,
                }))?;
            }
        }
        OutputFormat::Text => {
            println!(
                "{} {}",
                "🔍 Scanning corpus:".bright_blue().bold(),
                args.corpus.display().to_string().cyan()
            );
            for site in report.flagged() {
                print_site_report(site);
            }
            print_scan_summary(&report.summary);
        }
    }

    if args.fail_on_issues && report.has_issues() {
        std::process::exit(1);
    }

    Ok(())
}
