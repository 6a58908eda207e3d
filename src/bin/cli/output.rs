//! Output Formatting and Display Functions
//!
//! Diagnostics go to stdout in the compiler-style `ERROR (...)` / `NOTE (...)`
//! shape; JSON is printed unadorned so it can be piped.

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use argswap::{CheckResult, ScanSummary, SiteReport, SwapCandidate};

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn describe(callee: &str, candidate: &SwapCandidate) -> String {
    format!(
        "{} has swapped arguments {} and {} with a score of {:.2}",
        callee, candidate.arg1, candidate.arg2, candidate.score
    )
}

fn join_morphemes(candidate: &SwapCandidate) -> (String, String) {
    let left: Vec<&str> = candidate.morphemes1.iter().map(String::as_str).collect();
    let right: Vec<&str> = candidate.morphemes2.iter().map(String::as_str).collect();
    (left.join(","), right.join(","))
}

/// Diagnostics for a single ad-hoc check
pub fn print_check_result(callee: &str, result: &CheckResult) {
    if result.is_empty() {
        println!("{}", "✅ No swapped arguments found".bright_green());
        return;
    }

    for candidate in result {
        println!("{}: {}", "ERROR".bright_red().bold(), describe(callee, candidate));
        let (left, right) = join_morphemes(candidate);
        println!("  {} {{{}}} <-> {{{}}}", "morphemes:".dimmed(), left, right);
    }
}

/// Diagnostics for one flagged corpus call site
pub fn print_site_report(report: &SiteReport) {
    for candidate in &report.candidates {
        println!(
            "{} ({}): {}",
            "ERROR".bright_red().bold(),
            report.call,
            describe(&report.callee, candidate)
        );
        if let Some(declaration) = &report.declaration {
            println!(
                "{} ({}): callee declared here",
                "NOTE".bright_blue().bold(),
                declaration
            );
        }
    }
}

/// Summary table printed after a text-format scan
pub fn print_scan_summary(summary: &ScanSummary) {
    /// Row type for the scan statistics table.
    #[derive(Tabled)]
    struct StatsRow {
        metric: String,
        value: String,
    }

    let rows = vec![
        StatsRow {
            metric: "Documents".to_string(),
            value: summary.documents.to_string(),
        },
        StatsRow {
            metric: "Call sites checked".to_string(),
            value: summary.sites_checked.to_string(),
        },
        StatsRow {
            metric: "Call sites skipped".to_string(),
            value: summary.sites_skipped.to_string(),
        },
        StatsRow {
            metric: "Call sites flagged".to_string(),
            value: summary.sites_flagged.to_string(),
        },
        StatsRow {
            metric: "Swap candidates".to_string(),
            value: summary.candidates.to_string(),
        },
    ];

    println!();
    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);

    if summary.sites_flagged == 0 {
        println!("{}", "🎉 No swapped arguments found.".bright_green());
    } else {
        println!(
            "{} {}",
            "🔥 Call sites with swapped arguments:".bright_red().bold(),
            summary.sites_flagged.to_string().bright_yellow()
        );
    }
}
