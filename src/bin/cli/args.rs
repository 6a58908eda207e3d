//! CLI Argument Structures
//!
//! Command definitions and option types for the argswap binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Swapped-argument detector
#[derive(Parser)]
#[command(name = "argswap")]
#[command(version = VERSION)]
#[command(about = "argswap - flag call sites whose arguments look swapped")]
#[command(long_about = "
Compare argument names against parameter names and report pairs of
positions that look transposed.

Common Usage:

  # Check a single call
  argswap check --params width height --args height width

  # Scan an extracted call-site corpus
  argswap scan calls.jsonl

  # Machine-readable output, failing CI on findings
  argswap scan calls.jsonl --format json --fail-on-issues
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a single call site
    Check(CheckArgs),

    /// Scan a JSON-lines call-site corpus
    Scan(ScanArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Validate an argswap configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// Argument names at the call site, in order (use "" for non-identifiers)
    #[arg(long, num_args = 0.., value_name = "NAME")]
    pub args: Vec<String>,

    /// Parameter names of the callee; omit when the declaration is unknown
    #[arg(long, num_args = 0.., value_name = "NAME")]
    pub params: Option<Vec<String>>,

    /// Callee name, used in output only
    #[arg(long = "function", value_name = "NAME")]
    pub function: Option<String>,

    /// The callee takes a variadic tail
    #[arg(long)]
    pub variadic: bool,

    /// Reporting margin in (0, 2]; overrides the configuration
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Corpus file, one JSON document per line
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Reporting margin in (0, 2]; overrides the configuration
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Include call sites without findings in JSON output
    #[arg(long)]
    pub all: bool,

    /// Exit with code 1 if any call site is flagged
    #[arg(long)]
    pub fail_on_issues: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Show detailed configuration breakdown
    #[arg(short, long)]
    pub detailed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable diagnostics
    Text,
    /// JSON format output
    Json,
}
