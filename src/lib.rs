//! # argswap: Swapped-Argument Detection
//!
//! Flags call sites where two arguments appear to have been passed in each
//! other's positions. Parameter and argument identifiers are split into
//! lowercase morphemes (`maxValue` → `{max, value}`), scored pairwise with
//! Jaccard similarity, and a pair of positions is reported when swapping it
//! improves the combined score by at least a configurable margin.
//!
//! - **Morpheme extraction**: case/digit/separator aware identifier splitting
//! - **Pair search**: margin-ranked, non-overlapping swap candidates
//! - **Corpus scanning**: parallel checks over extracted JSON-lines corpora
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                       API Layer                       │
//! ├───────────────────────────────────────────────────────┤
//! │  Core           │  Detectors          │  I/O          │
//! │                 │                     │               │
//! │ • Config        │ • Morphemes         │ • Corpus      │
//! │ • Errors        │ • Similarity        │   scanning    │
//! │                 │ • Pair search       │               │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use argswap::{ArgswapConfig, ArgswapEngine};
//!
//! # fn main() -> argswap::Result<()> {
//! let engine = ArgswapEngine::new(ArgswapConfig::default())?;
//! let params = ["width", "height"];
//! let args = ["height", "width"];
//!
//! let result = engine.check(Some(&params[..]), &args[..], Some("resize"), false)?;
//! assert_eq!(result.positions(), vec![(1, 2)]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Configuration and error handling
pub mod core {
    //! Configuration and error types.

    pub mod config;
    pub mod errors;
}

// Detection algorithms
pub mod detectors {
    //! Swap detection algorithms.

    pub mod swapped_args;
}

// Corpus input
pub mod io {
    //! Reading extracted call-site corpora.

    pub mod corpus;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use api::engine::ArgswapEngine;
pub use api::results::{ScanReport, ScanSummary, SiteReport, SourceLocation};
pub use core::config::ArgswapConfig;
pub use core::errors::{ArgswapError, Result};
pub use detectors::swapped_args::{Argument, CallSite, CheckResult, Signature, SwapCandidate};
pub use io::corpus::CorpusScanner;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
