//! Swapped-argument detector.
//!
//! This module flags call sites whose arguments look transposed relative to
//! the callee's parameter names. It works purely on the lexical shape of the
//! names:
//! - Identifiers are split into lowercase morphemes (`startIndex` → `start`, `index`)
//! - Parameter/argument agreement is scored with the Jaccard index
//! - Every pair of positions is compared written vs. swapped, and the best
//!   non-overlapping pairs above a margin are reported

pub mod config;
pub mod morphemes;
pub mod search;
pub mod similarity;
pub mod types;

pub use config::{MorphemeConfig, SearchConfig, MAX_MARGIN};
pub use morphemes::{extract, extract_all, split_identifier, MorphemeSet};
pub use search::{scored_range, search};
pub use similarity::{jaccard_similarity, ScoreMatrix};
pub use types::{Argument, CallSite, CheckResult, Signature, SwapCandidate};
