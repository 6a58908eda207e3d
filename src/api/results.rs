//! Result types handed back to callers and report writers.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::detectors::swapped_args::{CheckResult, SwapCandidate};

/// Source position carried through from the extraction front end.
///
/// The engine never interprets it; it only labels reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// File path as recorded by the extractor
    pub file: String,
    /// 1-based line number (0 when unknown)
    pub line: u64,
}

impl SourceLocation {
    /// Create a new location
    pub fn new(file: impl Into<String>, line: u64) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Swap-check outcome for one call site of a corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteReport {
    /// Callee identifier
    pub callee: String,
    /// Where the callee is declared, when the extractor saw it
    pub declaration: Option<SourceLocation>,
    /// Where the call happens
    pub call: SourceLocation,
    /// Swap candidates found at this call
    pub candidates: CheckResult,
}

impl SiteReport {
    /// Whether any pair was flagged
    pub fn is_flagged(&self) -> bool {
        !self.candidates.is_empty()
    }
}

/// Aggregate counts over a corpus scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Corpus documents read
    pub documents: usize,
    /// Call sites handed to the engine
    pub sites_checked: usize,
    /// Call sites skipped because the callee's parameters are unknown
    pub sites_skipped: usize,
    /// Call sites with at least one candidate
    pub sites_flagged: usize,
    /// Total candidates across all call sites
    pub candidates: usize,
}

/// Full outcome of a corpus scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Per-site reports in corpus order
    pub reports: Vec<SiteReport>,
    /// Aggregate counts
    pub summary: ScanSummary,
}

impl ScanReport {
    /// Build a report and its summary from per-site results
    pub fn new(reports: Vec<SiteReport>, documents: usize, sites_skipped: usize) -> Self {
        let summary = ScanSummary {
            documents,
            sites_checked: reports.len(),
            sites_skipped,
            sites_flagged: reports.iter().filter(|r| r.is_flagged()).count(),
            candidates: reports.iter().map(|r| r.candidates.len()).sum(),
        };
        Self { reports, summary }
    }

    /// Reports that contain at least one candidate
    pub fn flagged(&self) -> impl Iterator<Item = &SiteReport> {
        self.reports.iter().filter(|r| r.is_flagged())
    }

    /// Whether any call site was flagged
    pub fn has_issues(&self) -> bool {
        self.summary.sites_flagged > 0
    }
}
