//! Extracted call-site corpora and in-process scanning.
//!
//! A corpus is a JSON-lines file written by a compiler-side extractor. Each
//! line describes one translation unit: a `fileNameMap` from file ids to
//! paths, and a `functions` map from callee names to their declaration
//! attributes and call sites. Every call site whose callee has known
//! parameter names is checked once; locations are carried through untouched.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::engine::ArgswapEngine;
use crate::api::results::{ScanReport, SiteReport, SourceLocation};
use crate::core::config::validate_margin;
use crate::core::errors::{ArgswapError, Result};
use crate::detectors::swapped_args::{CallSite, Signature};

/// File reference inside a corpus document: an id into `fileNameMap` or a literal path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileRef {
    /// Numeric id
    Id(u64),
    /// String id or path
    Name(String),
}

impl FileRef {
    fn key(&self) -> String {
        match self {
            FileRef::Id(id) => id.to_string(),
            FileRef::Name(name) => name.clone(),
        }
    }
}

/// `{ "file": ..., "lineNo": ... }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    /// File reference
    #[serde(default)]
    pub file: Option<FileRef>,
    /// Line number
    #[serde(default)]
    pub line_no: Option<u64>,
}

/// A parameter or argument entry; only the name matters here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntry {
    /// Identifier, absent for unnamed parameters and non-identifier arguments
    #[serde(default)]
    pub name: Option<String>,
}

/// Declaration attributes of a callee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclAttrs {
    /// Where the callee is declared
    #[serde(default)]
    pub location: Option<LocationEntry>,
    /// Declared parameters; absent when the declaration was not visible
    #[serde(default)]
    pub params: Option<Vec<NamedEntry>>,
    /// Whether the callee takes a variadic tail
    #[serde(default)]
    pub is_variadic: bool,
}

/// Argument list of one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallAttrs {
    /// Positional arguments
    #[serde(default)]
    pub args: Vec<NamedEntry>,
}

/// One call of a callee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSiteEntry {
    /// Where the call happens
    #[serde(default)]
    pub site: LocationEntry,
    /// Call arguments
    #[serde(default)]
    pub attrs: CallAttrs,
}

/// A callee and all its recorded calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEntry {
    /// Declaration attributes
    #[serde(default)]
    pub decl_attrs: DeclAttrs,
    /// Recorded calls
    #[serde(default)]
    pub call_sites: Vec<CallSiteEntry>,
}

/// One line of a corpus file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusDocument {
    /// File id → path
    #[serde(default)]
    pub file_name_map: HashMap<String, String>,
    /// Callee name → entry
    #[serde(default)]
    pub functions: BTreeMap<String, FunctionEntry>,
}

impl CorpusDocument {
    fn resolve(&self, entry: &LocationEntry) -> SourceLocation {
        let file = entry
            .file
            .as_ref()
            .map(|file| {
                let key = file.key();
                self.file_name_map.get(&key).cloned().unwrap_or(key)
            })
            .unwrap_or_else(|| "<unknown>".to_string());
        SourceLocation::new(file, entry.line_no.unwrap_or(0))
    }
}

/// Parse JSON-lines corpus text. Blank lines are skipped.
pub fn parse_corpus(content: &str) -> Result<Vec<CorpusDocument>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|err| ArgswapError::corpus_line(idx + 1, err))
        })
        .collect()
}

/// Read and parse a corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<CorpusDocument>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ArgswapError::io(format!("Failed to read corpus: {}", path.display()), e)
    })?;
    parse_corpus(&content)
}

/// A call site ready for the engine.
#[derive(Debug, Clone)]
pub struct ScanJob {
    /// Callee signature
    pub signature: Signature,
    /// Call arguments
    pub call_site: CallSite,
    /// Declaration location, if known
    pub declaration: Option<SourceLocation>,
    /// Call location
    pub call: SourceLocation,
}

/// Flatten documents into engine jobs.
///
/// Returns the jobs in corpus order and the number of call sites skipped for
/// lack of parameter names.
pub fn collect_jobs(documents: &[CorpusDocument]) -> (Vec<ScanJob>, usize) {
    let mut jobs = Vec::new();
    let mut skipped = 0;

    for document in documents {
        for (callee, function) in &document.functions {
            let decl = &function.decl_attrs;
            let Some(params) = decl.params.as_ref() else {
                skipped += function.call_sites.len();
                continue;
            };

            let signature = Signature {
                callee: Some(callee.clone()),
                parameters: Some(
                    params
                        .iter()
                        .map(|p| p.name.clone().unwrap_or_default())
                        .collect(),
                ),
                is_variadic: decl.is_variadic,
            };
            let declaration = decl.location.as_ref().map(|loc| document.resolve(loc));

            for site in &function.call_sites {
                jobs.push(ScanJob {
                    signature: signature.clone(),
                    call_site: CallSite::from_names(
                        site.attrs
                            .args
                            .iter()
                            .map(|arg| arg.name.clone().unwrap_or_default()),
                    ),
                    declaration: declaration.clone(),
                    call: document.resolve(&site.site),
                });
            }
        }
    }

    (jobs, skipped)
}

/// Runs the engine over whole corpora.
pub struct CorpusScanner<'e> {
    engine: &'e ArgswapEngine,
    threshold: f64,
}

impl<'e> CorpusScanner<'e> {
    /// Scanner using the engine's configured threshold
    pub fn new(engine: &'e ArgswapEngine) -> Self {
        Self {
            engine,
            threshold: engine.config().search.threshold,
        }
    }

    /// Override the reporting margin for this scan
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        validate_margin(threshold)?;
        self.threshold = threshold;
        Ok(self)
    }

    /// Check every call site with known parameters.
    pub fn scan(&self, documents: &[CorpusDocument]) -> Result<ScanReport> {
        let (jobs, skipped) = collect_jobs(documents);
        info!(
            documents = documents.len(),
            sites = jobs.len(),
            skipped,
            "Scanning corpus for swapped arguments"
        );

        let reports = match self.engine.config().scan.max_threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| {
                        ArgswapError::internal(format!("Failed to build thread pool: {e}"))
                            .with_context("corpus scan")
                    })?;
                pool.install(|| self.check_jobs(&jobs))?
            }
            None => self.check_jobs(&jobs)?,
        };

        let report = ScanReport::new(reports, documents.len(), skipped);
        info!(
            flagged = report.summary.sites_flagged,
            candidates = report.summary.candidates,
            "Corpus scan completed"
        );
        Ok(report)
    }

    /// Load a corpus file and scan it.
    pub fn scan_file(&self, path: impl AsRef<Path>) -> Result<ScanReport> {
        let documents = load_corpus(path)?;
        self.scan(&documents)
    }

    fn check_jobs(&self, jobs: &[ScanJob]) -> Result<Vec<SiteReport>> {
        jobs.par_iter()
            .map(|job| {
                let candidates =
                    self.engine
                        .check_with_threshold(&job.signature, &job.call_site, self.threshold)?;
                if !candidates.is_empty() {
                    debug!(
                        callee = job.signature.display_name(),
                        call = %job.call,
                        candidates = candidates.len(),
                        "Swapped arguments flagged"
                    );
                }
                Ok(SiteReport {
                    callee: job.signature.display_name().to_string(),
                    declaration: job.declaration.clone(),
                    call: job.call.clone(),
                    candidates,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"fileNameMap":{"0":"src/main.c","1":"include/geom.h"},"functions":{"resize":{"declAttrs":{"location":{"file":1,"lineNo":12},"params":[{"name":"width"},{"name":"height"}]},"callSites":[{"site":{"file":0,"lineNo":40},"attrs":{"args":[{"name":"height"},{"name":"width"}]}},{"site":{"file":0,"lineNo":41},"attrs":{"args":[{"name":"width"},{}]}}]},"unknown_fn":{"callSites":[{"site":{"file":0,"lineNo":50},"attrs":{"args":[{"name":"b"},{"name":"a"}]}}]}}}"#;

    #[test]
    fn parses_documents_and_skips_blank_lines() {
        let text = format!("{DOC}\n\n{DOC}\n");
        let docs = parse_corpus(&text).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].functions.len(), 2);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let text = format!("{DOC}\n{{not json\n");
        let err = parse_corpus(&text).unwrap_err();
        assert!(matches!(err, ArgswapError::Serialization { line: Some(2), .. }));
    }

    #[test]
    fn jobs_resolve_files_and_skip_unknown_callees() {
        let docs = parse_corpus(DOC).unwrap();
        let (jobs, skipped) = collect_jobs(&docs);

        assert_eq!(skipped, 1);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].call, SourceLocation::new("src/main.c", 40));
        assert_eq!(jobs[0].declaration, Some(SourceLocation::new("include/geom.h", 12)));
        // missing argument name becomes an unnamed argument
        assert!(jobs[1].call_site.arguments[1].components.is_empty());
    }

    #[test]
    fn unmapped_file_reference_is_kept_verbatim() {
        let doc = r#"{"functions":{"f":{"declAttrs":{"params":[]},"callSites":[{"site":{"file":"lib/x.c"},"attrs":{"args":[]}}]}}}"#;
        let docs = parse_corpus(doc).unwrap();
        let (jobs, _) = collect_jobs(&docs);
        assert_eq!(jobs[0].call, SourceLocation::new("lib/x.c", 0));
        assert_eq!(jobs[0].declaration, None);
    }

    #[test]
    fn scan_reports_every_checked_site() {
        let engine = ArgswapEngine::default();
        let docs = parse_corpus(DOC).unwrap();
        let report = CorpusScanner::new(&engine).scan(&docs).unwrap();

        assert_eq!(report.reports.len(), 2);
        assert_eq!(report.summary.sites_flagged, 1);
        assert_eq!(report.summary.sites_skipped, 1);
        assert_eq!(report.reports[0].callee, "resize");
        assert_eq!(report.reports[0].candidates.positions(), vec![(1, 2)]);
        assert!(!report.reports[1].is_flagged());
    }

    #[test]
    fn scan_with_dedicated_pool() {
        let mut config = crate::core::config::ArgswapConfig::default();
        config.scan.max_threads = Some(2);
        let engine = ArgswapEngine::new(config).unwrap();
        let docs = parse_corpus(DOC).unwrap();
        let report = CorpusScanner::new(&engine).scan(&docs).unwrap();
        assert_eq!(report.summary.candidates, 1);
    }

    #[test]
    fn scanner_rejects_bad_threshold() {
        let engine = ArgswapEngine::default();
        assert!(CorpusScanner::new(&engine).with_threshold(3.0).is_err());
    }
}
