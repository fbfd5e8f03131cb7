//! Shared data models for lint findings, per-file reports, and summaries.

pub mod attribute;

use crate::spec::platform::Platform;
use serde::Serialize;
use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Two-level severity of a finding.
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single deduplicated finding with the platforms it was observed on.
pub struct LintResult {
    pub severity: Severity,
    pub message: String,
    pub platforms: Vec<Platform>,
}

impl LintResult {
    fn new(severity: Severity, message: String) -> Self {
        Self {
            severity,
            message,
            platforms: Vec::new(),
        }
    }

    fn record_platform(&mut self, platform: Platform) {
        if !self.platforms.contains(&platform) {
            self.platforms.push(platform);
        }
    }

    /// True when the finding was seen on every known platform, in which case
    /// the rendered platform suffix is redundant.
    pub fn covers_all_platforms(&self) -> bool {
        Platform::ALL.iter().all(|p| self.platforms.contains(p))
            && self.platforms.iter().all(|p| Platform::ALL.contains(p))
    }
}

impl fmt::Display for LintResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.severity.as_str().to_uppercase(),
            self.message
        )?;
        if !self.platforms.is_empty() && !self.covers_all_platforms() {
            let names: Vec<&str> = self.platforms.iter().map(|p| p.name()).collect();
            write!(f, " [{}]", names.join(" - "))?;
        }
        Ok(())
    }
}

/// Ordered collection of findings, merged by `(severity, message)`.
///
/// Insertion order of the first occurrence is kept so reports are stable
/// across runs. The filtered views are computed on first access and cached
/// until the next `add`.
#[derive(Debug, Default)]
pub struct ResultStore {
    results: Vec<LintResult>,
    index: HashMap<(Severity, String), usize>,
    errors: OnceCell<Vec<LintResult>>,
    warnings: OnceCell<Vec<LintResult>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding. A repeated `(severity, message)` pair only grows the
    /// platform set of the existing entry.
    pub fn add(&mut self, severity: Severity, message: impl Into<String>, platform: Option<Platform>) {
        let message = message.into();
        let key = (severity, message);
        let idx = match self.index.get(&key) {
            Some(idx) => *idx,
            None => {
                let idx = self.results.len();
                self.results.push(LintResult::new(severity, key.1.clone()));
                self.index.insert(key, idx);
                idx
            }
        };
        if let Some(platform) = platform {
            self.results[idx].record_platform(platform);
        }
        self.errors.take();
        self.warnings.take();
    }

    pub fn results(&self) -> &[LintResult] {
        &self.results
    }

    pub fn errors(&self) -> &[LintResult] {
        self.errors.get_or_init(|| self.filtered(Severity::Error))
    }

    pub fn warnings(&self) -> &[LintResult] {
        self.warnings.get_or_init(|| self.filtered(Severity::Warning))
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    fn filtered(&self, severity: Severity) -> Vec<LintResult> {
        self.results
            .iter()
            .filter(|r| r.severity == severity)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Serialize)]
/// Lint outcome for one podspec file, as printed by the CLI.
pub struct FileReport {
    pub file: String,
    pub passed: bool,
    pub results: Vec<LintResult>,
}

#[derive(Debug, Default, Serialize)]
/// Aggregated counts used by printers and the exit code.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub files: usize,
    pub failed: usize,
}

#[derive(Debug, Default, Serialize)]
/// Lint results container for a whole CLI invocation.
pub struct LintSummary {
    pub files: Vec<FileReport>,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_pair_merges_platforms() {
        let mut store = ResultStore::new();
        store.add(Severity::Error, "boom", Some(Platform::Ios));
        store.add(Severity::Error, "boom", Some(Platform::Osx));
        store.add(Severity::Error, "boom", Some(Platform::Ios));
        assert_eq!(store.len(), 1);
        assert_eq!(store.results()[0].platforms, vec![Platform::Ios, Platform::Osx]);
    }

    #[test]
    fn test_severity_is_part_of_identity() {
        let mut store = ResultStore::new();
        store.add(Severity::Error, "same", None);
        store.add(Severity::Warning, "same", None);
        assert_eq!(store.len(), 2);
        assert_eq!(store.errors().len(), 1);
        assert_eq!(store.warnings().len(), 1);
        assert!(store.results()[0].platforms.is_empty());
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut store = ResultStore::new();
        store.add(Severity::Warning, "b", None);
        store.add(Severity::Error, "a", Some(Platform::Ios));
        store.add(Severity::Warning, "b", Some(Platform::Osx));
        let msgs: Vec<&str> = store.results().iter().map(|r| r.message.as_str()).collect();
        assert_eq!(msgs, vec!["b", "a"]);
    }

    #[test]
    fn test_display_platform_suffix() {
        let mut store = ResultStore::new();
        store.add(Severity::Error, "ios only", Some(Platform::Ios));
        store.add(Severity::Warning, "everywhere", Some(Platform::Ios));
        store.add(Severity::Warning, "everywhere", Some(Platform::Osx));
        store.add(Severity::Warning, "root", None);
        let rendered: Vec<String> = store.results().iter().map(|r| r.to_string()).collect();
        assert_eq!(rendered[0], "[ERROR] ios only [iOS]");
        assert_eq!(rendered[1], "[WARNING] everywhere");
        assert_eq!(rendered[2], "[WARNING] root");
    }

    #[test]
    fn test_display_lists_platforms_in_observed_order() {
        let r = LintResult {
            severity: Severity::Warning,
            message: "m".into(),
            platforms: vec![Platform::Osx],
        };
        assert_eq!(r.to_string(), "[WARNING] m [OS X]");
    }
}
