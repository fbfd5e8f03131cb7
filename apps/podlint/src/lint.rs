//! Lint runner across podspec files.
//!
//! Expands CLI paths into podspec files, lints each file with its own
//! `Linter` run, and produces a `LintSummary`. Files are independent, so they
//! are linted in parallel; the report is sorted by file for stable output.

use crate::linter::{LintSettings, Linter};
use crate::models::{FileReport, LintSummary, Severity, Summary};
use crate::spec::Format;
use glob::glob;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options shared by every file of one invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LintOptions {
    pub settings: LintSettings,
    pub allow_warnings: bool,
    /// Drop warnings from the report entirely.
    pub only_errors: bool,
}

/// True for file names like `Pod.podspec.json`.
pub fn is_podspec_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    Format::EXTENSIONS
        .iter()
        .any(|ext| name.ends_with(&format!(".podspec.{}", ext)))
}

/// Expand files, directories and glob patterns into podspec files.
///
/// Returns the sorted, deduplicated targets plus one message per input that
/// was invalid or matched nothing.
pub fn discover_targets(root: &Path, inputs: &[String]) -> (Vec<PathBuf>, Vec<String>) {
    let mut targets: BTreeSet<PathBuf> = BTreeSet::new();
    let mut errors: Vec<String> = Vec::new();
    for input in inputs {
        let path = root.join(input);
        let before = targets.len();
        if path.is_file() {
            targets.insert(path);
        } else if path.is_dir() {
            for ext in Format::EXTENSIONS {
                let pattern = path.join(format!("**/*.podspec.{}", ext));
                collect_glob(&pattern.to_string_lossy(), &mut targets, &mut errors);
            }
        } else {
            collect_glob(&path.to_string_lossy(), &mut targets, &mut errors);
        }
        if targets.len() == before {
            errors.push(format!("No podspec found for `{}`", input));
        }
    }
    (targets.into_iter().collect(), errors)
}

fn collect_glob(pattern: &str, targets: &mut BTreeSet<PathBuf>, errors: &mut Vec<String>) {
    match glob(pattern) {
        Ok(paths) => {
            for p in paths.flatten() {
                if p.is_file() && is_podspec_file(&p) {
                    targets.insert(p);
                }
            }
        }
        Err(e) => errors.push(format!("Invalid pattern `{}`: {}", pattern, e)),
    }
}

/// Lint one file, naming it relative to `root` when possible.
pub fn lint_file(root: &Path, path: &Path, opts: LintOptions) -> FileReport {
    let report = Linter::from_path(path).with_settings(opts.settings).lint();
    let file = pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string();
    debug!(file = %file, results = report.results().len(), "linted file");
    let mut results = report.into_results();
    if opts.only_errors {
        results.retain(|r| r.severity == Severity::Error);
    }
    let has_errors = results.iter().any(|r| r.severity == Severity::Error);
    let has_warnings = results.iter().any(|r| r.severity == Severity::Warning);
    FileReport {
        file,
        passed: !has_errors && (!has_warnings || opts.allow_warnings),
        results,
    }
}

/// Run lint across every podspec matched by `inputs`.
pub fn run_lint(root: &Path, inputs: &[String], opts: LintOptions) -> (LintSummary, Vec<String>) {
    let (targets, errors) = discover_targets(root, inputs);
    let files: Vec<FileReport> = targets
        .par_iter()
        .map(|path| lint_file(root, path, opts))
        .collect();
    let summary = summarize(&files);
    (LintSummary { files, summary }, errors)
}

fn summarize(files: &[FileReport]) -> Summary {
    let mut summary = Summary {
        files: files.len(),
        ..Summary::default()
    };
    for f in files {
        let errs = f
            .results
            .iter()
            .filter(|r| r.severity == Severity::Error)
            .count();
        summary.errors += errs;
        summary.warnings += f.results.len() - errs;
        if !f.passed {
            summary.failed += 1;
        }
    }
    summary
}
