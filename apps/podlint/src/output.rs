//! Output rendering for lint results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-file results and a top-level summary.

use crate::models::{LintSummary, Severity};
use crate::utils::{self, use_colors};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

/// Print lint results in the requested format. `errors` are discovery
/// problems (bad patterns, inputs that matched nothing).
pub fn print_lint(res: &LintSummary, output: &str, errors: &[String]) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_lint_json(res, errors))
                .expect("lint summary serializes")
        ),
        _ => {
            for e in errors {
                eprintln!("{} {}", utils::error_prefix(), e);
            }
            let color = use_colors(output);
            for f in &res.files {
                let header = format!(" -> {}", f.file);
                match (f.passed, color) {
                    (true, true) => println!("{} {}", header.bold(), "passed".green()),
                    (true, false) => println!("{} passed", header),
                    (false, true) => println!("{}", header.bold()),
                    (false, false) => println!("{}", header),
                }
                for r in &f.results {
                    let line = format!("    - {}", r);
                    if !color {
                        println!("{}", line);
                    } else if r.severity == Severity::Error {
                        println!("{}", line.red());
                    } else {
                        println!("{}", line.yellow());
                    }
                }
            }
            let summary = format!(
                "— Summary — files={} failed={} errors={} warnings={}",
                res.summary.files, res.summary.failed, res.summary.errors, res.summary.warnings
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintSummary, errors: &[String]) -> JsonVal {
    let mut out = serde_json::to_value(res).expect("lint summary serializes");
    if let JsonVal::Object(map) = &mut out {
        map.insert("errors".into(), serde_json::json!(errors));
    }
    out
}
