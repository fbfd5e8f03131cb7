//! podlint core library.
//!
//! This crate exposes programmatic APIs for validating podspec documents
//! against the podspec DSL rulebook.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `spec`: Podspec loading, platforms, versions, and per-platform value resolution.
//! - `models`: Findings, the merging result store, and the attribute catalog.
//! - `linter`: The validation engine, its hooks, and structural checks.
//! - `lint`: Multi-file runner used by the CLI.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
//!
//! ```
//! use podlint::linter::Linter;
//! use podlint::spec::Specification;
//!
//! let spec = Specification::from_value(serde_json::json!({ "name": "Pod" })).unwrap();
//! let report = Linter::new(spec).lint();
//! assert!(!report.passed());
//! for result in report.errors() {
//!     println!("{}", result);
//! }
//! ```
pub mod cli;
pub mod config;
pub mod lint;
pub mod linter;
pub mod models;
pub mod output;
pub mod spec;
pub mod utils;
