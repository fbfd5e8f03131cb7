//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "podlint",
    version,
    about = "Lint podspec documents",
    long_about = "podlint validates podspec documents (.podspec.json, .podspec.yaml, .podspec.toml) against the podspec DSL rulebook and reports errors and warnings.\n\nConfiguration precedence: CLI > podlint.toml > defaults.",
    after_help = "Examples:\n  podlint lint\n  podlint lint Specs/Pod.podspec.json\n  podlint lint 'Specs/**/*.podspec.yaml' --output json\n  podlint lint --allow-warnings\n  podlint lint --only-errors",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current podlint version."
    )]
    Version,
    /// Lint podspec files
    #[command(
        about = "Run lint checks",
        long_about = "Validate podspec files. Paths may be files, directories (searched recursively) or glob patterns. Errors always fail; warnings fail unless --allow-warnings is set.",
        after_help = "Examples:\n  podlint lint Pod.podspec.json\n  podlint lint Specs --output json"
    )]
    Lint {
        #[arg(help = "Podspec files, directories or glob patterns (default: config paths or .)")]
        paths: Vec<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Pass even when only warnings are reported")]
        allow_warnings: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Report errors only; warnings are dropped")]
        only_errors: bool,
    },
}
