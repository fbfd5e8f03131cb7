//! podlint CLI binary entry point.
//! Delegates to the library for linting and prints results.

use clap::Parser;
use podlint::cli::{Cli, Commands};
use podlint::lint::{self, LintOptions};
use podlint::{config, output, utils};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PODLINT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint {
            paths,
            repo_root,
            output,
            allow_warnings,
            only_errors,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                &paths,
                output.as_deref(),
                if allow_warnings { Some(true) } else { None },
                if only_errors { Some(true) } else { None },
            );
            // Friendly note if no podlint config was found
            if eff.output != "json" && !eff.config_found {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No podlint.toml found; using defaults."
                );
            }
            let opts = LintOptions {
                settings: eff.settings,
                allow_warnings: eff.allow_warnings,
                only_errors: eff.only_errors,
            };
            let (result, errors) = lint::run_lint(&eff.repo_root, &eff.paths, opts);
            output::print_lint(&result, &eff.output, &errors);
            if result.files.is_empty() {
                std::process::exit(2);
            }
            if result.summary.failed > 0 {
                std::process::exit(1);
            }
        }
    }
}
