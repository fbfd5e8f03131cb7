//! Configuration discovery and effective settings resolution.
//!
//! podlint reads `podlint.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `paths`: `["."]` (every podspec below the repository root)
//! - `output`: `human`
//! - `allow_warnings`: false
//! - `only_errors`: false
//! - `lint.max_comment_lines`: 20
//! - `lint.max_comment_ratio`: 0.2
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::linter::LintSettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILES: [&str; 3] = ["podlint.toml", "podlint.yaml", "podlint.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Thresholds for the textual pre-scan under `[lint]`.
pub struct LintCfg {
    pub max_comment_lines: Option<usize>,
    pub max_comment_ratio: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `podlint.toml|yaml`.
pub struct PodlintConfig {
    /// Default lint targets when none are given on the command line.
    pub paths: Option<Vec<String>>,
    pub output: Option<String>,
    pub allow_warnings: Option<bool>,
    pub only_errors: Option<bool>,
    #[serde(default)]
    pub lint: Option<LintCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub paths: Vec<String>,
    pub output: String,
    pub allow_warnings: bool,
    pub only_errors: bool,
    pub settings: LintSettings,
    /// True when a config file exists at the repository root, even if it
    /// failed to parse.
    pub config_found: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `podlint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `PodlintConfig` from `podlint.toml` or `podlint.yaml|yml` if present.
///
/// A config file that fails to parse is reported and treated as absent.
pub fn load_config(root: &Path) -> Option<PodlintConfig> {
    let toml_path = root.join("podlint.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        return match toml::from_str::<PodlintConfig>(&s) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!(file = %toml_path.display(), error = %e, "ignoring invalid config");
                None
            }
        };
    }
    for yml in ["podlint.yaml", "podlint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            return match serde_yaml::from_str::<PodlintConfig>(&s) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    warn!(file = %p.display(), error = %e, "ignoring invalid config");
                    None
                }
            };
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_paths: &[String],
    cli_output: Option<&str>,
    cli_allow_warnings: Option<bool>,
    cli_only_errors: Option<bool>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let config_found = CONFIG_FILES.iter().any(|f| repo_root.join(f).is_file());
    let cfg = load_config(&repo_root).unwrap_or_default();

    let paths = if cli_paths.is_empty() {
        cfg.paths
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| vec![".".to_string()])
    } else {
        cli_paths.to_vec()
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let allow_warnings = cli_allow_warnings
        .or(cfg.allow_warnings)
        .unwrap_or(false);

    let only_errors = cli_only_errors.or(cfg.only_errors).unwrap_or(false);

    let defaults = LintSettings::default();
    let lint_cfg = cfg.lint.unwrap_or_default();
    let settings = LintSettings {
        max_comment_lines: lint_cfg
            .max_comment_lines
            .unwrap_or(defaults.max_comment_lines),
        max_comment_ratio: lint_cfg
            .max_comment_ratio
            .unwrap_or(defaults.max_comment_ratio),
    };

    Effective {
        repo_root,
        paths,
        output,
        allow_warnings,
        only_errors,
        settings,
        config_found,
    }
}
