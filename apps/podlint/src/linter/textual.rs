//! Checks on the raw document text, independent of attribute values.

use super::{LintSettings, Reporter};
use regex::Regex;
use std::sync::OnceLock;

fn platform_check_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"config\..?os.?").expect("platform check pattern compiles"))
}

fn comment_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*#(?:\s|$)").expect("comment pattern compiles"))
}

/// Scan `text` for deprecated idioms and leftover template comments.
pub fn analyse(text: &str, settings: &LintSettings, out: &mut Reporter<'_>) {
    if platform_check_re().is_match(text) {
        out.error("`config.ios?` and `config.osx?` are deprecated.");
    }
    if text.contains("clean_paths") {
        out.error("clean_paths are deprecated (use preserve_paths).");
    }

    let total_lines = text.lines().count();
    let comment_lines = text
        .lines()
        .filter(|line| comment_line_re().is_match(line))
        .count();
    if total_lines > 0 {
        let ratio = comment_lines as f64 / total_lines as f64;
        if comment_lines > settings.max_comment_lines && ratio > settings.max_comment_ratio {
            out.warning("Comments must be deleted.");
        }
    }
    if text
        .lines()
        .next()
        .is_some_and(|first| comment_line_re().is_match(first))
    {
        out.warning("Comments placed at the top of the specification must be deleted.");
    }
}
