//! Podspec version strings.

use regex::Regex;
use std::sync::OnceLock;

const VERSION_PATTERN: &str = r"^(\d+(?:\.\d+)*)(?:-([0-9A-Za-z.-]+))?$";

/// Version used by freshly generated podspec templates.
pub const BOOTSTRAP_VERSION: &str = "0.0.1";

fn version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern compiles"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Dot-separated numeric segments. A pre-release tag is accepted but not kept.
pub struct Version {
    segments: Vec<u64>,
}

impl Version {
    /// Parse `1`, `1.2.3` or `1.2.3-beta.1`. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Version> {
        let caps = version_re().captures(s.trim())?;
        let segments = caps[1]
            .split('.')
            .map(|seg| seg.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;
        Some(Version { segments })
    }

    /// True when at least one numeric segment is non-zero.
    pub fn is_positive(&self) -> bool {
        self.segments.iter().any(|s| *s > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_common_forms() {
        assert_eq!(Version::parse("1").unwrap().segments, vec![1]);
        assert_eq!(Version::parse("1.2.3").unwrap().segments, vec![1, 2, 3]);
        assert_eq!(Version::parse("2.0-beta.1").unwrap().segments, vec![2, 0]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Version::parse("").is_none());
        assert!(Version::parse("v1.0").is_none());
        assert!(Version::parse("1..2").is_none());
    }

    #[test]
    fn test_zero_boundary() {
        assert!(!Version::parse("0").unwrap().is_positive());
        assert!(!Version::parse("0.0.0").unwrap().is_positive());
        assert!(Version::parse("0.0.1").unwrap().is_positive());
        assert!(Version::parse("0.1").unwrap().is_positive());
    }
}
