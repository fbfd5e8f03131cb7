//! Per-attribute validation hooks.
//!
//! A hook validates the resolved value of exactly one attribute. The registry
//! maps attribute names to plain function pointers; an attribute without an
//! entry simply has no hook. Root hooks run once with no platform context,
//! variant hooks once per (variant, platform) pair.

use super::Reporter;
use crate::spec::version::{Version, BOOTSTRAP_VERSION};
use crate::spec::{scalar_text, Specification};
use serde_json::Value as Json;
use std::collections::HashMap;
use std::path::Path;

/// Longest summary accepted without a warning.
pub const MAX_SUMMARY_LENGTH: usize = 140;

const SUMMARY_PLACEHOLDER: &str = "A short description of";
const DESCRIPTION_PLACEHOLDER: &str = "An optional longer description of";
const EXAMPLE_URL: &str = "http://EXAMPLE";
const SAMPLE_LICENSE_TOKEN: &str = "(example)";
const HEAD_REVISION: &str = "HEAD";
const DISABLE_WARNINGS_PREFIX: &str = "-Wno";

/// Accepted file name suffixes after `<root name>`.
const SPEC_FILE_SUFFIXES: [&str; 5] = [
    ".podspec",
    ".podspec.json",
    ".podspec.yaml",
    ".podspec.yml",
    ".podspec.toml",
];

/// Allowed front doors for GitHub-hosted git sources.
const GITHUB_PREFIXES: [&str; 2] = ["https://github.com", "git://gist.github.com"];

/// What a hook may look at besides the value under validation.
pub struct HookInput<'a> {
    pub root: &'a Specification,
    pub file: Option<&'a Path>,
}

pub type Hook = fn(&HookInput<'_>, &Json, &mut Reporter<'_>);

/// Attribute name to hook lookup table.
pub struct HookRegistry {
    hooks: HashMap<&'static str, Hook>,
}

impl HookRegistry {
    /// Table of every built-in hook.
    pub fn builtin() -> Self {
        let entries: [(&'static str, Hook); 11] = [
            ("name", validate_name),
            ("version", validate_version),
            ("summary", validate_summary),
            ("description", validate_description),
            ("homepage", validate_homepage),
            ("frameworks", validate_frameworks),
            ("weak_frameworks", validate_weak_frameworks),
            ("libraries", validate_libraries),
            ("license", validate_license),
            ("source", validate_source),
            ("compiler_flags", validate_compiler_flags),
        ];
        Self {
            hooks: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, attribute: &str) -> Option<Hook> {
        self.hooks.get(attribute).copied()
    }
}

/// Strings of a list value; a bare string counts as a one-element list.
fn string_list(value: &Json) -> Vec<&str> {
    match value {
        Json::String(s) => vec![s.as_str()],
        Json::Array(items) => items.iter().filter_map(Json::as_str).collect(),
        _ => Vec::new(),
    }
}

fn validate_name(input: &HookInput<'_>, _value: &Json, out: &mut Reporter<'_>) {
    let root_name = input.root.root_name();
    if let Some(file) = input.file {
        let basename = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let matches = basename.strip_prefix(root_name).is_some_and(|rest| {
            SPEC_FILE_SUFFIXES
                .iter()
                .any(|suffix| rest.eq_ignore_ascii_case(suffix))
        });
        if !matches {
            out.error("The name of the spec should match the name of the file.");
        }
    }
    if root_name.chars().any(char::is_whitespace) {
        out.error("The name of a spec should not contain whitespace.");
    }
}

fn validate_version(_input: &HookInput<'_>, value: &Json, out: &mut Reporter<'_>) {
    let text = scalar_text(value).unwrap_or_default();
    if text.trim().is_empty() {
        out.error("A version is required.");
        return;
    }
    match Version::parse(&text) {
        None => out.error("The version of the spec is not a valid version."),
        Some(v) if !v.is_positive() => {
            out.error("The version of the spec should be higher than 0.")
        }
        Some(_) => {}
    }
}

fn validate_summary(_input: &HookInput<'_>, value: &Json, out: &mut Reporter<'_>) {
    let Some(summary) = value.as_str() else {
        return;
    };
    if summary.chars().count() > MAX_SUMMARY_LENGTH {
        out.warning("The summary should be short use `description` (max 140 characters).");
    }
    if summary.contains(SUMMARY_PLACEHOLDER) {
        out.warning("The summary is not meaningful.");
    }
}

fn validate_description(input: &HookInput<'_>, value: &Json, out: &mut Reporter<'_>) {
    let Some(description) = value.as_str() else {
        return;
    };
    if description.contains(DESCRIPTION_PLACEHOLDER) {
        out.warning("The description is not meaningful.");
    }
    if let Some(summary) = input.root.summary() {
        if description == summary {
            out.warning("The description is equal to the summary.");
        }
        if description.chars().count() < summary.chars().count() {
            out.warning("The description is shorter than the summary.");
        }
    }
}

fn validate_homepage(_input: &HookInput<'_>, value: &Json, out: &mut Reporter<'_>) {
    if value.as_str().is_some_and(|h| h.contains(EXAMPLE_URL)) {
        out.warning("The homepage has not been updated from default");
    }
}

fn validate_frameworks(_input: &HookInput<'_>, value: &Json, out: &mut Reporter<'_>) {
    if string_list(value).iter().any(|f| f.ends_with(".framework")) {
        out.error("A framework should only be specified by its name");
    }
}

fn validate_weak_frameworks(_input: &HookInput<'_>, value: &Json, out: &mut Reporter<'_>) {
    if string_list(value).iter().any(|f| f.ends_with(".framework")) {
        out.error("A weak framework should only be specified by its name");
    }
}

fn validate_libraries(_input: &HookInput<'_>, value: &Json, out: &mut Reporter<'_>) {
    let pathed = string_list(value).iter().any(|lib| {
        let lib = lib.to_lowercase();
        lib.ends_with(".a") || lib.ends_with(".dylib")
    });
    if pathed {
        out.error("A library should only be specified by its name.");
    }
}

fn validate_license(_input: &HookInput<'_>, value: &Json, out: &mut Reporter<'_>) {
    let license_type = match value {
        Json::Object(fields) => fields.get("type").and_then(scalar_text),
        other => scalar_text(other),
    };
    let Some(license_type) = license_type else {
        out.warning("Missing license type.");
        return;
    };
    if license_type.chars().all(char::is_whitespace) {
        out.warning("Invalid license type.");
    }
    if license_type.contains(SAMPLE_LICENSE_TOKEN) {
        out.error("Sample license type.");
    }
}

fn validate_source(input: &HookInput<'_>, value: &Json, out: &mut Reporter<'_>) {
    let Some(git) = value.get("git").and_then(Json::as_str) else {
        return;
    };
    let tag = value.get("tag").and_then(scalar_text);
    let commit = value.get("commit").and_then(scalar_text);
    let version = input.root.version_text().unwrap_or_default();

    if git.contains(EXAMPLE_URL) {
        out.error("Example source.");
    }
    if commit
        .as_deref()
        .is_some_and(|c| c.eq_ignore_ascii_case(HEAD_REVISION))
    {
        out.error("The commit of a Git source cannot be `HEAD`.");
    }
    if tag.as_deref().is_some_and(|t| !t.contains(&version)) {
        out.warning("The version should be included in the Git tag.");
    }
    if version == BOOTSTRAP_VERSION {
        if commit.is_none() && tag.is_none() {
            out.error("Git sources should specify either a commit or a tag.");
        }
    } else if tag.is_none() {
        out.warning("Git sources should specify a tag.");
    }

    if git.contains("github.com") {
        if !git.ends_with(".git") {
            out.warning("Github repositories should end in `.git`.");
        }
        if !GITHUB_PREFIXES.iter().any(|p| git.starts_with(p)) {
            out.warning("Github repositories should use `https` link.");
        }
    }
}

fn validate_compiler_flags(_input: &HookInput<'_>, value: &Json, out: &mut Reporter<'_>) {
    let disables_warnings = string_list(value)
        .iter()
        .flat_map(|flags| flags.split_whitespace())
        .any(|flag| flag.starts_with(DISABLE_WARNINGS_PREFIX));
    if disables_warnings {
        out.warning("Warnings must not be disabled (`-Wno compiler` flags).");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResultStore, Severity};
    use serde_json::json;

    fn run_hook(attribute: &str, spec: Json, file: Option<&Path>) -> ResultStore {
        let root = Specification::from_value(spec).unwrap();
        let value = root.attribute(attribute).cloned().unwrap_or(Json::Null);
        let hook = HookRegistry::builtin().get(attribute).unwrap();
        let mut store = ResultStore::new();
        let input = HookInput {
            root: &root,
            file,
        };
        hook(&input, &value, &mut Reporter::new(&mut store, None));
        store
    }

    fn messages(store: &ResultStore) -> Vec<&str> {
        store.results().iter().map(|r| r.message.as_str()).collect()
    }

    #[test]
    fn test_registry_misses_mean_no_hook() {
        let registry = HookRegistry::builtin();
        assert!(registry.get("source").is_some());
        assert!(registry.get("source_files").is_none());
        assert!(registry.get("requires_arc").is_none());
    }

    #[test]
    fn test_name_must_match_file() {
        let spec = json!({ "name": "Pod" });
        for ok in ["Pod.podspec.json", "Pod.podspec.yaml", "Pod.podspec"] {
            let path = Path::new("/tmp/specs").join(ok);
            assert!(run_hook("name", spec.clone(), Some(path.as_path())).is_empty(), "{}", ok);
        }
        let upper = run_hook("name", spec.clone(), Some(Path::new("Pod.podspec.JSON")));
        assert!(upper.is_empty());
        let store = run_hook("name", spec.clone(), Some(Path::new("pod.podspec.json")));
        assert_eq!(store.errors().len(), 1);
        let store = run_hook("name", spec, Some(Path::new("Other.podspec.json")));
        assert_eq!(
            messages(&store),
            vec!["The name of the spec should match the name of the file."]
        );
    }

    #[test]
    fn test_name_without_whitespace() {
        let store = run_hook("name", json!({ "name": "My Pod" }), None);
        assert_eq!(
            messages(&store),
            vec!["The name of a spec should not contain whitespace."]
        );
        assert_eq!(store.errors().len(), 1);
    }

    #[test]
    fn test_version_boundary() {
        let zero = run_hook("version", json!({ "version": "0" }), None);
        assert_eq!(
            messages(&zero),
            vec!["The version of the spec should be higher than 0."]
        );
        assert!(run_hook("version", json!({ "version": "0.0.1" }), None).is_empty());
        assert!(run_hook("version", json!({ "version": 2 }), None).is_empty());
        let empty = run_hook("version", json!({ "version": "" }), None);
        assert_eq!(messages(&empty), vec!["A version is required."]);
        let bad = run_hook("version", json!({ "version": "one" }), None);
        assert_eq!(
            messages(&bad),
            vec!["The version of the spec is not a valid version."]
        );
    }

    #[test]
    fn test_summary_length_and_placeholder() {
        let long = "x".repeat(141);
        let store = run_hook("summary", json!({ "summary": long }), None);
        assert_eq!(store.warnings().len(), 1);
        assert!(run_hook("summary", json!({ "summary": "x".repeat(140) }), None).is_empty());
        let store = run_hook(
            "summary",
            json!({ "summary": "A short description of Pod." }),
            None,
        );
        assert_eq!(messages(&store), vec!["The summary is not meaningful."]);
    }

    #[test]
    fn test_description_against_summary() {
        let store = run_hook(
            "description",
            json!({ "summary": "Same text", "description": "Same text" }),
            None,
        );
        assert_eq!(
            messages(&store),
            vec!["The description is equal to the summary."]
        );
        let store = run_hook(
            "description",
            json!({ "summary": "A longer summary", "description": "Short" }),
            None,
        );
        assert_eq!(
            messages(&store),
            vec!["The description is shorter than the summary."]
        );
        let store = run_hook(
            "description",
            json!({ "description": "An optional longer description of Pod." }),
            None,
        );
        assert_eq!(messages(&store), vec!["The description is not meaningful."]);
    }

    #[test]
    fn test_homepage_placeholder() {
        let store = run_hook("homepage", json!({ "homepage": "http://EXAMPLE/Pod" }), None);
        assert_eq!(store.warnings().len(), 1);
        assert!(run_hook("homepage", json!({ "homepage": "https://pod.dev" }), None).is_empty());
    }

    #[test]
    fn test_frameworks_and_libraries_by_name() {
        let store = run_hook("frameworks", json!({ "frameworks": ["UIKit", "Foo.framework"] }), None);
        assert_eq!(
            messages(&store),
            vec!["A framework should only be specified by its name"]
        );
        let store = run_hook("weak_frameworks", json!({ "weak_frameworks": "Foo.framework" }), None);
        assert_eq!(
            messages(&store),
            vec!["A weak framework should only be specified by its name"]
        );
        let store = run_hook("libraries", json!({ "libraries": ["libFoo.a"] }), None);
        assert_eq!(
            messages(&store),
            vec!["A library should only be specified by its name."]
        );
        assert_eq!(store.errors().len(), 1);
        assert!(run_hook("libraries", json!({ "libraries": ["Foo"] }), None).is_empty());
        assert!(!run_hook("libraries", json!({ "libraries": ["libz.DYLIB"] }), None).is_empty());
    }

    #[test]
    fn test_license_type_rules() {
        let store = run_hook("license", json!({ "license": { "file": "LICENSE" } }), None);
        assert_eq!(messages(&store), vec!["Missing license type."]);
        let store = run_hook("license", json!({ "license": { "type": " \n " } }), None);
        assert_eq!(messages(&store), vec!["Invalid license type."]);
        let store = run_hook("license", json!({ "license": "MIT (example)" }), None);
        assert_eq!(messages(&store), vec!["Sample license type."]);
        assert_eq!(store.errors().len(), 1);
        assert!(run_hook("license", json!({ "license": "MIT" }), None).is_empty());
    }

    #[test]
    fn test_bootstrap_version_needs_tag_or_commit() {
        let store = run_hook(
            "source",
            json!({ "version": "0.0.1", "source": { "git": "https://github.com/x/y" } }),
            None,
        );
        let errors: Vec<&str> = store.errors().iter().map(|r| r.message.as_str()).collect();
        assert_eq!(
            errors,
            vec!["Git sources should specify either a commit or a tag."]
        );
        assert!(!messages(&store).contains(&"Git sources should specify a tag."));
    }

    #[test]
    fn test_github_url_without_git_suffix() {
        let store = run_hook(
            "source",
            json!({
                "version": "1.0.0",
                "source": { "git": "https://github.com/x/y", "tag": "1.0.0" }
            }),
            None,
        );
        assert_eq!(
            messages(&store),
            vec!["Github repositories should end in `.git`."]
        );
        assert_eq!(store.warnings()[0].severity, Severity::Warning);
    }

    #[test]
    fn test_released_version_needs_tag() {
        let store = run_hook(
            "source",
            json!({ "version": "1.0.0", "source": { "git": "https://github.com/x/y" } }),
            None,
        );
        assert!(store.errors().is_empty());
        assert!(messages(&store).contains(&"Git sources should specify a tag."));
    }

    #[test]
    fn test_source_commit_and_tag_rules() {
        let store = run_hook(
            "source",
            json!({
                "version": "1.2.0",
                "source": { "git": "https://github.com/x/y.git", "commit": "head", "tag": "v1.1.0" }
            }),
            None,
        );
        assert_eq!(
            messages(&store),
            vec![
                "The commit of a Git source cannot be `HEAD`.",
                "The version should be included in the Git tag.",
            ]
        );
        let store = run_hook(
            "source",
            json!({
                "version": "1.2.0",
                "source": { "git": "http://EXAMPLE/y.git", "tag": "1.2.0" }
            }),
            None,
        );
        assert_eq!(messages(&store), vec!["Example source."]);
    }

    #[test]
    fn test_github_front_doors() {
        let store = run_hook(
            "source",
            json!({
                "version": "1.0",
                "source": { "git": "git@github.com:x/y.git", "tag": "1.0" }
            }),
            None,
        );
        assert_eq!(
            messages(&store),
            vec!["Github repositories should use `https` link."]
        );
        let store = run_hook(
            "source",
            json!({
                "version": "1.0",
                "source": { "git": "git://gist.github.com/123.git", "tag": "1.0" }
            }),
            None,
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_non_git_sources_are_ignored() {
        let store = run_hook(
            "source",
            json!({ "version": "1.0", "source": { "http": "https://dl.example.org/pod.zip" } }),
            None,
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_compiler_flags_disabling_warnings() {
        let store = run_hook(
            "compiler_flags",
            json!({ "compiler_flags": ["-DDEBUG -Wno-format", "-O2"] }),
            None,
        );
        let warning = &store.warnings()[0];
        assert_eq!(warning.severity, Severity::Warning);
        assert_eq!(
            warning.message,
            "Warnings must not be disabled (`-Wno compiler` flags)."
        );
        assert!(run_hook("compiler_flags", json!({ "compiler_flags": "-DDEBUG" }), None).is_empty());
    }
}
