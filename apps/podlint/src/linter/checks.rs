//! Structural checks run for every (variant, platform) pair.

use super::Reporter;
use crate::models::attribute::AttributeCatalog;
use crate::spec::consumer::Consumer;
use crate::spec::is_empty_value;
use serde_json::Value as Json;

/// Attributes that give a variant content. A variant without any of them and
/// without subspecs is empty.
const CONTENT_ATTRIBUTES: [&str; 6] = [
    "source_files",
    "resources",
    "preserve_paths",
    "dependencies",
    "vendored_libraries",
    "vendored_frameworks",
];

/// Patterns of a file-pattern value. Mappings (e.g. `resource_bundles`) are
/// flattened over their values.
fn flatten_patterns(value: &Json) -> Vec<&str> {
    match value {
        Json::String(s) => vec![s.as_str()],
        Json::Array(items) => items.iter().filter_map(Json::as_str).collect(),
        Json::Object(map) => map.values().flat_map(flatten_patterns).collect(),
        _ => Vec::new(),
    }
}

/// File patterns must be relative to the pod root.
pub fn validate_file_patterns(
    catalog: &dyn AttributeCatalog,
    consumer: &Consumer<'_>,
    out: &mut Reporter<'_>,
) {
    for attr in catalog.file_pattern_attributes() {
        let value = consumer.value(attr);
        if flatten_patterns(&value).iter().any(|p| p.starts_with('/')) {
            out.error(format!(
                "File patterns must be relative and cannot start with a slash ({}).",
                attr.name
            ));
        }
    }
}

pub fn check_requires_arc(
    catalog: &dyn AttributeCatalog,
    consumer: &Consumer<'_>,
    out: &mut Reporter<'_>,
) {
    let Some(attr) = catalog.get("requires_arc") else {
        return;
    };
    if consumer.requires_arc(attr).is_none() {
        out.warning(
            "A value for `requires_arc` should be specified until the migration to a `true` default.",
        );
    }
}

pub fn check_if_spec_is_empty(
    catalog: &dyn AttributeCatalog,
    consumer: &Consumer<'_>,
    out: &mut Reporter<'_>,
) {
    let spec = consumer.spec();
    if !spec.subspecs().is_empty() {
        return;
    }
    let has_content = CONTENT_ATTRIBUTES.iter().any(|name| {
        catalog
            .get(name)
            .is_some_and(|attr| !is_empty_value(&consumer.value(attr)))
    });
    if !has_content {
        out.error(format!(
            "The `{}` spec is empty (no source files, resources, preserve paths, \
             vendored_libraries, vendored_frameworks, dependencies or subspecs).",
            spec.full_name()
        ));
    }
}

pub fn check_install_hooks(consumer: &Consumer<'_>, out: &mut Reporter<'_>) {
    let spec = consumer.spec();
    if spec.pre_install_callback().is_some() {
        out.warning(
            "The pre install hook of the specification DSL has been deprecated, \
             use the `resource_bundles` or the `prepare_command` attributes.",
        );
    }
    if spec.post_install_callback().is_some() {
        out.warning(
            "The post install hook of the specification DSL has been deprecated, \
             use the `resource_bundles` or the `prepare_command` attributes.",
        );
    }
}
