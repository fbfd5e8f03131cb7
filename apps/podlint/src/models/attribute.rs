//! Attribute catalog: which podspec attributes exist and how checks treat them.
//!
//! The linter never hardcodes attribute lists for its generic passes; it asks
//! an `AttributeCatalog` for descriptors and filters on their facets:
//! - `root_only`: only meaningful on the top-level document
//! - `required`: absence on the root is reported
//! - `file_patterns`: values are relative glob patterns
//! - `inherited`: the resolver falls back to parent variants
//! - `container`: how the resolver normalises scalar shorthand

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shape of an attribute's value.
pub enum Container {
    /// A single value (string, bool, mapping with fixed keys).
    Scalar,
    /// A list of strings; a bare string is shorthand for a one-element list.
    List,
    /// A mapping of names to values or to lists of patterns.
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub name: &'static str,
    pub root_only: bool,
    pub required: bool,
    pub file_patterns: bool,
    pub inherited: bool,
    pub container: Container,
}

impl AttributeDescriptor {
    const fn root(name: &'static str, required: bool, container: Container) -> Self {
        Self {
            name,
            root_only: true,
            required,
            file_patterns: false,
            inherited: false,
            container,
        }
    }

    const fn variant(name: &'static str, inherited: bool, container: Container) -> Self {
        Self {
            name,
            root_only: false,
            required: false,
            file_patterns: false,
            inherited,
            container,
        }
    }

    const fn patterns(name: &'static str, container: Container) -> Self {
        Self {
            name,
            root_only: false,
            required: false,
            file_patterns: true,
            inherited: false,
            container,
        }
    }
}

/// Read-only table of attribute descriptors consulted by the linter.
pub trait AttributeCatalog: Send + Sync {
    fn attributes(&self) -> &[AttributeDescriptor];

    fn get(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes().iter().find(|a| a.name == name)
    }

    fn root_attributes(&self) -> Vec<&AttributeDescriptor> {
        self.attributes().iter().filter(|a| a.root_only).collect()
    }

    fn variant_attributes(&self) -> Vec<&AttributeDescriptor> {
        self.attributes().iter().filter(|a| !a.root_only).collect()
    }

    fn file_pattern_attributes(&self) -> Vec<&AttributeDescriptor> {
        self.attributes().iter().filter(|a| a.file_patterns).collect()
    }
}

use Container::{List, Map, Scalar};

const DSL_ATTRIBUTES: &[AttributeDescriptor] = &[
    // Root specification
    AttributeDescriptor::root("name", true, Scalar),
    AttributeDescriptor::root("version", true, Scalar),
    AttributeDescriptor::root("authors", true, Map),
    AttributeDescriptor::root("social_media_url", false, Scalar),
    AttributeDescriptor::root("license", true, Scalar),
    AttributeDescriptor::root("homepage", true, Scalar),
    AttributeDescriptor::root("source", true, Map),
    AttributeDescriptor::root("summary", true, Scalar),
    AttributeDescriptor::root("description", false, Scalar),
    AttributeDescriptor::root("screenshots", false, List),
    AttributeDescriptor::root("documentation_url", false, Scalar),
    AttributeDescriptor::root("prepare_command", false, Scalar),
    // Build settings
    AttributeDescriptor::variant("dependencies", false, Map),
    AttributeDescriptor::variant("requires_arc", true, Scalar),
    AttributeDescriptor::variant("frameworks", true, List),
    AttributeDescriptor::variant("weak_frameworks", true, List),
    AttributeDescriptor::variant("libraries", true, List),
    AttributeDescriptor::variant("compiler_flags", true, List),
    AttributeDescriptor::variant("xcconfig", true, Map),
    AttributeDescriptor::variant("prefix_header_contents", true, Scalar),
    AttributeDescriptor::variant("prefix_header_file", true, Scalar),
    AttributeDescriptor::variant("header_dir", true, Scalar),
    AttributeDescriptor::variant("header_mappings_dir", true, Scalar),
    // File patterns
    AttributeDescriptor::patterns("source_files", List),
    AttributeDescriptor::patterns("public_header_files", List),
    AttributeDescriptor::patterns("resources", List),
    AttributeDescriptor::patterns("resource_bundles", Map),
    AttributeDescriptor::patterns("exclude_files", List),
    AttributeDescriptor::patterns("preserve_paths", List),
    AttributeDescriptor::patterns("vendored_frameworks", List),
    AttributeDescriptor::patterns("vendored_libraries", List),
    // Subspecs
    AttributeDescriptor::variant("default_subspec", false, Scalar),
];

#[derive(Debug, Default, Clone, Copy)]
/// The podspec DSL attribute table.
pub struct DslCatalog;

impl AttributeCatalog for DslCatalog {
    fn attributes(&self) -> &[AttributeDescriptor] {
        DSL_ATTRIBUTES
    }
}
