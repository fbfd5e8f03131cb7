//! Podspec documents: loading and the variant tree.
//!
//! A document is a mapping of attribute names to values, optionally carrying
//! nested `subspecs`. Three data formats are accepted, selected by file
//! extension:
//! - `*.podspec.json` (the format CocoaPods itself publishes to trunk)
//! - `*.podspec.yaml` / `*.podspec.yml`
//! - `*.podspec.toml`
//!
//! All formats are normalised into `serde_json::Value` so the resolver and the
//! validation hooks only deal with one value model.

pub mod consumer;
pub mod platform;
pub mod version;

use platform::Platform;
use serde_json::{Map, Value as Json};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Document keys that describe structure rather than attribute values.
const SUBSPECS_KEY: &str = "subspecs";
const PLATFORMS_KEY: &str = "platforms";
const PRE_INSTALL_KEY: &str = "pre_install";
const POST_INSTALL_KEY: &str = "post_install";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read specification file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse specification JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse specification YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse specification TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported specification format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid specification: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Serialization format of a podspec document.
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// File suffixes recognised as podspec documents.
    pub const EXTENSIONS: [&'static str; 4] = ["json", "yaml", "yml", "toml"];

    pub fn from_path(path: &Path) -> Option<Format> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// One variant of a podspec: the root document or a nested subspec.
pub struct Specification {
    name: String,
    full_name: String,
    attributes: Map<String, Json>,
    subspecs: Vec<Specification>,
    available_platforms: Vec<Platform>,
    source_text: Option<String>,
    defined_in_file: Option<PathBuf>,
}

impl Specification {
    /// Build a root specification from an in-memory value.
    pub fn from_value(value: Json) -> Result<Specification, LoadError> {
        Self::build(value, None, &Platform::ALL)
    }

    /// Parse document text. The text is retained for the textual pre-scan.
    pub fn parse(text: &str, format: Format) -> Result<Specification, LoadError> {
        let value: Json = match format {
            Format::Json => serde_json::from_str(text)?,
            Format::Yaml => serde_yaml::from_str(text)?,
            Format::Toml => toml::from_str(text)?,
        };
        let mut spec = Self::from_value(value)?;
        spec.source_text = Some(text.to_string());
        Ok(spec)
    }

    /// Load a podspec from disk, remembering its path and source text.
    pub fn from_file(path: &Path) -> Result<Specification, LoadError> {
        let format = Format::from_path(path)
            .ok_or_else(|| LoadError::UnsupportedFormat(path.to_string_lossy().to_string()))?;
        let text = fs::read_to_string(path)?;
        let mut spec = Self::parse(&text, format)?;
        spec.defined_in_file = Some(path.to_path_buf());
        Ok(spec)
    }

    fn build(
        value: Json,
        parent_name: Option<&str>,
        parent_platforms: &[Platform],
    ) -> Result<Specification, LoadError> {
        let Json::Object(mut attributes) = value else {
            return Err(LoadError::Invalid(
                "a specification must be a mapping of attributes".into(),
            ));
        };

        let name = match attributes.get("name") {
            Some(Json::String(s)) => s.clone(),
            None | Some(Json::Null) if parent_name.is_none() => String::new(),
            Some(other) if parent_name.is_none() => other.to_string(),
            _ => {
                return Err(LoadError::Invalid(format!(
                    "a subspec of `{}` has no name",
                    parent_name.unwrap_or_default()
                )))
            }
        };
        let full_name = match parent_name {
            Some(parent) => format!("{}/{}", parent, name),
            None => name.clone(),
        };

        // A mapping with no recognised platform restricts nothing.
        let available_platforms = match attributes.get(PLATFORMS_KEY) {
            Some(Json::Object(declared))
                if declared.keys().any(|k| Platform::from_key(k).is_some()) =>
            {
                parent_platforms
                    .iter()
                    .copied()
                    .filter(|p| declared.keys().any(|k| Platform::from_key(k) == Some(*p)))
                    .collect()
            }
            _ => parent_platforms.to_vec(),
        };

        let subspecs = match attributes.remove(SUBSPECS_KEY) {
            None | Some(Json::Null) => Vec::new(),
            Some(Json::Array(items)) => items
                .into_iter()
                .map(|item| Self::build(item, Some(full_name.as_str()), &available_platforms))
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(LoadError::Invalid(format!(
                    "`subspecs` of `{}` must be a list",
                    full_name
                )))
            }
        };

        Ok(Specification {
            name,
            full_name,
            attributes,
            subspecs,
            available_platforms,
            source_text: None,
            defined_in_file: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slash-separated name including every ancestor, e.g. `Pod/Core`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn root_name(&self) -> &str {
        self.full_name
            .split('/')
            .next()
            .unwrap_or(self.full_name.as_str())
    }

    /// Raw attribute value declared on this variant. `null` counts as absent.
    pub fn attribute(&self, name: &str) -> Option<&Json> {
        self.attributes.get(name).filter(|v| !v.is_null())
    }

    /// Attribute declared inside this variant's platform block, e.g. `ios.frameworks`.
    pub fn platform_attribute(&self, platform: Platform, name: &str) -> Option<&Json> {
        self.attributes
            .get(platform.key())
            .and_then(|block| block.get(name))
            .filter(|v| !v.is_null())
    }

    pub fn subspecs(&self) -> &[Specification] {
        &self.subspecs
    }

    pub fn available_platforms(&self) -> &[Platform] {
        &self.available_platforms
    }

    pub fn source_text(&self) -> Option<&str> {
        self.source_text.as_deref()
    }

    pub fn defined_in_file(&self) -> Option<&Path> {
        self.defined_in_file.as_deref()
    }

    pub fn pre_install_callback(&self) -> Option<&Json> {
        self.attribute(PRE_INSTALL_KEY)
    }

    pub fn post_install_callback(&self) -> Option<&Json> {
        self.attribute(POST_INSTALL_KEY)
    }

    /// Version as declared on the root, rendered as text.
    pub fn version_text(&self) -> Option<String> {
        self.attribute("version").and_then(scalar_text)
    }

    pub fn summary(&self) -> Option<&str> {
        self.attribute("summary").and_then(Json::as_str)
    }
}

/// Render strings and numbers as text; other values have no text form.
pub fn scalar_text(value: &Json) -> Option<String> {
    match value {
        Json::String(s) => Some(s.clone()),
        Json::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Emptiness as values define it: null, `""`, `[]` and `{}` are empty.
pub fn is_empty_value(value: &Json) -> bool {
    match value {
        Json::Null => true,
        Json::String(s) => s.is_empty(),
        Json::Array(items) => items.is_empty(),
        Json::Object(map) => map.is_empty(),
        Json::Bool(_) | Json::Number(_) => false,
    }
}
