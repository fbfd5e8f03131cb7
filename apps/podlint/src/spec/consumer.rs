//! Per-variant, per-platform attribute resolution.
//!
//! Precedence, highest first:
//! 1. the variant's platform block (`ios.frameworks`)
//! 2. the variant's own value (`frameworks`)
//! 3. for inherited attributes only, the same two lookups on each ancestor
//!    up to the root

use super::platform::Platform;
use super::Specification;
use crate::models::attribute::{AttributeDescriptor, Container};
use serde_json::Value as Json;

/// Resolves attribute values for one variant under one platform.
pub struct Consumer<'a> {
    /// Root first, the consumed variant last.
    chain: &'a [&'a Specification],
    platform: Platform,
}

impl<'a> Consumer<'a> {
    /// `chain` lists the variant's ancestors from the root down to the variant.
    pub fn new(chain: &'a [&'a Specification], platform: Platform) -> Self {
        debug_assert!(!chain.is_empty(), "consumer needs at least the root spec");
        Self { chain, platform }
    }

    pub fn spec(&self) -> &'a Specification {
        self.chain[self.chain.len() - 1]
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Resolved value, or `Json::Null` when no variant in scope declares it.
    pub fn value(&self, attr: &AttributeDescriptor) -> Json {
        let depth = if attr.inherited { self.chain.len() } else { 1 };
        let found = self
            .chain
            .iter()
            .rev()
            .take(depth)
            .find_map(|spec| {
                spec.platform_attribute(self.platform, attr.name)
                    .or_else(|| spec.attribute(attr.name))
            });
        match found {
            None => Json::Null,
            Some(Json::String(s)) if attr.container == Container::List => {
                Json::Array(vec![Json::String(s.clone())])
            }
            Some(v) => v.clone(),
        }
    }

    /// `requires_arc` as declared; `None` when nothing in scope sets it.
    pub fn requires_arc(&self, attr: &AttributeDescriptor) -> Option<Json> {
        match self.value(attr) {
            Json::Null => None,
            v => Some(v),
        }
    }
}
