//! Platforms a podspec can declare support for.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Ios,
    Osx,
}

impl Platform {
    /// Every platform known to the rulebook, in reporting order.
    pub const ALL: [Platform; 2] = [Platform::Ios, Platform::Osx];

    /// Key used in documents (`platforms.ios`, `ios.source_files`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Osx => "osx",
        }
    }

    /// Human-readable name used in rendered findings.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Osx => "OS X",
        }
    }

    pub fn from_key(key: &str) -> Option<Platform> {
        match key.trim().to_ascii_lowercase().as_str() {
            "ios" => Some(Platform::Ios),
            "osx" => Some(Platform::Osx),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
