//! Fingerprint resolution and memoization.
//!
//! `CommitResolver` answers "which commit last touched these files" and
//! memoizes successes for process lifetime. `BundleResolver` does the same
//! per configured bundle, and `WarmupRunner` eagerly populates both caches
//! at process start in pre-warm environments.

mod bundle;
mod commit;
mod warmup;

pub use bundle::BundleResolver;
pub use commit::CommitResolver;
pub use warmup::{WarmupRunner, WarmupStats};

use std::fmt;

use crate::error::{StampError, StampResult};

/// Recognized asset bundle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Stylesheet,
    Script,
}

impl AssetType {
    pub const ALL: [AssetType; 2] = [AssetType::Stylesheet, AssetType::Script];

    /// Parse a user-supplied type name.
    ///
    /// Accepts the canonical names and their conventional file extensions.
    pub fn from_name(name: &str) -> StampResult<Self> {
        match name {
            "stylesheet" | "css" => Ok(AssetType::Stylesheet),
            "script" | "js" => Ok(AssetType::Script),
            _ => Err(StampError::UnknownAssetType {
                name: name.to_string(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AssetType::Stylesheet => "stylesheet",
            AssetType::Script => "script",
        }
    }

    /// Conventional base directory for this type's files
    pub(crate) fn default_dir(self) -> &'static str {
        match self {
            AssetType::Stylesheet => "public/stylesheets",
            AssetType::Script => "public/javascripts",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
