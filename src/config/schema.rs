use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::resolver::AssetType;

/// Root configuration structure for asset-stamp.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Deployment environment configuration
    #[serde(default)]
    pub environment: EnvironmentConfig,

    /// Stylesheet bundles
    #[serde(default)]
    pub stylesheets: TypeConfig,

    /// Script bundles
    #[serde(default)]
    pub scripts: TypeConfig,
}

/// Configuration for one asset type's bundles
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TypeConfig {
    /// Base directory holding this type's files; defaults to the
    /// conventional public directory for the type
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Bundle name → ordered list of constituent files, relative to `dir`
    #[serde(default)]
    pub bundles: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable bundle-level fingerprint caching
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Environments in which caches are populated eagerly at startup
    #[serde(default = "default_prewarm")]
    pub prewarm: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            prewarm: default_prewarm(),
        }
    }
}

fn default_prewarm() -> Vec<String> {
    vec!["production".to_string(), "staging".to_string()]
}

impl EnvironmentConfig {
    pub fn is_prewarm(&self, environment: &str) -> bool {
        self.prewarm.iter().any(|e| e == environment)
    }
}

impl Config {
    fn section(&self, ty: AssetType) -> &TypeConfig {
        match ty {
            AssetType::Stylesheet => &self.stylesheets,
            AssetType::Script => &self.scripts,
        }
    }

    /// Base directory for the given asset type
    pub fn assets_dir(&self, ty: AssetType) -> PathBuf {
        self.section(ty)
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(ty.default_dir()))
    }

    /// Configured bundles for the given asset type
    pub fn bundles(&self, ty: AssetType) -> &BTreeMap<String, Vec<String>> {
        &self.section(ty).bundles
    }

    /// Full, ordered file paths for a bundle; empty if the bundle is not
    /// configured
    pub fn bundle_filepaths(&self, bundle: &str, ty: AssetType) -> Vec<PathBuf> {
        let dir = self.assets_dir(ty);
        self.bundles(ty)
            .get(bundle)
            .map(|files| files.iter().map(|f| dir.join(f)).collect())
            .unwrap_or_default()
    }

    /// Validate load-time constraints
    pub fn validate(&self) -> Result<(), String> {
        if self
            .environment
            .prewarm
            .iter()
            .any(|tag| tag.trim().is_empty())
        {
            return Err("pre-warm environment names must be non-empty".to_string());
        }
        Ok(())
    }

    /// Generate the default configuration file contents
    pub fn default_toml() -> String {
        r#"[cache]
enabled = true

[environment]
# Environments in which `asset-stamp warm` populates caches at startup
prewarm = ["production", "staging"]

[stylesheets]
dir = "public/stylesheets"

[stylesheets.bundles]
application = ["application.css", "layout.css"]

[scripts]
dir = "public/javascripts"

[scripts.bundles]
application = ["application.js"]
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.cache.enabled);
        assert!(config.environment.is_prewarm("production"));
        assert!(config.environment.is_prewarm("staging"));
        assert!(!config.environment.is_prewarm("development"));
        assert!(config.bundles(AssetType::Stylesheet).is_empty());
        assert_eq!(
            config.assets_dir(AssetType::Stylesheet),
            PathBuf::from("public/stylesheets")
        );
        assert_eq!(
            config.assets_dir(AssetType::Script),
            PathBuf::from("public/javascripts")
        );
    }

    #[test]
    fn test_parse_bundles() {
        let config: Config = toml::from_str(
            r#"
            [stylesheets]
            dir = "css"

            [stylesheets.bundles]
            app = ["b.css", "a.css"]
            "#,
        )
        .unwrap();

        // Order is the configured order, not sorted.
        assert_eq!(
            config.bundle_filepaths("app", AssetType::Stylesheet),
            vec![PathBuf::from("css/b.css"), PathBuf::from("css/a.css")]
        );
        assert!(config
            .bundle_filepaths("missing", AssetType::Stylesheet)
            .is_empty());
        assert!(config
            .bundle_filepaths("app", AssetType::Script)
            .is_empty());
    }

    #[test]
    fn test_default_toml_parses() {
        let config: Config = toml::from_str(&Config::default_toml()).unwrap();
        assert!(config.cache.enabled);
        assert_eq!(
            config.bundles(AssetType::Stylesheet)["application"],
            vec!["application.css".to_string(), "layout.css".to_string()]
        );
        assert_eq!(
            config.bundle_filepaths("application", AssetType::Script),
            vec![PathBuf::from("public/javascripts/application.js")]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_prewarm_tags() {
        let mut config = Config::default();
        config.environment.prewarm.push("  ".to_string());
        assert!(config.validate().is_err());
    }
}
