//! Folio configuration file handling

use anyhow::{Context, Result};
use folio_content::ContentRegistry;
use folio_layout::CarouselConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE: &str = "folio.toml";

/// Top-level Folio configuration (folio.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

/// Rendered site output
#[derive(Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Where `folio render` writes the page
    #[serde(default = "default_output")]
    pub output: String,
    /// Year in the footer copyright line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

fn default_output() -> String {
    "dist/index.html".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            year: None,
        }
    }
}

/// Theme preference storage
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// JSON file holding the persisted preference
    #[serde(default = "default_store")]
    pub store: String,
    /// Stand-in for the system dark-mode preference
    #[serde(default)]
    pub prefers_dark: bool,
}

fn default_store() -> String {
    ".folio/state.json".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            store: default_store(),
            prefers_dark: false,
        }
    }
}

/// Content source
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Registry TOML replacing the built-in content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl FolioConfig {
    /// Load configuration from a file or a directory containing folio.toml.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            tracing::debug!(
                "FolioConfig::load - {} not found, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FolioConfig = toml::from_str(content)?;
        if !(config.carousel.step_px.is_finite() && config.carousel.step_px >= 0.0) {
            anyhow::bail!("carousel.step_px must be a non-negative number");
        }
        if !(config.carousel.reference_fps.is_finite() && config.carousel.reference_fps > 0.0) {
            anyhow::bail!("carousel.reference_fps must be positive");
        }
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// The configured registry, or the built-in one
    pub fn registry(&self) -> Result<ContentRegistry> {
        match &self.content.path {
            Some(path) => ContentRegistry::load(Path::new(path))
                .with_context(|| format!("Failed to load content from {}", path)),
            None => Ok(ContentRegistry::builtin()),
        }
    }

    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.theme.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_layout::{FrameTiming, WrapPolicy};
    use std::time::Duration;

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config = FolioConfig::from_toml_str("").unwrap();
        assert_eq!(config.site.output, "dist/index.html");
        assert_eq!(config.carousel, CarouselConfig::default());
        assert_eq!(config.theme.store, ".folio/state.json");
        assert!(config.content.path.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = FolioConfig::from_toml_str(
            r#"
            [carousel]
            quiet_period_ms = 2000
            wrap = "reset"

            [theme]
            prefers_dark = true
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.quiet_period(), Duration::from_secs(2));
        assert_eq!(config.carousel.wrap, WrapPolicy::Reset);
        assert_eq!(config.carousel.timing, FrameTiming::Elapsed);
        assert_eq!(config.carousel.step_px, 0.5);
        assert!(config.theme.prefers_dark);
    }

    #[test]
    fn test_rejects_bad_carousel_values() {
        assert!(FolioConfig::from_toml_str("[carousel]\nstep_px = -1.0").is_err());
        assert!(FolioConfig::from_toml_str("[carousel]\nreference_fps = 0.0").is_err());
        assert!(FolioConfig::from_toml_str("[carousel]\nwrap = \"bounce\"").is_err());
    }

    #[test]
    fn test_round_trip() {
        let mut config = FolioConfig::default();
        config.site.year = Some(2025);
        config.content.path = Some("content.toml".to_string());
        let parsed = FolioConfig::from_toml_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.site.year, Some(2025));
        assert_eq!(parsed.content.path.as_deref(), Some("content.toml"));
        assert_eq!(parsed.carousel, config.carousel);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join(format!("folio-missing-{}.toml", std::process::id()));
        let config = FolioConfig::load(&path).unwrap();
        assert_eq!(config.site.output, "dist/index.html");
    }
}
