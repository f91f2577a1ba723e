//! Site configuration file handling (folio.toml)

use anyhow::{Context, Result};
use folio_animation::{CrossfadeConfig, RotatorConfig, DEFAULT_INTERVAL_MS};
use folio_theme::{ThemeName, DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level site configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub rotator: RotatorSection,
    #[serde(default)]
    pub data: DataConfig,
}

/// Theme selection and persistence
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Theme used when nothing valid is persisted
    #[serde(default = "default_theme")]
    pub default: ThemeName,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// JSON file for the persisted theme; in-memory when absent
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

fn default_theme() -> ThemeName {
    ThemeName::FALLBACK
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: default_theme(),
            storage_key: default_storage_key(),
            storage_path: None,
        }
    }
}

/// Hero title rotator
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RotatorSection {
    /// Must be positive
    #[serde(default = "default_interval", deserialize_with = "positive_ms")]
    pub interval_ms: u32,
    #[serde(default = "default_startup_delay")]
    pub startup_delay_ms: u32,
    #[serde(default = "default_crossfade")]
    pub crossfade_ms: u32,
    #[serde(default)]
    pub incoming_offset_ms: u32,
    #[serde(default = "default_padding")]
    pub padding_px: f32,
    /// Empty means "use the titles from profile.json"
    #[serde(default = "default_titles")]
    pub titles: Vec<String>,
}

fn default_interval() -> u32 {
    DEFAULT_INTERVAL_MS
}

fn positive_ms<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = u32::deserialize(deserializer)?;
    if value == 0 {
        return Err(serde::de::Error::custom("must be greater than zero"));
    }
    Ok(value)
}

fn default_startup_delay() -> u32 {
    1000
}

fn default_crossfade() -> u32 {
    800
}

fn default_padding() -> f32 {
    20.0
}

fn default_titles() -> Vec<String> {
    vec![
        "Software Engineer".to_string(),
        "Open Source Contributor".to_string(),
        "Rust Enthusiast".to_string(),
    ]
}

impl Default for RotatorSection {
    fn default() -> Self {
        Self {
            interval_ms: default_interval(),
            startup_delay_ms: default_startup_delay(),
            crossfade_ms: default_crossfade(),
            incoming_offset_ms: 0,
            padding_px: default_padding(),
            titles: default_titles(),
        }
    }
}

impl RotatorSection {
    /// Animator settings; crossfade travel and easing keep their defaults
    pub fn to_rotator_config(&self) -> RotatorConfig {
        RotatorConfig {
            interval_ms: self.interval_ms,
            startup_delay_ms: self.startup_delay_ms,
            padding_px: self.padding_px,
            crossfade: CrossfadeConfig {
                duration_ms: self.crossfade_ms,
                incoming_offset_ms: self.incoming_offset_ms,
                ..CrossfadeConfig::default()
            },
        }
    }
}

/// Content data location
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file, or from `folio.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("folio.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml_str(src: &str) -> Result<Self> {
        toml::from_str(src).context("Invalid site configuration")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.theme.default, ThemeName::DefaultDark);
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.rotator.interval_ms, 3000);
        assert_eq!(config.rotator.titles.len(), 3);
    }

    #[test]
    fn test_partial_sections_fill_remaining_fields() {
        let config = SiteConfig::from_toml_str(
            r#"
            [theme]
            default = "matrix"

            [rotator]
            interval_ms = 1500
            incoming_offset_ms = 200
            "#,
        )
        .unwrap();

        assert_eq!(config.theme.default, ThemeName::Matrix);
        assert_eq!(config.theme.storage_key, "theme");

        let rotator = config.rotator.to_rotator_config();
        assert_eq!(rotator.interval_ms, 1500);
        assert_eq!(rotator.startup_delay_ms, 1000);
        assert_eq!(rotator.crossfade.duration_ms, 800);
        assert_eq!(rotator.crossfade.incoming_offset_ms, 200);
    }

    #[test]
    fn test_unknown_default_theme_is_rejected() {
        let err = SiteConfig::from_toml_str("[theme]\ndefault = \"vaporwave\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("Invalid site configuration"));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let err = SiteConfig::from_toml_str("[rotator]\ninterval_ms = 0\n").unwrap_err();
        assert!(format!("{err:#}").contains("must be greater than zero"));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = SiteConfig::default();
        config.theme.storage_path = Some(PathBuf::from("state/theme.json"));
        let src = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml_str(&src).unwrap(), config);
    }
}
