//! Configuration management for the Joyous Menu Editor front-end
//!
//! Handles loading, saving, and validating configuration.
//! Configuration is persisted as JSON so the hosting page can embed it verbatim.

use crate::error::{ConfigError, ConfigResult};
use crate::ui::theme::{ColorTheme, ShadeTheme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Locale bundled with the editor and used as the fallback dictionary
pub const DEFAULT_LOCALE: &str = "zh_cn";

/// Directory holding bundled translation resources
pub const DEFAULT_RESOURCE_DIR: &str = "./assets/i18n";

/// Attribute marking elements whose content is translated
pub const DEFAULT_I18N_ATTRIBUTE: &str = "data-i18n";

/// Marker replaced by the resolved text during a refresh
pub const DEFAULT_MARKER: &str = "$$";

/// Attribute carrying a command name for click dispatch
pub const DEFAULT_CLICK_ATTRIBUTE: &str = "data-click";

/// Default notification lifetime in milliseconds
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 4000;

/// Front-end configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Translation configuration
    pub i18n: I18nConfig,

    /// UI configuration
    pub ui: UiConfig,
}

impl Config {
    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::LoadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::SaveError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject values the front-end cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        let required = [
            ("i18n.default_locale", &self.i18n.default_locale),
            ("i18n.attribute", &self.i18n.attribute),
            ("i18n.marker", &self.i18n.marker),
            ("ui.click_attribute", &self.ui.click_attribute),
        ];
        for (key, value) in required {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Where translation resources are fetched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceLocation {
    /// Local directory containing `<locale>.json` files
    Directory(PathBuf),
    /// Base URL under which `<locale>.json` resources are served
    Url(String),
}

impl Default for ResourceLocation {
    fn default() -> Self {
        Self::Directory(PathBuf::from(DEFAULT_RESOURCE_DIR))
    }
}

/// Translation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale of the immutable fallback dictionary
    pub default_locale: String,

    /// Locale loaded as the active dictionary at startup; `None` leaves it empty
    /// so every key resolves from the default dictionary
    pub locale: Option<String>,

    /// Where resources live
    pub resources: ResourceLocation,

    /// Attribute marking translated elements
    pub attribute: String,

    /// Marker substring replaced during refresh
    pub marker: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            locale: None,
            resources: ResourceLocation::default(),
            attribute: DEFAULT_I18N_ATTRIBUTE.to_string(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Translation key of the product name shown in titles
    pub app_name_key: String,

    /// Id of the in-page title element
    pub page_title_id: String,

    /// Attribute carrying click command names
    pub click_attribute: String,

    /// Initial light/dark preference
    pub shade: ShadeTheme,

    /// Initial color theme
    pub color_theme: ColorTheme,

    /// Id of the element theme transitions animate from
    pub animation_center_id: String,

    /// Default notification lifetime in milliseconds (0 keeps it open)
    pub notification_duration_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            app_name_key: "product.name".to_string(),
            page_title_id: "ui-title".to_string(),
            click_attribute: DEFAULT_CLICK_ATTRIBUTE.to_string(),
            shade: ShadeTheme::default(),
            color_theme: ColorTheme::default(),
            animation_center_id: "explorerSwitcher".to_string(),
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
        }
    }
}
