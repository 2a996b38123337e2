// crates/ayayron-types/src/config.rs
// App configuration embedded at build time (config/*.toml)

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Configuration for the Ayayron navigation shell
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShellConfig {
    pub navbar: NavBarConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavBarConfig {
    /// Text of the brand link
    pub brand: String,
    /// Collapse an expanded navbar when the brand link is selected
    pub collapse_on_select: bool,
}

impl Default for NavBarConfig {
    fn default() -> Self {
        Self {
            brand: "Ayayron".to_string(),
            collapse_on_select: true,
        }
    }
}

/// Configuration for the GoldFishes app
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GoldfishConfig {
    pub title: String,
    /// Id of the host document element the app mounts into
    pub mount_id: String,
}

impl Default for GoldfishConfig {
    fn default() -> Self {
        Self {
            title: "GoldFishes".to_string(),
            mount_id: "app".to_string(),
        }
    }
}

/// Parse a TOML config document
pub fn parse<T: DeserializeOwned>(source: &str) -> Result<T> {
    Ok(toml::from_str(source)?)
}

/// Parse a TOML config document, falling back to defaults when it is invalid
pub fn load_or_default<T: DeserializeOwned + Default>(source: &str, label: &str) -> T {
    match parse(source) {
        Ok(config) => {
            log::debug!("Loaded {} config", label);
            config
        }
        Err(e) => {
            log::warn!("Failed to parse {} config, using defaults: {}", label, e);
            T::default()
        }
    }
}
