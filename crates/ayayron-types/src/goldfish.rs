// crates/ayayron-types/src/goldfish.rs
// Model for the GoldFishes app

use crate::config::GoldfishConfig;

/// Class of the GoldFishes root element
pub const APP_CLASS: &str = "App";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldfishApp {
    title: String,
}

impl GoldfishApp {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn from_config(config: &GoldfishConfig) -> Self {
        Self::new(config.title.clone())
    }

    /// Heading and document title
    pub fn title(&self) -> &str {
        &self.title
    }
}
