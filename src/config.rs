//! Site Configuration
//!
//! Defaults match the stock site layout. A page may override any field with
//! an inline `<script type="application/json" id="site-config">` block.

use log::LevelFilter;
use serde::Deserialize;
use web_sys::Document;

use crate::progress::ClampPolicy;

/// Id of the inline JSON element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_data: String,
    pub events_data: String,
    pub members_data: String,
    pub event_placeholder: String,
    pub member_placeholder: String,
    /// Shown when `eventsRun` is missing or zero
    pub default_events_run: f64,
    /// Shown when `volunteers` is missing or zero
    pub default_volunteers: f64,
    pub clamp: ClampPolicy,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_data: "data/site.json".to_string(),
            events_data: "data/events.json".to_string(),
            members_data: "data/members.json".to_string(),
            event_placeholder: "assets/event-placeholder.jpg".to_string(),
            member_placeholder: "assets/member-placeholder.jpg".to_string(),
            default_events_run: 1.0,
            default_volunteers: 10.0,
            clamp: ClampPolicy::UpperOnly,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse overrides; fields left out keep their defaults
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text)
    }

    /// Read the inline config block, falling back to defaults.
    ///
    /// Runs before the logger exists, so a parse failure is handed back
    /// for the caller to log once logging is up.
    pub fn from_document(document: &Document) -> (Self, Option<String>) {
        let Some(text) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
            return (Self::default(), None);
        };
        match Self::from_json(&text) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(format!("Invalid #{} block, using defaults: {}", CONFIG_ELEMENT_ID, e))),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        console_logger::parse_level(&self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.site_data, "data/site.json");
        assert_eq!(config.events_data, "data/events.json");
        assert_eq!(config.members_data, "data/members.json");
        assert_eq!(config.event_placeholder, "assets/event-placeholder.jpg");
        assert_eq!(config.member_placeholder, "assets/member-placeholder.jpg");
        assert_eq!(config.default_events_run, 1.0);
        assert_eq!(config.default_volunteers, 10.0);
        assert_eq!(config.clamp, ClampPolicy::UpperOnly);
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r#"{"eventsData": "data/2026/events.json", "clamp": "both", "logLevel": "debug"}"#).unwrap();
        assert_eq!(config.events_data, "data/2026/events.json");
        assert_eq!(config.clamp, ClampPolicy::Both);
        assert_eq!(config.log_level(), LevelFilter::Debug);
        assert_eq!(config.site_data, "data/site.json");
    }

    #[test]
    fn test_blank_and_invalid_blocks() {
        assert_eq!(SiteConfig::from_json("  \n").unwrap(), SiteConfig::default());
        assert!(SiteConfig::from_json("{not json").is_err());
        assert!(SiteConfig::from_json(r#"{"clamp": "sideways"}"#).is_err());
    }
}
