use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{Assets, Localized};

pub static SITE: LazyLock<SiteConfig> = LazyLock::new(|| match SiteConfig::load() {
    Ok(config) => config,
    Err(e) => {
        log::error!("falling back to default site config: {e}");
        SiteConfig::default()
    }
});

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("site config not found")]
    NotFound,
    #[error("couldn't parse site config: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner: String,
    pub title: String,
    pub description: String,
    pub brand: String,
    pub resume: String,
    #[serde(default)]
    pub avatar: String,
    pub contact: ContactConfig,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub sections: Vec<SectionLink>,
    #[serde(default)]
    pub ui: UiTuning,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub map_embed: String,
    #[serde(default)]
    pub relay: RelayMode,
}

impl ContactConfig {
    /// `tel:` target with the punctuation stripped, e.g. `tel:+212663821268`.
    pub fn phone_href(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
            .collect::<String>();
        format!("tel:{digits}")
    }
}

/// Which collaborator receives contact form submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayMode {
    #[default]
    Simulated,
    Disabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionLink {
    pub id: String,
    pub label: Localized,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiTuning {
    pub toast_duration_ms: u64,
    pub nav_scrolled_at: f64,
    pub nav_hide_after: f64,
    pub scroll_top_at: f64,
    pub section_threshold: f64,
    pub header_offset: f64,
    pub submit_delay_ms: u64,
    pub status_reset_ms: u64,
    pub upload_max_files: usize,
    pub upload_max_size_mb: u64,
}

impl Default for UiTuning {
    fn default() -> Self {
        Self {
            toast_duration_ms: 5000,
            nav_scrolled_at: 20.0,
            nav_hide_after: 80.0,
            scroll_top_at: 300.0,
            section_threshold: 0.3,
            header_offset: 80.0,
            submit_delay_ms: 1500,
            status_reset_ms: 3000,
            upload_max_files: 5,
            upload_max_size_mb: 5,
        }
    }
}

impl SiteConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let file = Assets::get("site.json").ok_or(ConfigError::NotFound)?;
        Self::from_json(&file.data)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        serde_json::from_slice(data).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_site_config() {
        let config = SiteConfig::load().expect("site.json should parse");
        assert!(!config.owner.is_empty());
        assert_eq!(config.contact.relay, RelayMode::Simulated);

        let ids = config
            .sections
            .iter()
            .map(|s| s.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids.first(), Some(&"home"));
        assert!(ids.contains(&"skills"));
        assert!(ids.contains(&"contact"));
    }

    #[test]
    fn test_missing_tuning_uses_defaults() {
        let json = br#"{
            "owner": "Jane",
            "title": "Jane | Portfolio",
            "description": "",
            "brand": "Portfolio",
            "resume": "/resume.pdf",
            "contact": {
                "email": "jane@example.com",
                "phone": "(+1) 555 0100",
                "location": "Nowhere",
                "map_embed": ""
            },
            "ui": { "toast_duration_ms": 1000 }
        }"#;
        let config = SiteConfig::from_json(json).unwrap();
        assert_eq!(config.ui.toast_duration_ms, 1000);
        assert_eq!(config.ui.scroll_top_at, 300.0);
        assert_eq!(config.ui.upload_max_files, 5);
        assert_eq!(config.contact.relay, RelayMode::Simulated);
        assert!(config.sections.is_empty());
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let err = SiteConfig::from_json(b"{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_phone_href() {
        let contact = ContactConfig {
            phone: "(+212) 6 63 82 12 68".to_string(),
            ..Default::default()
        };
        assert_eq!(contact.phone_href(), "tel:+212663821268");
    }
}
