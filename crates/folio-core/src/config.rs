//! Site configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "owner_name": "Ada Lovelace", "contact_email": "ada@example.com" }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::notify::NotificationTimings;
use crate::scroll::ScrollSettings;

/// Everything that varies between deployments of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name typed out in the hero
    pub owner_name: String,
    /// Recipient of the contact form `mailto:` link
    pub contact_email: String,
    pub github_url: String,
    pub typing_interval_ms: u64,
    /// Delay between a successful submission and the form being cleared
    pub form_reset_delay_ms: u64,
    pub scroll: ScrollSettings,
    pub notifications: NotificationTimings,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Sonu Yadav".to_string(),
            contact_email: "sonuyadav97297@gmail.com".to_string(),
            github_url: "https://github.com/Raos0nu".to_string(),
            typing_interval_ms: 150,
            form_reset_delay_ms: 1000,
            scroll: ScrollSettings::default(),
            notifications: NotificationTimings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FolioError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the page misbehave.
    pub fn validate(&self) -> FolioResult<()> {
        if self.contact_email.is_empty() {
            return Err(FolioError::Config("contact_email must not be empty".into()));
        }
        if self.typing_interval_ms == 0 {
            return Err(FolioError::Config("typing_interval_ms must be positive".into()));
        }
        if self.scroll.scroll_top_threshold < self.scroll.scrolled_threshold {
            return Err(FolioError::Config(
                "scroll_top_threshold must not be below scrolled_threshold".into(),
            ));
        }
        Ok(())
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn form_reset_delay(&self) -> Duration {
        Duration::from_millis(self.form_reset_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_the_page() {
        let config = SiteConfig::default();
        assert_eq!(config.typing_interval(), Duration::from_millis(150));
        assert_eq!(config.form_reset_delay(), Duration::from_millis(1000));
        assert_eq!(config.scroll.scrolled_threshold, 50.0);
        assert_eq!(config.scroll.scroll_top_threshold, 300.0);
        assert_eq!(config.notifications.lifetime(), Duration::from_millis(5300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            SiteConfig::from_json(r#"{ "owner_name": "Ada", "scroll": { "anchor_offset": 64 } }"#)
                .unwrap();
        assert_eq!(config.owner_name, "Ada");
        assert_eq!(config.scroll.anchor_offset, 64.0);
        assert_eq!(config.scroll.section_lead, 100.0);
        assert_eq!(config.contact_email, SiteConfig::default().contact_email);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = SiteConfig::from_json(r#"{ "typing_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));

        let err = SiteConfig::from_json(r#"{ "contact_email": "" }"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = SiteConfig::from_json("{").unwrap_err();
        assert!(matches!(err, FolioError::Serialization(_)));
    }

    #[test]
    fn load_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{ "owner_name": "Grace" }"#).unwrap();
        assert_eq!(SiteConfig::load(file.path()).unwrap().owner_name, "Grace");
    }

    #[test]
    fn load_missing_file() {
        let err = SiteConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }
}
