//! Site-wide settings (singleton record)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Site settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_site_name")]
    pub site_name: String,
    #[serde(default = "default_site_description")]
    pub site_description: String,
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Theme colours keyed by role (`primary_color`, ...)
    #[serde(default = "default_theme")]
    pub theme: BTreeMap<String, String>,
    /// Feature flags
    #[serde(default = "default_features")]
    pub features: BTreeMap<String, bool>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            site_description: default_site_description(),
            site_url: default_site_url(),
            default_language: default_language(),
            timezone: default_timezone(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            theme: default_theme(),
            features: default_features(),
        }
    }
}

fn default_site_name() -> String {
    "Enhanced CMS".to_string()
}

fn default_site_description() -> String {
    "A modern content management system".to_string()
}

fn default_site_url() -> String {
    "https://cms.example.com".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_date_format() -> String {
    "YYYY-MM-DD".to_string()
}

fn default_time_format() -> String {
    "24h".to_string()
}

fn default_theme() -> BTreeMap<String, String> {
    [
        ("primary_color", "#3b82f6"),
        ("secondary_color", "#6b7280"),
        ("background_color", "#ffffff"),
        ("text_color", "#1f2937"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_features() -> BTreeMap<String, bool> {
    [
        "drag_and_drop",
        "real_time_preview",
        "media_library",
        "link_manager",
        "export_import",
    ]
    .into_iter()
    .map(|k| (k.to_string(), true))
    .collect()
}
