use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub access_token: String,
    pub space_id: String,
    #[serde(default = "default_environment_id")]
    pub environment_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_web_app_url")]
    pub web_app_url: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Display labels for content type ids shown on card badges
    #[serde(default)]
    pub content_type_labels: HashMap<String, String>,
    /// Badge label for content types absent from the map
    #[serde(default = "default_unknown_type_label")]
    pub unknown_type_label: String,
    /// Command used to open an entry in the web app (e.g. "xdg-open")
    #[serde(default)]
    pub open_command: Option<String>,
}

fn default_environment_id() -> String {
    "master".to_string()
}

fn default_base_url() -> String {
    "https://api.contentful.com".to_string()
}

fn default_web_app_url() -> String {
    "https://app.contentful.com".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_unknown_type_label() -> String {
    "Other".to_string()
}
