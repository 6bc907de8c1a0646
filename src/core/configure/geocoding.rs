use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GeocodingConfig {
    pub fn is_enabled(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    5
}
