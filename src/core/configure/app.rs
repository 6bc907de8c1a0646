use serde::Deserialize;

use crate::core::configure::database::DatabaseConfig;
use crate::core::configure::geocoding::GeocodingConfig;
use crate::core::configure::server::ServerConfig;
use crate::core::configure::{self, Profile};
use crate::infrastructure::error::AppResult;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: Profile,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub geocoding: GeocodingConfig,
}

impl AppConfig {
    pub fn read() -> AppResult<Self> {
        let profile = Profile::from_env();
        let mut config: AppConfig = configure::read(&configure::settings_dir(), profile)?;
        config.profile = profile;
        Ok(config)
    }
}
