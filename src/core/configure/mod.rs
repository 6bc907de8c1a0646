use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::infrastructure::error::AppResult;

pub mod app;
pub mod database;
pub mod geocoding;
pub mod server;

pub const ENV_PREFIX: &str = "APP";
pub const PROFILE_ENV: &str = "APP_PROFILE";
pub const SETTINGS_DIR_ENV: &str = "APP_SETTINGS_DIR";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Profile {
    #[default]
    Dev,
    Test,
    Prod,
}

impl Profile {
    pub fn from_env() -> Self {
        std::env::var(PROFILE_ENV)
            .ok()
            .and_then(|value| Profile::from_str(&value).ok())
            .unwrap_or_default()
    }
}

pub fn settings_dir() -> PathBuf {
    std::env::var(SETTINGS_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("settings"))
}

/// Layers `base.toml`, then `{profile}.toml`, then `APP__*` environment variables.
pub fn read<T>(dir: &Path, profile: Profile) -> AppResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    let config = Config::builder()
        .add_source(File::from(dir.join("base.toml")).required(false))
        .add_source(File::from(dir.join(format!("{profile}.toml"))).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    Ok(config.try_deserialize()?)
}
