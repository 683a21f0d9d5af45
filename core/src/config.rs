//! Handles the configuration of mbset.
//!
//! this module is responsible for parsing the Mbset.toml file and environment overrides.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use std::{path::PathBuf, str::FromStr, time::Duration};

pub static DEFAULT_CONFIG: &str = include_str!("../Mbset.toml");

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// What level of logging to use.
    /// Default is "info".
    #[serde(default = "default_log_level")]
    #[serde(deserialize_with = "de_log_level")]
    pub log_level: log::LevelFilter,
    /// Settings for the area lookup service.
    #[serde(default)]
    pub lookup: LookupSettings,
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            lookup: LookupSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the config file and environment variables.
    ///
    /// The environment variables are prefixed with `MBSET_`, nested keys are separated by `__`
    /// (e.g. `MBSET_LOOKUP__SERVER_URL`).
    ///
    /// # Arguments
    ///
    /// * `config` - The path to the config file.
    /// * `log_level` - Overrides the log level from the config file, if set.
    ///
    /// # Errors
    ///
    /// This function will return an error if the config file is not found or if the config file is
    /// invalid.
    #[inline]
    pub fn init(config: PathBuf, log_level: Option<log::LevelFilter>) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::from(config))
            .add_source(
                Environment::with_prefix("MBSET")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut settings: Self = s.try_deserialize()?;

        if let Some(log_level) = log_level {
            settings.log_level = log_level;
        }

        Ok(settings)
    }

    /// Get the (default) path to the config file.
    /// If the config file does not exist at this path, it will be created with the default config.
    ///
    /// See [`crate::get_config_dir`] for more information about where this default path is located.
    ///
    /// # Errors
    ///
    /// This function will return an error if the system config directory (e.g., `~/.config` on linux) could not be found, or if the config file was missing and could not be created.
    #[inline]
    pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
        match crate::get_config_dir() {
            Ok(config_dir) => Self::ensure_config_file(&config_dir),
            Err(e) => {
                log::error!("Error: {e}");
                Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Unable to find the config directory for mbset.",
                ))
            }
        }
    }

    /// Returns the path of the config file in `config_dir`, writing the default config there first if it is missing.
    fn ensure_config_file(config_dir: &std::path::Path) -> Result<PathBuf, std::io::Error> {
        // if the config directory does not exist, create it
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir)?;
        }
        let config_file = config_dir.join("Mbset.toml");

        if !config_file.exists() {
            std::fs::write(&config_file, DEFAULT_CONFIG)?;
        }

        Ok(config_file)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LookupSettings {
    /// The endpoint area names are resolved against.
    /// Default is "<http://bono.metabrainz.org:8000/area-lookup/json>".
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// How long to wait for the lookup server, in seconds.
    /// Default is 10.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl LookupSettings {
    #[must_use]
    #[inline]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_server_url() -> String {
    "http://bono.metabrainz.org:8000/area-lookup/json".to_owned()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for LookupSettings {
    #[inline]
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn de_log_level<'de, D>(deserializer: D) -> Result<log::LevelFilter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(log::LevelFilter::from_str(&s).unwrap_or_else(|_| default_log_level()))
}

const fn default_log_level() -> log::LevelFilter {
    log::LevelFilter::Info
}
