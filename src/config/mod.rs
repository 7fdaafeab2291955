pub mod defaults;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use thiserror::Error;

use crate::api::dtos::MAX_PER_PAGE_CEILING;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Report configuration is invalid: {0}")]
    Reports(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_logging_level")]
    pub level: String,
    #[serde(default = "defaults::default_logging_json_format")]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_logging_level(),
            json_format: defaults::default_logging_json_format(),
        }
    }
}

/// Defaults applied to report queries when the client omits a parameter.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ReportsConfig {
    /// Days subtracted from today for a missing `start_date`
    #[serde(default = "defaults::default_lookback_days")]
    pub lookback_days: i64,
    #[serde(default = "defaults::default_pop_max_per_page")]
    pub pop_default_max_per_page: i64,
    #[serde(default = "defaults::default_impression_max_per_page")]
    pub impression_default_max_per_page: i64,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            lookback_days: defaults::default_lookback_days(),
            pop_default_max_per_page: defaults::default_pop_max_per_page(),
            impression_default_max_per_page: defaults::default_impression_max_per_page(),
        }
    }
}

impl ReportsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookback_days < 0 {
            return Err(ConfigError::Reports(
                "lookback_days must not be negative".to_string(),
            ));
        }

        // Defaults are held to the same ceiling as client-supplied values.
        for (name, value) in [
            ("pop_default_max_per_page", self.pop_default_max_per_page),
            (
                "impression_default_max_per_page",
                self.impression_default_max_per_page,
            ),
        ] {
            if value > MAX_PER_PAGE_CEILING {
                return Err(ConfigError::Reports(format!(
                    "{name} must be at most {MAX_PER_PAGE_CEILING}"
                )));
            }
        }

        Ok(())
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
            .map_err(Box::new)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reports.validate()
    }
}
