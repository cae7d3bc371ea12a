use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Port used when neither `PORT` nor `APP__PORT` is set.
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector endpoint. Spans are only exported when this is set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load the shared settings from an optional `configuration` file, `APP__*`
    /// variables, and the conventional bare `PORT` / `OTLP_ENDPOINT` variables,
    /// in increasing order of precedence.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", env_override("PORT"))?
            .set_override_option("otlp_endpoint", env_override("OTLP_ENDPOINT"))?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Value of `key`, with empty or blank values treated as unset.
fn env_override(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}
