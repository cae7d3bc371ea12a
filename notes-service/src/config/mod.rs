use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

/// Gemini REST endpoint used unless `GEMINI_API_BASE` points elsewhere.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for note generation unless `GEMINI_MODEL` is set.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, Deserialize)]
pub struct NotesConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub generation: GenerationSettings,
    pub assets: AssetConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
    pub api_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model for note generation (e.g., gemini-1.5-flash)
    pub text_model: String,
}

/// Optional sampling overrides. Unset values are left to the provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationSettings {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// HTML page served at `/`.
    pub index_path: PathBuf,
}

impl NotesConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(NotesConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: Secret::new(get_env("GEMINI_API_KEY", None)?),
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE))?,
            },
            models: ModelConfig {
                text_model: get_env("GEMINI_MODEL", Some(DEFAULT_TEXT_MODEL))?,
            },
            generation: GenerationSettings {
                temperature: get_optional_env("GEMINI_TEMPERATURE")?,
                top_p: get_optional_env("GEMINI_TOP_P")?,
                max_output_tokens: get_optional_env("GEMINI_MAX_OUTPUT_TOKENS")?,
            },
            assets: AssetConfig {
                index_path: env::var("NOTES_INDEX_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_index_path()),
            },
        })
    }
}

/// `static/index.html`, resolved whether the process runs from the workspace
/// root or from the service directory.
pub fn default_index_path() -> PathBuf {
    let base_path = env::current_dir().unwrap_or_default();

    if base_path.ends_with("notes-service") {
        base_path.join("static").join("index.html")
    } else {
        base_path
            .join("notes-service")
            .join("static")
            .join("index.html")
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}

fn get_optional_env<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => val.trim().parse().map(Some).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} has an invalid value: {}", key, e))
        }),
        _ => Ok(None),
    }
}
