use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::{DEFAULT_MAX_RESULTS, HIGH_QUALITY_LABEL};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub recommend: RecommendSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self { path: default_model_path() }
    }
}

fn default_model_path() -> PathBuf { PathBuf::from("coffee_rf_classifier_model.json") }

/// Catalog source; the built-in catalog is used when `path` is unset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendSettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_target_label")]
    pub target_label: String,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            target_label: default_target_label(),
        }
    }
}

fn default_max_results() -> usize { DEFAULT_MAX_RESULTS }
fn default_target_label() -> String { HIGH_QUALITY_LABEL.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Output layer selected by `logging.format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Full,
}

impl LoggingSettings {
    /// `"json"` and `"pretty"` pick those layers, anything else the plain one
    pub fn log_format(&self) -> LogFormat {
        match self.format.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Full,
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BREW_)
    /// 5. `MODEL_PATH`, if set
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BREW__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("BREW")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_shorthand_overrides(settings, std::env::var("MODEL_PATH").ok())?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    ///
    /// Environment variables and `MODEL_PATH` still override the file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("BREW")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_shorthand_overrides(settings, std::env::var("MODEL_PATH").ok())?;

        settings.try_deserialize()
    }
}

/// Apply unprefixed environment variables commonly set by deploy tooling
fn apply_shorthand_overrides(settings: Config, model_path: Option<String>) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(model_path) = model_path.filter(|p| !p.trim().is_empty()) {
        builder = builder.set_override("model.path", model_path)?;
    }

    builder.build()
}
