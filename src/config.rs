use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub analytics: AnalyticsSettings,
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
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
    pub cache_ttl_secs: Option<u64>,
    pub cache_capacity: Option<u64>,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            cache_ttl_secs: None,
            cache_capacity: None,
        }
    }
}

fn default_dataset_path() -> String { "data/ria_data_with_bonus_firms.csv".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_aum_weight")]
    pub aum: u8,
    #[serde(default = "default_state_weight")]
    pub state: u8,
    #[serde(default = "default_fee_model_weight")]
    pub fee_model: u8,
    #[serde(default = "default_hnw_weight")]
    pub hnw: u8,
    #[serde(default = "default_institutional_weight")]
    pub institutional: u8,
    #[serde(default = "default_interest_weight")]
    pub interest: u8,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            aum: default_aum_weight(),
            state: default_state_weight(),
            fee_model: default_fee_model_weight(),
            hnw: default_hnw_weight(),
            institutional: default_institutional_weight(),
            interest: default_interest_weight(),
        }
    }
}

impl WeightsConfig {
    /// Convert into scoring weights, rejecting tables that can exceed 100 points
    pub fn to_weights(&self) -> Result<ScoringWeights, ConfigError> {
        let weights = ScoringWeights {
            aum: self.aum,
            state: self.state,
            fee_model: self.fee_model,
            hnw: self.hnw,
            institutional: self.institutional,
            interest: self.interest,
        };

        let max = weights.max_attainable();
        if max > 100 {
            return Err(ConfigError::Message(format!(
                "scoring weights allow a score of {}, maximum is 100",
                max
            )));
        }

        Ok(weights)
    }
}

fn default_aum_weight() -> u8 { 25 }
fn default_state_weight() -> u8 { 15 }
fn default_fee_model_weight() -> u8 { 15 }
fn default_hnw_weight() -> u8 { 20 }
fn default_institutional_weight() -> u8 { 20 }
fn default_interest_weight() -> u8 { 25 }

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsSettings {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self { top_n: default_top_n() }
    }
}

fn default_top_n() -> usize { crate::core::analytics::DEFAULT_TOP_N }

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

impl LoggingSettings {
    /// Apply LOG_LEVEL and LOG_FORMAT on top of the configured values
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            self.format = format;
        }
        self
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
    /// 4. Environment variables (prefixed with RIA__)
    /// 5. DATASET_PATH, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RIA__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RIA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_dataset_override(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RIA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// DATASET_PATH wins over every other source for the dataset location
fn apply_dataset_override(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("DATASET_PATH") {
        Ok(path) if !path.trim().is_empty() => Config::builder()
            .add_source(settings)
            .set_override("dataset.path", path)?
            .build(),
        _ => Ok(settings),
    }
}
