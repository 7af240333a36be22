use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::DEFAULT_LIMIT;
use crate::models::{CollaborativeNormalization, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_max_rating")]
    pub max_rating: f64,
    #[serde(default)]
    pub collaborative_normalization: CollaborativeNormalization,
    #[serde(default)]
    pub strict_absent_match: bool,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            max_rating: default_max_rating(),
            collaborative_normalization: CollaborativeNormalization::default(),
            strict_absent_match: false,
        }
    }
}

impl ScoringSettings {
    pub fn to_weights(&self) -> ScoringWeights {
        ScoringWeights {
            location: self.weights.location,
            gender: self.weights.gender,
            cultural_background: self.weights.cultural_background,
            content: self.weights.content,
            collaborative: self.weights.collaborative,
            max_rating: self.max_rating,
            normalization: self.collaborative_normalization,
            strict_absent: self.strict_absent_match,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_points")]
    pub location: f64,
    #[serde(default = "default_gender_points")]
    pub gender: f64,
    #[serde(default = "default_cultural_background_points")]
    pub cultural_background: f64,
    #[serde(default = "default_content_weight")]
    pub content: f64,
    #[serde(default = "default_collaborative_weight")]
    pub collaborative: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_location_points(),
            gender: default_gender_points(),
            cultural_background: default_cultural_background_points(),
            content: default_content_weight(),
            collaborative: default_collaborative_weight(),
        }
    }
}

fn default_location_points() -> f64 { 50.0 }
fn default_gender_points() -> f64 { 30.0 }
fn default_cultural_background_points() -> f64 { 20.0 }
fn default_content_weight() -> f64 { 0.6 }
fn default_collaborative_weight() -> f64 { 0.4 }
fn default_max_rating() -> f64 { 5.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self { limit: default_limit() }
    }
}

fn default_limit() -> usize { DEFAULT_LIMIT }

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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RECOMMENDER_)
    /// 5. DATABASE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RECOMMENDER__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let settings = apply_database_url(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("RECOMMENDER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8000)?
        .set_default("database.url", "sqlite://recommender.db")?
        .set_default("database.max_connections", 5)?
        .set_default("database.min_connections", 1)?
        .set_default("database.acquire_timeout_secs", 5)
}

/// DATABASE_URL wins over every other source
fn apply_database_url(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => Config::builder()
            .add_source(settings)
            .set_override("database.url", url)?
            .build(),
        Err(_) => Ok(settings),
    }
}
