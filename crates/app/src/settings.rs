//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` and from `PROVISIO__*` environment variables
//! (`PROVISIO__SERVER__PORT=3000`).
use config::{Config, ConfigError, Environment, File};
use engine::ConsumptionParams;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
}

/// Engine-wide rations; missing values keep the built-in defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ConsumptionDefaults {
    pub grams_meat_per_adult: Option<f64>,
    pub grams_side_per_adult: Option<f64>,
    pub ml_beverage_per_adult: Option<f64>,
    pub grams_dessert_per_adult: Option<f64>,
}

impl ConsumptionDefaults {
    pub fn into_params(self) -> ConsumptionParams {
        let base = ConsumptionParams::default();
        ConsumptionParams {
            grams_meat_per_adult: self
                .grams_meat_per_adult
                .unwrap_or(base.grams_meat_per_adult),
            grams_side_per_adult: self
                .grams_side_per_adult
                .unwrap_or(base.grams_side_per_adult),
            ml_beverage_per_adult: self
                .ml_beverage_per_adult
                .unwrap_or(base.ml_beverage_per_adult),
            grams_dessert_per_adult: self
                .grams_dessert_per_adult
                .unwrap_or(base.grams_dessert_per_adult),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub server: Option<Server>,
    pub consumption: Option<ConsumptionDefaults>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("PROVISIO").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
