//! Configuration management

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::constants::DEFAULT_MAX_DEPTH;
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub navigation: NavigationSettings,
    #[serde(default)]
    pub persistence: PersistenceSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            env: "development".to_string(),
            name: "nav-editor".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    /// Deepest level an item may sit at; top-level items are level 1.
    pub max_depth: u32,
    /// Install the default menu when the repository comes back empty.
    pub seed_defaults: bool,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            seed_defaults: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PersistenceSettings {
    /// Artificial delay applied to every repository write.
    pub simulated_latency_ms: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Loads defaults, then `config/default`, `config/{APP_ENV}`, then
    /// `NAV__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder()?
            .set_override("app.env", env.clone())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("NAV")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "nav-editor")?
            .set_default("navigation.max_depth", i64::from(DEFAULT_MAX_DEPTH))?
            .set_default("navigation.seed_defaults", true)?
            .set_default("persistence.simulated_latency_ms", 0)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")
    }

    /// Builds a config from an inline TOML document layered over the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
