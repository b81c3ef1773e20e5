use crate::prayer::city::{DEFAULT_CITY, find_city};
use crate::prayer::client::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;

pub const APP_DIR: &str = ".iftar-countdown";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_city")]
    pub default_city: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub countdown: CountdownConfig,
    #[serde(default)]
    pub state: StateConfig,
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            api: ApiConfig::default(),
            countdown: CountdownConfig::default(),
            state: StateConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub key: Option<String>, // Falls back to the keyring when unset
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_retries() -> u32 {
    2
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            base_url: default_base_url(),
            max_retries: default_max_retries(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CountdownConfig {
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

fn default_tick_millis() -> u64 {
    1000
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StateConfig {
    /// Optional override for state directory (for testing)
    pub state_dir_override: Option<PathBuf>,
}

impl Config {
    /// Resolve the collectapi key: config/env first, then the keyring.
    pub fn get_api_key(&self) -> Result<String> {
        if let Some(key) = self.api.key.as_deref().filter(|k| !k.trim().is_empty()) {
            return Ok(key.to_string());
        }

        if let Ok(key) = crate::keyring::get_api_key() {
            return Ok(key);
        }

        anyhow::bail!("API key not found. Run 'iftar api-key set <KEY>' or set IFTAR__API__KEY")
    }

    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url must not be empty");
        }
        if self.countdown.tick_millis == 0 {
            anyhow::bail!("countdown.tick_millis must be greater than 0");
        }
        if find_city(&self.default_city).is_none() {
            anyhow::bail!("Unknown default_city '{}'", self.default_city);
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let home = home::home_dir().context("Could not find home directory")?;
    Ok(home.join(APP_DIR).join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

/// Load `~/.iftar-countdown/config.toml` if present, overlaid with
/// `IFTAR__SECTION__KEY` environment variables.
pub fn load() -> Result<Config> {
    let config_path = config_path()?;

    let loader = ConfigBuilder::builder()
        .add_source(
            File::from(config_path.as_path())
                .format(FileFormat::Toml)
                .required(false),
        )
        .add_source(Environment::with_prefix("IFTAR").separator("__"))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
