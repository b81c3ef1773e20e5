use crate::config::{Config, config_path};
use anyhow::{Context, Result};

const MASK: &str = "********";

/// Copy of the config that is safe to print.
fn redacted(config: &Config) -> Config {
    let mut shown = config.clone();
    if shown.api.key.is_some() {
        shown.api.key = Some(MASK.to_string());
    }
    shown
}

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(&redacted(config)).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

/// Resolve a dotted key such as `api.base_url` to its printed form.
fn lookup(key: &str, config: &Config) -> Result<String> {
    let value = serde_json::to_value(redacted(config)).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }

    Ok(match current {
        serde_json::Value::String(s) => s.clone(),
        v => v.to_string(),
    })
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    println!("{}", lookup(key, config)?);
    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}
