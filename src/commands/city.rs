use crate::commands::{remember_city, resolve_city};
use crate::config::Config;
use crate::prayer::city::{CITIES, find_city};
use anyhow::{Context, Result};

/// List the cities the API knows about
pub fn list() -> Result<()> {
    for city in CITIES {
        println!("{}", city);
    }
    Ok(())
}

/// Show the city the countdown would use, or remember a new one.
pub fn city(config: &Config, name: Option<String>) -> Result<()> {
    match name {
        Some(input) => {
            let city = find_city(&input).with_context(|| {
                format!("Unknown city '{}'. Run 'iftar cities' to list them.", input)
            })?;
            remember_city(config, city)?;
            println!("✓ City set to {}", city);
        }
        None => {
            println!("{}", resolve_city(config, None)?);
        }
    }
    Ok(())
}
