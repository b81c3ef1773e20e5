use crate::OutputFormat;
use crate::commands::{fetch_and_remember, resolve_city};
use crate::config::Config;
use crate::countdown::Anchors;
use crate::locale::format_long_date;
use crate::prayer::models::PrayerTime;
use crate::render::times_table;
use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

#[derive(Serialize)]
struct TimesOutput<'a> {
    city: &'a str,
    date: String,
    anchors: Option<Anchors>,
    times: &'a [PrayerTime],
}

/// Show today's prayer times for a city
pub fn times(config: &Config, city: Option<String>, format: OutputFormat) -> Result<()> {
    let city = resolve_city(config, city.as_deref())?;
    let daily = fetch_and_remember(config, city)?;
    let date = format_long_date(Local::now().date_naive());

    match format {
        OutputFormat::Json => {
            let output = TimesOutput {
                city,
                date,
                anchors: daily.anchors(),
                times: daily.entries(),
            };
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialize times")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{} - {}", city, date);
            println!("{}", "-".repeat(24));
            for row in times_table(daily.entries()) {
                println!("{}", row);
            }
            if daily.anchors().is_none() {
                println!("\nİmsak/Akşam vakitleri bulunamadı; geri sayım gösterilemez.");
            }
        }
    }

    Ok(())
}
