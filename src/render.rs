use crate::app::{Snapshot, Status};
use crate::countdown::format_percentage;
use crate::prayer::models::PrayerTime;
use anyhow::{Context, Result};

const BAR_WIDTH: usize = 30;
const PLACEHOLDER: &str = "--:--:--";

pub fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] % {}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        format_percentage(percentage)
    )
}

/// The day's schedule, one row per event, anchors marked with `*`.
pub fn times_table(times: &[PrayerTime]) -> Vec<String> {
    times
        .iter()
        .map(|t| {
            let marker = if t.is_anchor() { '*' } else { ' ' };
            format!("{} {:<10} {}", marker, t.event_name, t.clock_time)
        })
        .collect()
}

/// Text frame for one snapshot.
pub fn render_text(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = vec![
        format!("📍 {}", snapshot.city),
        format!("📅 {}", snapshot.date),
        String::new(),
    ];

    match &snapshot.status {
        Status::Loading => {
            lines.push("Yükleniyor...".to_string());
            return lines;
        }
        Status::Failed(message) => {
            lines.push(format!("✗ {}", message));
            return lines;
        }
        Status::Ready => {}
    }

    lines.push(format!(
        "    {}",
        snapshot.countdown.as_deref().unwrap_or(PLACEHOLDER)
    ));
    lines.push("  saat dakika saniye".to_string());
    if let Some(label) = snapshot.label {
        lines.push(label.to_string());
    }
    if let Some(percentage) = snapshot.progress {
        lines.push(progress_bar(percentage));
    }

    lines.push(String::new());
    lines.extend(times_table(&snapshot.times));
    lines
}

pub fn render_json(snapshot: &Snapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")
}
