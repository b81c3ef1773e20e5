use super::Anchors;
use super::window::FastingWindow;
use chrono::{DateTime, TimeZone};

/// Elapsed share of today's fasting window, in percent.
///
/// `None` outside `[sahur_today, iftar_today]`; the bar is hidden rather than
/// shown empty. The closing edge reports 100 even though [`super::resolve`]
/// has already moved on to counting down to Sahur.
pub fn progress<Tz: TimeZone>(now: &DateTime<Tz>, anchors: &Anchors) -> Option<f64> {
    let window = FastingWindow::for_day(now, anchors)?;
    let start = window.sahur_today;
    let end = window.iftar_today;

    if *now < start || *now > end {
        return None;
    }

    let total = end.clone().signed_duration_since(&start).num_milliseconds() as f64;
    if total <= 0.0 {
        return None;
    }
    let elapsed = now.clone().signed_duration_since(&start).num_milliseconds() as f64;

    Some((elapsed / total * 100.0).clamp(0.0, 100.0))
}

/// One decimal place, as shown under the bar.
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}", percentage)
}
