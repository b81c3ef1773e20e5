use crate::OutputFormat;
use crate::app::{AppState, FetchRequest, Snapshot};
use crate::commands::{build_client, fetch_and_remember, resolve_city, try_remember_city};
use crate::config::Config;
use crate::error::FETCH_FAILED_MESSAGE;
use crate::prayer::city::find_city;
use crate::prayer::client::PrayerClient;
use crate::prayer::models::DailyTimes;
use crate::render::{render_json, render_text};
use anyhow::{Context, Result};
use chrono::Local;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};
use tokio::time::MissedTickBehavior;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Messages feeding the watch loop besides the clock tick.
#[derive(Debug)]
enum DriverEvent {
    Fetched {
        request: FetchRequest,
        result: Result<DailyTimes, String>,
    },
    CityInput(String),
}

/// Print the countdown once, or keep redrawing it with `watch`.
pub fn countdown(
    config: &Config,
    city: Option<String>,
    watch: bool,
    format: OutputFormat,
) -> Result<()> {
    let city = resolve_city(config, city.as_deref())?;

    if watch {
        // The blocking HTTP client must be built and dropped outside the runtime
        let client = Arc::new(build_client(config)?);
        let runtime = tokio::runtime::Runtime::new()?;
        let result = runtime.block_on(watch_loop(config, &client, city, format));
        // Don't wait on the stdin reader
        runtime.shutdown_background();
        return result;
    }

    let times = fetch_and_remember(config, city)?;
    let mut app = AppState::new(city);
    let now = Local::now();
    let request = app.current_request(now.date_naive());
    app.times_loaded(&request, Ok(times));
    let (snapshot, _) = app.tick(&now);

    print_snapshot(&snapshot, format)
}

fn print_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", render_json(snapshot)?),
        OutputFormat::Text => {
            for line in render_text(snapshot) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn draw(snapshot: &Snapshot, format: OutputFormat) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Json => {
            let line = serde_json::to_string(snapshot).context("Failed to serialize snapshot")?;
            writeln!(stdout, "{}", line)?;
        }
        OutputFormat::Text => {
            write!(stdout, "{}", CLEAR_SCREEN)?;
            for line in render_text(snapshot) {
                writeln!(stdout, "{}", line)?;
            }
            writeln!(stdout)?;
            writeln!(stdout, "Şehir değiştirmek için adını yazıp Enter'a basın, çıkmak için Ctrl-C.")?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn spawn_fetch(
    client: &Arc<PrayerClient>,
    max_retries: u32,
    request: FetchRequest,
    tx: UnboundedSender<DriverEvent>,
) {
    let client = Arc::clone(client);
    tokio::task::spawn_blocking(move || {
        let result = client
            .fetch_with_retry(&request.city, max_retries)
            .map_err(|e| {
                tracing::error!(city = %request.city, "Error fetching prayer times: {}", e);
                FETCH_FAILED_MESSAGE.to_string()
            });
        // The receiver is gone once the loop has exited
        let _ = tx.send(DriverEvent::Fetched { request, result });
    });
}

fn spawn_stdin_reader(tx: UnboundedSender<DriverEvent>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim().is_empty() {
                continue;
            }
            if tx.send(DriverEvent::CityInput(line)).is_err() {
                break;
            }
        }
    });
}

async fn watch_loop(
    config: &Config,
    client: &Arc<PrayerClient>,
    city: &str,
    format: OutputFormat,
) -> Result<()> {
    let max_retries = config.api.max_retries;
    let (tx, mut rx) = unbounded_channel();
    let mut app = AppState::new(city);

    spawn_fetch(
        client,
        max_retries,
        app.current_request(Local::now().date_naive()),
        tx.clone(),
    );
    spawn_stdin_reader(tx.clone());

    let mut ticker = tokio::time::interval(Duration::from_millis(config.countdown.tick_millis));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // Read the clock once per frame
                let now = Local::now();
                let (snapshot, refetch) = app.tick(&now);
                if let Some(request) = refetch {
                    spawn_fetch(client, max_retries, request, tx.clone());
                }
                draw(&snapshot, format)?;
            }
            Some(event) = rx.recv() => match event {
                DriverEvent::Fetched { request, result } => {
                    let succeeded = result.is_ok();
                    let applied = app.times_loaded(&request, result);
                    if applied && succeeded {
                        try_remember_city(config, &request.city);
                    }
                }
                DriverEvent::CityInput(input) => match find_city(&input) {
                    Some(city) => {
                        tracing::info!(city, "switching city");
                        let request = app.select_city(city, Local::now().date_naive());
                        spawn_fetch(client, max_retries, request, tx.clone());
                    }
                    None => tracing::warn!("Unknown city '{}'", input.trim()),
                },
            },
            _ = &mut shutdown => {
                tracing::debug!("shutting down watch loop");
                break;
            }
        }
    }

    Ok(())
}
