pub mod app;
pub mod commands;
pub mod config;
pub mod countdown;
pub mod error;
pub mod keyring;
pub mod locale;
pub mod logging;
pub mod platform;
pub mod prayer;
pub mod render;
pub mod state;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
