use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use iftar_countdown::OutputFormat;
use iftar_countdown::commands;
use iftar_countdown::config;
use iftar_countdown::logging;

#[derive(Parser)]
#[command(name = "iftar")]
#[command(about = "İftar and Sahur countdown for Turkish cities")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show time left until İftar or Sahur
    Countdown {
        #[arg(long, help = "City (defaults to the last one used)")]
        city: Option<String>,
        #[arg(long, help = "Keep redrawing every second")]
        watch: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show today's prayer times
    Times {
        #[arg(long, help = "City (defaults to the last one used)")]
        city: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List supported cities
    Cities,
    /// Show or set the remembered city
    City {
        #[arg(help = "City to remember")]
        name: Option<String>,
    },
    /// Inspect configuration
    Config(ConfigArgs),
    /// Manage the prayer-times API key
    ApiKey(ApiKeyArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
    /// Print the config file location
    Path,
}

#[derive(Args)]
struct ApiKeyArgs {
    #[command(subcommand)]
    action: ApiKeyAction,
}

#[derive(Subcommand)]
enum ApiKeyAction {
    /// Store the key in the system keyring
    Set { key: String },
    /// Show whether a key is configured
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let config = config::load().unwrap_or_else(|e| {
        tracing::warn!("Could not load config ({:#}). Using defaults.", e);
        config::Config::default()
    });

    match cli.command {
        Commands::Countdown {
            city,
            watch,
            format,
        } => commands::countdown::countdown(&config, city, watch, format)?,
        Commands::Times { city, format } => commands::times::times(&config, city, format)?,
        Commands::Cities => commands::city::list()?,
        Commands::City { name } => commands::city::city(&config, name)?,
        Commands::Config(args) => match args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(&key, &config)?,
            ConfigAction::Path => commands::config::path()?,
        },
        Commands::ApiKey(args) => match args.action {
            ApiKeyAction::Set { key } => commands::api_key::set(&key)?,
            ApiKeyAction::Status => commands::api_key::status(&config)?,
        },
    }

    Ok(())
}
