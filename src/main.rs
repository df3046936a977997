use std::sync::Arc;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::Instrument;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cfbtui::cache::CachedProvider;
use cfbtui::cfbd::Client;
use cfbtui::data_provider::CfbdDataProvider;
use cfbtui::{commands, config, tui};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "cfbtui")]
#[command(
    about = "College football teams and schedules in the terminal",
    long_about = "College football teams and schedules in the terminal\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Conference to list, e.g. SEC or B1G (overrides config)
    #[arg(long, global = true)]
    conference: Option<String>,

    /// Season year (overrides config)
    #[arg(long, global = true)]
    season: Option<i32>,

    /// Serve fixture data instead of calling the API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the teams of a conference
    Teams,
    /// Display a team's season schedule
    Schedule {
        /// School name as the API spells it, e.g. "Georgia"
        team: String,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let filter = EnvFilter::try_new(log_level.to_lowercase()).unwrap_or_else(|e| {
        eprintln!("Invalid log level {}: {}", log_level, e);
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    });
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    match config::find_config_file() {
        Some(path) => println!("Configuration File: {}", path.display()),
        None => {
            println!("Configuration File: none found (using defaults)");
            println!("Searched:");
            for path in config::candidate_paths() {
                println!("  {}", path.display());
            }
        }
    }
    let key_source = if std::env::var(config::API_KEY_ENV).is_ok_and(|key| !key.is_empty()) {
        config::API_KEY_ENV
    } else if cfg.cfbd_key.is_empty() {
        "unset"
    } else {
        "config file"
    };

    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("log_prefix: {}", cfg.log_prefix);
    println!("cfbd_key: ({})", key_source);
    println!("api_base_url: {}", cfg.api_base_url);
    println!("conference: {}", cfg.conference);
    println!("season: {}", cfg.season);
    println!("time_format: {}", cfg.time_format);
    println!("cache_ttl: {} seconds", cfg.cache_ttl);
    println!();
    println!("[keys]");
    println!("quit: {}", join_bindings(&cfg.keys.quit));
    println!("select: {}", join_bindings(&cfg.keys.select));
    println!("back: {}", join_bindings(&cfg.keys.back));
    println!("retry: {}", join_bindings(&cfg.keys.retry));
}

fn join_bindings(bindings: &[tui::keys::KeyBinding]) -> String {
    bindings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Apply `--conference` and `--season` on top of the file config
fn apply_overrides(cli: &Cli, mut config: config::Config) -> config::Config {
    if let Some(conference) = &cli.conference {
        config.conference = conference.clone();
    }
    if let Some(season) = cli.season {
        config.season = season;
    }
    config
}

#[cfg(feature = "development")]
fn use_mock(cli: &Cli) -> bool {
    cli.mock
}

#[cfg(not(feature = "development"))]
fn use_mock(_cli: &Cli) -> bool {
    false
}

fn create_provider(config: &config::Config, mock: bool) -> anyhow::Result<Arc<dyn CfbdDataProvider>> {
    #[cfg(feature = "development")]
    if mock {
        tracing::info!("Using mock data provider");
        let client = cfbtui::dev::mock_client::MockClient::new();
        return Ok(Arc::new(CachedProvider::new(client, config.cache_ttl)));
    }
    #[cfg(not(feature = "development"))]
    let _ = mock;

    let client = Client::new(config.api_base_url.clone(), config.api_key())?;
    Ok(Arc::new(CachedProvider::new(client, config.cache_ttl)))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn CfbdDataProvider,
    config: &config::Config,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Teams => commands::teams::run(client, &config.conference).await,
        Commands::Schedule { team } => {
            commands::schedule::run(client, &team, config.season, &config.time_format, Utc::now()).await
        }
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let cli = Cli::parse();
    let config = apply_overrides(&cli, config::read());

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }
    let span = tracing::info_span!("app", prefix = %config.log_prefix);

    let mock = use_mock(&cli);
    let subcommand = cli.command;

    // Handle Config command separately (doesn't need a client)
    if let Some(Commands::Config) = subcommand {
        handle_config_command(&config);
        return;
    }

    let client = match create_provider(&config, mock) {
        Ok(client) => client,
        Err(e) => {
            let error_msg = format!("Failed to create CFBD API client: {:#}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    };

    // If no subcommand, run TUI
    let Some(subcommand) = subcommand else {
        if let Err(e) = tui::run(client, config).instrument(span).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(client.as_ref(), &config, subcommand)
        .instrument(span)
        .await
    {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
