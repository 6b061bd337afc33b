//! PhysRL CLI - terminal front-end for the state discretizer
//!
//! Reads a cart-pole state from the command line, submits it to the
//! discretization backend and renders the binned result.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unused_async)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use physrl_client::{ClientConfig, DiscretizeClient};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod form;
mod render;

use commands::{config, discretize, health};

/// Load environment variables from the PhysRL env file if not already set
fn load_env_file() {
    // Check standard locations for env file
    let env_paths = [
        "/usr/local/etc/physrl/physrl.env".to_string(),
        dirs::config_dir()
            .map(|p| p.join("physrl/physrl.env").to_string_lossy().to_string())
            .unwrap_or_default(),
        dirs::home_dir()
            .map(|p| p.join(".config/physrl/physrl.env").to_string_lossy().to_string())
            .unwrap_or_default(),
    ];

    for path in &env_paths {
        if path.is_empty() {
            continue;
        }
        if Path::new(path).exists() {
            if let Ok(contents) = std::fs::read_to_string(path) {
                for (key, value) in parse_env_file(&contents) {
                    // Only set if not already defined
                    if std::env::var(&key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            break;
        }
    }
}

/// Parse env file contents into `(key, value)` pairs
fn parse_env_file(contents: &str) -> Vec<(String, String)> {
    let mut vars = Vec::new();

    for line in contents.lines() {
        let line = line.trim();

        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Handle export VAR=value or VAR=value
        let line = line.strip_prefix("export ").unwrap_or(line);

        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            vars.push((key.trim().to_string(), value.to_string()));
        }
    }

    vars
}

#[derive(Parser)]
#[command(name = "physrl")]
#[command(author, version, about = "PhysRL - cart-pole state discretizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL (overrides PHYSRL_API_URL and config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Discretize a cart-pole state
    Discretize(discretize::DiscretizeArgs),

    /// Check that the backend is running
    Health,

    /// List state dimensions and their range hints
    Dimensions,

    /// Configuration management
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from physrl.env file (before parsing args)
    load_env_file();

    let cli = Cli::parse();

    // Initialize logging based on verbosity; stdout is reserved for results
    let log_level = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("physrl={log_level},physrl_client={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Discretize(args) => {
            let client = build_client(cli.api_url)?;
            discretize::run(&client, &args).await
        }
        Commands::Health => {
            let client = build_client(cli.api_url)?;
            health::run(&client).await
        }
        Commands::Dimensions => {
            print!("{}", render::render_dimensions());
            Ok(())
        }
        Commands::Config(cmd) => config::run(cmd).await,
    }
}

/// Build the API client from configuration, honouring `--api-url`
fn build_client(api_url: Option<String>) -> Result<DiscretizeClient> {
    let mut config = ClientConfig::load()?;
    if let Some(api_url) = api_url {
        config.api.base_url = api_url;
    }

    tracing::debug!("Backend: {}", config.api.resolved_base_url());
    Ok(DiscretizeClient::from_config(&config))
}
