//! Configuration management commands

use anyhow::{Context, Result};
use clap::Subcommand;
use physrl_client::{ClientConfig, API_URL_ENV};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show().await,
        ConfigCommands::Init { force } => init(force).await,
    }
}

async fn show() -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    match ClientConfig::find_config_file() {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("No configuration file found. Using defaults."),
    }

    let config = ClientConfig::load()?;
    if std::env::var(API_URL_ENV).is_ok() {
        println!("{API_URL_ENV} is set");
    }

    println!();
    print!("{}", config.to_toml()?);

    let target = config.api.resolved_base_url();
    if config.api.is_same_origin() {
        println!("\nRequests go to: {target} (same origin)");
    } else {
        println!("\nRequests go to: {target}");
    }

    Ok(())
}

async fn init(force: bool) -> Result<()> {
    let config_path = "physrl.toml";

    if std::path::Path::new(config_path).exists() && !force {
        println!("Configuration file already exists: {config_path}");
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = ClientConfig::default().to_toml()?;
    std::fs::write(config_path, config)
        .with_context(|| format!("Failed to write {config_path}"))?;
    println!("Configuration file created: {config_path}");

    Ok(())
}
