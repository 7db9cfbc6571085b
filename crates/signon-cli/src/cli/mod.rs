//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use signon_core::config::{self, Config};
use signon_core::form::FormAction;

#[derive(Parser)]
#[command(name = "signon")]
#[command(version = "0.1.0")]
#[command(about = "Terminal login client for form-based web apps")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the server base URL from config
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Load configuration from a specific file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not open the redirect target after a successful login
    #[arg(long = "no-open")]
    no_open: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in with username and password (default)
    Login,

    /// Create a new account
    Register,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
}

#[tokio::main]
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if cli.no_open {
        config.open_redirect = false;
    }

    match cli.command.unwrap_or(Commands::Login) {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                println!("{}", config::paths::config_path().display());
                Ok(())
            }
        },
        Commands::Login => {
            run_form_session(&config, FormAction::login(&config.login_path)).await
        }
        Commands::Register => {
            run_form_session(&config, FormAction::register(&config.register_path)).await
        }
    }
}

async fn run_form_session(config: &Config, action: FormAction) -> Result<()> {
    let _guard = signon_core::logging::init(&config::paths::log_dir())
        .context("Failed to initialize logging")?;
    tracing::info!(base_url = %config.base_url, path = %action.path, "starting form session");

    match signon_tui::run_form(config, action).await? {
        Some(location) => {
            tracing::info!(%location, "form session succeeded");
            println!("{location}");
        }
        None => eprintln!("Goodbye!"),
    }
    Ok(())
}
