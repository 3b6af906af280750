use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Terminal showcase for the Vitrine software studio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Skip the backend and use bundled sample content
    #[arg(long)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the showcase TUI
    Run {
        /// Skip the backend and use bundled sample content
        #[arg(long)]
        offline: bool,
    },
    /// Fetch content from the backend and print it
    Fetch {
        /// Print the raw JSON payload instead of a report
        #[arg(long)]
        json: bool,

        #[command(subcommand)]
        section: FetchSection,
    },
    /// Print the resolved configuration
    Config,
}

#[derive(Subcommand)]
pub enum FetchSection {
    /// Team members
    Team,
    /// Portfolio projects
    Projects,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Handle commands
    match cli.command {
        Some(Commands::Run { offline }) => commands::run::run(config, offline).await,
        None => commands::run::run(config, cli.offline).await,
        Some(Commands::Fetch { json, section }) => {
            commands::fetch::run(&config, section, json).await
        }
        Some(Commands::Config) => commands::config::run(&config),
    }
}
