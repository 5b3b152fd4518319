mod accounts;
mod content;
mod demo;
mod ideas;

use clap::{Parser, Subcommand};
use serde::Serialize;
use social_agent_client::ContentService;
use tracing_subscriber::EnvFilter;

use crate::accounts::AccountsCommands;
use crate::content::{AnalyticsCommands, BrandCommands, PublishCommands, ScheduleCommands, TrendsCommands};
use crate::ideas::IdeasCommands;

#[derive(Debug, Parser)]
#[command(name = "social-agent")]
#[command(about = "Social media content automation from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check the core API
    Health,
    /// Read or replace the brand configuration
    Brand {
        #[command(subcommand)]
        command: BrandCommands,
    },
    /// Refresh or list trending topics
    Trends {
        #[command(subcommand)]
        command: TrendsCommands,
    },
    /// Generate ideas and move them through their lifecycle
    Ideas {
        #[command(subcommand)]
        command: IdeasCommands,
    },
    /// Manage connected social accounts
    Accounts {
        #[command(subcommand)]
        command: AccountsCommands,
    },
    /// Analytics jobs
    Analytics {
        #[command(subcommand)]
        command: AnalyticsCommands,
    },
    /// Publisher jobs
    Publish {
        #[command(subcommand)]
        command: PublishCommands,
    },
    /// Publishing schedules
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Walk one generated idea from draft to posted and print the board
    Demo,
}

/// Prints `value` as pretty JSON on stdout. Logs go to stderr.
pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = social_agent_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("social-agent ready; run with --help for commands");
        return Ok(());
    };

    let service = ContentService::from_config(&config)?;

    match command {
        Commands::Health => print_json(&service.health_check().await)?,
        Commands::Brand { command } => content::run_brand(&service, command).await?,
        Commands::Trends { command } => content::run_trends(&service, command).await?,
        Commands::Ideas { command } => ideas::run_ideas(&service, command).await?,
        Commands::Accounts { command } => accounts::run_accounts(&service, command).await?,
        Commands::Analytics { command } => content::run_analytics(&service, command).await?,
        Commands::Publish { command } => content::run_publish(&service, command).await?,
        Commands::Schedule { command } => content::run_schedule(&service, command).await?,
        Commands::Demo => demo::run_demo(&service).await?,
    }

    Ok(())
}
