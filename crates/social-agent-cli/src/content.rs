//! Handlers for brand, trends and the pass-through job commands.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Subcommand;
use social_agent_client::ContentService;
use social_agent_core::{load_brand_config, BrandConfig, Platform};

use crate::print_json;

/// Sub-commands available under `brand`.
#[derive(Debug, Subcommand)]
pub enum BrandCommands {
    /// Print the current brand configuration
    Show,
    /// Replace the brand configuration
    Set {
        /// YAML file holding the full configuration
        #[arg(long, conflicts_with_all = ["persona", "rules", "hashtags"])]
        file: Option<PathBuf>,
        /// Voice the content should be written in
        #[arg(long, required_unless_present = "file")]
        persona: Option<String>,
        /// Rules every idea must follow
        #[arg(long, required_unless_present = "file")]
        rules: Option<String>,
        /// Space-separated hashtags appended by default (e.g. "#AI #Growth")
        #[arg(long)]
        hashtags: Option<String>,
    },
}

/// Sub-commands available under `trends`.
#[derive(Debug, Subcommand)]
pub enum TrendsCommands {
    /// Ask the agent for fresh trends
    Refresh {
        /// Only print trends from this platform
        #[arg(long)]
        platform: Option<Platform>,
    },
    /// List trends stored by the core API
    List,
}

/// Sub-commands available under `analytics`.
#[derive(Debug, Subcommand)]
pub enum AnalyticsCommands {
    /// Pull fresh engagement numbers for posted content
    Refresh,
}

/// Sub-commands available under `publish`.
#[derive(Debug, Subcommand)]
pub enum PublishCommands {
    /// Trigger the publisher for due jobs
    Run,
}

/// Sub-commands available under `schedule`.
#[derive(Debug, Subcommand)]
pub enum ScheduleCommands {
    /// Create a publishing schedule for an idea
    Create {
        #[arg(long)]
        idea_id: i64,
        #[arg(long)]
        platform: Platform,
        /// RFC 3339 timestamp, e.g. 2025-01-22T10:00:00Z
        #[arg(long)]
        at: DateTime<Utc>,
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
}

pub(crate) async fn run_brand(service: &ContentService, command: BrandCommands) -> anyhow::Result<()> {
    match command {
        BrandCommands::Show => print_json(&service.brand_config().await?),
        BrandCommands::Set {
            file,
            persona,
            rules,
            hashtags,
        } => {
            let brand = match file {
                Some(path) => load_brand_config(&path)?,
                None => BrandConfig {
                    persona: persona.unwrap_or_default(),
                    brand_rules: rules.unwrap_or_default(),
                    default_hashtags: hashtags,
                },
            };
            print_json(&service.update_brand_config(brand).await?)
        }
    }
}

pub(crate) async fn run_trends(service: &ContentService, command: TrendsCommands) -> anyhow::Result<()> {
    match command {
        TrendsCommands::Refresh { platform } => {
            let trends = service.refresh_trends().await;
            match platform {
                Some(platform) => print_json(&service.trends_for(platform).await),
                None => print_json(&trends),
            }
        }
        TrendsCommands::List => print_json(&service.list_trends().await),
    }
}

pub(crate) async fn run_analytics(
    service: &ContentService,
    command: AnalyticsCommands,
) -> anyhow::Result<()> {
    match command {
        AnalyticsCommands::Refresh => print_json(&service.refresh_analytics().await),
    }
}

pub(crate) async fn run_publish(service: &ContentService, command: PublishCommands) -> anyhow::Result<()> {
    match command {
        PublishCommands::Run => print_json(&service.run_publisher().await),
    }
}

pub(crate) async fn run_schedule(
    service: &ContentService,
    command: ScheduleCommands,
) -> anyhow::Result<()> {
    match command {
        ScheduleCommands::Create {
            idea_id,
            platform,
            at,
            timezone,
        } => {
            let body = serde_json::json!({
                "idea_id": idea_id,
                "platform": platform,
                "scheduled_for": at,
                "timezone": timezone,
            });
            print_json(&service.create_schedule(&body).await)
        }
    }
}
