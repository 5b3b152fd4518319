//! Idea generation and lifecycle command handlers.

use chrono::{DateTime, Utc};
use clap::Subcommand;
use social_agent_client::ContentService;
use social_agent_core::{GenerateRequest, IdeaStatus, Platform};

use crate::print_json;

/// Sub-commands available under `ideas`.
#[derive(Debug, Subcommand)]
pub enum IdeasCommands {
    /// Generate new draft ideas through the agent
    Generate {
        /// Persona override; defaults to the brand configuration
        #[arg(long)]
        persona: Option<String>,
        /// Brand rules override; defaults to the brand configuration
        #[arg(long)]
        rules: Option<String>,
        /// Target platforms (repeatable)
        #[arg(long = "platform", default_values = ["x", "instagram", "linkedin"])]
        platforms: Vec<Platform>,
    },
    /// List local and stored ideas
    List {
        /// Only show local ideas in this status
        #[arg(long)]
        status: Option<IdeaStatus>,
    },
    /// Approve a draft idea
    Approve { id: i64 },
    /// Schedule an approved idea
    Schedule {
        id: i64,
        /// Future RFC 3339 timestamp; defaults to 24 hours from now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Publish a scheduled idea
    Publish { id: i64 },
}

pub(crate) async fn run_ideas(service: &ContentService, command: IdeasCommands) -> anyhow::Result<()> {
    match command {
        IdeasCommands::Generate {
            persona,
            rules,
            platforms,
        } => {
            let (persona, rules) = match (persona, rules) {
                (Some(persona), Some(rules)) => (persona, rules),
                (persona, rules) => {
                    let brand = service.brand_config().await?;
                    (
                        persona.unwrap_or(brand.persona),
                        rules.unwrap_or(brand.brand_rules),
                    )
                }
            };
            let request = GenerateRequest::text(persona, rules, platforms);
            print_json(&service.generate(&request).await)
        }
        IdeasCommands::List { status: Some(status) } => {
            print_json(&service.ideas_by_status(status).await)
        }
        IdeasCommands::List { status: None } => print_json(&service.list_ideas().await),
        IdeasCommands::Approve { id } => print_json(&service.approve(id).await?),
        IdeasCommands::Schedule { id, at } => print_json(&service.schedule(id, at).await?),
        IdeasCommands::Publish { id } => print_json(&service.publish(id).await?),
    }
}
