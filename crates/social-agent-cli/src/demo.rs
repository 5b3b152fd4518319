//! Offline walkthrough of the idea lifecycle.

use serde::Serialize;
use social_agent_client::ContentService;
use social_agent_core::{GenerateRequest, Idea, Platform};

use crate::print_json;

#[derive(Debug, Serialize)]
struct DemoReport {
    walked: Idea,
    board: Vec<Idea>,
}

/// Generates ideas, walks the first one from draft to posted, then prints it
/// alongside the whole local board.
pub(crate) async fn run_demo(service: &ContentService) -> anyhow::Result<()> {
    let brand = service.brand_config().await?;
    let request = GenerateRequest::text(
        brand.persona,
        brand.brand_rules,
        vec![Platform::X, Platform::Instagram, Platform::Linkedin],
    );

    let generated = service.generate(&request).await;
    let id = generated
        .first()
        .map(|idea| idea.id)
        .ok_or_else(|| anyhow::anyhow!("generation returned no ideas"))?;

    service.approve(id).await?;
    service.schedule(id, None).await?;
    let walked = service.publish(id).await?;

    let board = service.filter_ideas(|_| true).await;
    print_json(&DemoReport { walked, board })
}
