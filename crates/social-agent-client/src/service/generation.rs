//! Adapting `/generate_ideas` responses into store-ready ideas.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use social_agent_core::{Idea, Platform};

use super::decode;

const CONTEXT: &str = "/generate_ideas";

#[derive(Debug, Default)]
pub(super) struct GeneratedBatch {
    ideas: Vec<GeneratedIdea>,
    /// Per-platform captions keyed by platform, linked back by `idea_id`.
    repurposed_content: BTreeMap<String, Vec<RepurposedCaption>>,
}

#[derive(Debug, Deserialize)]
struct GeneratedIdea {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    title: String,
    #[serde(default)]
    summary: String,
    hook: Option<String>,
    caption: Option<String>,
    #[serde(default)]
    hashtags: Vec<String>,
    ai_type: Option<String>,
    /// Values are either a caption string or an object carrying `caption`.
    #[serde(default)]
    platform_adaptations: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct RepurposedCaption {
    #[serde(default)]
    idea_id: Value,
    caption: Option<String>,
    content: Option<Value>,
}

impl RepurposedCaption {
    fn text(&self) -> Option<String> {
        self.caption
            .clone()
            .or_else(|| self.content.as_ref().and_then(decode::caption))
    }
}

impl GeneratedBatch {
    /// `None` when the payload carries no usable ideas.
    ///
    /// Malformed ideas and repurposed entries are skipped one by one; the
    /// rest of the batch is kept.
    pub(super) fn parse(payload: &Value) -> Option<Self> {
        let ideas: Vec<GeneratedIdea> = decode::items(payload, "ideas", CONTEXT);
        if ideas.is_empty() {
            return None;
        }

        let repurposed_content = payload
            .get("repurposed_content")
            .and_then(Value::as_object)
            .map(|platforms| {
                platforms
                    .iter()
                    .map(|(platform, entries)| {
                        (platform.clone(), decode::items(entries, platform, CONTEXT))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            ideas,
            repurposed_content,
        })
    }

    /// Converts the batch into drafts. Ids are left for the store to assign.
    pub(super) fn into_ideas(self) -> Vec<Idea> {
        let repurposed = self.repurposed_content;
        self.ideas
            .into_iter()
            .map(|generated| {
                let mut adaptations: BTreeMap<Platform, String> = generated
                    .platform_adaptations
                    .iter()
                    .filter_map(|(key, value)| {
                        let platform = key.parse::<Platform>().ok()?;
                        Some((platform, decode::caption(value)?))
                    })
                    .collect();

                if !generated.id.is_null() {
                    for (key, captions) in &repurposed {
                        let Ok(platform) = key.parse::<Platform>() else {
                            continue;
                        };
                        if let Some(text) = captions
                            .iter()
                            .filter(|c| c.idea_id == generated.id)
                            .find_map(RepurposedCaption::text)
                        {
                            adaptations.insert(platform, text);
                        }
                    }
                }

                Idea {
                    platform_adaptations: adaptations,
                    hook: generated.hook,
                    caption: generated.caption,
                    hashtags: generated.hashtags,
                    ai_type: generated.ai_type,
                    ..Idea::draft(0, generated.title, generated.summary)
                }
            })
            .collect()
    }
}
