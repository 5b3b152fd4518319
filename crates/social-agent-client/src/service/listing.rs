//! Lenient decoding of `/ideas/list` rows.
//!
//! Backend rows carry a bare `status` string and rarely the stage fields the
//! store requires, so a missing `scheduledFor` or `publishedAt` is filled from
//! the row's own `updated_at`/`created_at`, and missing engagement is zero.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use social_agent_core::{Engagement, Idea, IdeaStage, IdeaStatus, Platform};

use super::decode;

#[derive(Debug, Deserialize)]
pub(super) struct ListedIdea {
    id: i64,
    title: String,
    #[serde(default)]
    summary: String,
    status: Option<String>,
    #[serde(default, rename = "scheduledFor", alias = "scheduled_for")]
    scheduled_for: Option<Value>,
    #[serde(default, rename = "publishedAt", alias = "published_at")]
    published_at: Option<Value>,
    engagement: Option<Engagement>,
    created_at: Option<Value>,
    updated_at: Option<Value>,
    #[serde(default)]
    platform_adaptations: BTreeMap<String, Value>,
    hook: Option<String>,
    caption: Option<String>,
    #[serde(default)]
    hashtags: Vec<String>,
    ai_type: Option<String>,
}

impl ListedIdea {
    /// Latest timestamp the row knows about, preferring `preferred`.
    fn stamp(&self, preferred: Option<&Value>, now: DateTime<Utc>) -> DateTime<Utc> {
        [preferred, self.updated_at.as_ref(), self.created_at.as_ref()]
            .into_iter()
            .flatten()
            .find_map(decode::timestamp)
            .unwrap_or(now)
    }

    /// `None` for a status outside the idea lifecycle.
    pub(super) fn into_idea(self, now: DateTime<Utc>) -> Option<Idea> {
        let status = match self.status.as_deref() {
            None => IdeaStatus::Draft,
            Some(raw) => match raw.parse::<IdeaStatus>() {
                Ok(status) => status,
                Err(e) => {
                    tracing::warn!(id = self.id, error = %e, "skipping listed idea");
                    return None;
                }
            },
        };

        let stage = match status {
            IdeaStatus::Draft => IdeaStage::Draft,
            IdeaStatus::Approved => IdeaStage::Approved,
            IdeaStatus::Scheduled => IdeaStage::Scheduled {
                scheduled_for: self.stamp(self.scheduled_for.as_ref(), now),
            },
            IdeaStatus::Posted => IdeaStage::Posted {
                published_at: self.stamp(self.published_at.as_ref(), now),
                engagement: self.engagement.unwrap_or_default(),
            },
        };

        let platform_adaptations = self
            .platform_adaptations
            .iter()
            .filter_map(|(key, value)| Some((key.parse::<Platform>().ok()?, decode::caption(value)?)))
            .collect();

        Some(Idea {
            stage,
            platform_adaptations,
            hook: self.hook,
            caption: self.caption,
            hashtags: self.hashtags,
            ai_type: self.ai_type,
            ..Idea::draft(self.id, self.title, self.summary)
        })
    }
}
