//! Content ideas and their lifecycle stage.
//!
//! An idea moves `draft -> approved -> scheduled -> posted`. The stage-specific
//! timestamps live inside [`IdeaStage`] so an idea can only carry
//! `scheduledFor` while scheduled, and `publishedAt`/`engagement` once posted.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platforms::Platform;
use crate::ParseEnumError;

/// Interaction counts for a trend or a published idea.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub shares: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    Draft,
    Approved,
    Scheduled,
    Posted,
}

impl IdeaStatus {
    pub const ALL: [IdeaStatus; 4] = [
        IdeaStatus::Draft,
        IdeaStatus::Approved,
        IdeaStatus::Scheduled,
        IdeaStatus::Posted,
    ];
}

impl std::fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdeaStatus::Draft => write!(f, "draft"),
            IdeaStatus::Approved => write!(f, "approved"),
            IdeaStatus::Scheduled => write!(f, "scheduled"),
            IdeaStatus::Posted => write!(f, "posted"),
        }
    }
}

impl FromStr for IdeaStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(IdeaStatus::Draft),
            "approved" => Ok(IdeaStatus::Approved),
            "scheduled" => Ok(IdeaStatus::Scheduled),
            "posted" => Ok(IdeaStatus::Posted),
            _ => Err(ParseEnumError {
                kind: "idea status",
                value: s.to_string(),
            }),
        }
    }
}

/// Lifecycle stage of an idea, serialized inline as `status` plus the
/// stage-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum IdeaStage {
    Draft,
    Approved,
    Scheduled {
        #[serde(rename = "scheduledFor")]
        scheduled_for: DateTime<Utc>,
    },
    Posted {
        #[serde(rename = "publishedAt")]
        published_at: DateTime<Utc>,
        engagement: Engagement,
    },
}

impl IdeaStage {
    #[must_use]
    pub fn status(&self) -> IdeaStatus {
        match self {
            IdeaStage::Draft => IdeaStatus::Draft,
            IdeaStage::Approved => IdeaStatus::Approved,
            IdeaStage::Scheduled { .. } => IdeaStatus::Scheduled,
            IdeaStage::Posted { .. } => IdeaStatus::Posted,
        }
    }
}

/// A content draft with per-platform captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(flatten)]
    pub stage: IdeaStage,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub platform_adaptations: BTreeMap<Platform, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_type: Option<String>,
}

impl Idea {
    /// Builds a fresh draft with no adaptations.
    #[must_use]
    pub fn draft(id: i64, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            summary: summary.into(),
            stage: IdeaStage::Draft,
            platform_adaptations: BTreeMap::new(),
            hook: None,
            caption: None,
            hashtags: Vec::new(),
            ai_type: None,
        }
    }

    #[must_use]
    pub fn status(&self) -> IdeaStatus {
        self.stage.status()
    }

    #[must_use]
    pub fn scheduled_for(&self) -> Option<DateTime<Utc>> {
        match self.stage {
            IdeaStage::Scheduled { scheduled_for } => Some(scheduled_for),
            _ => None,
        }
    }

    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        match self.stage {
            IdeaStage::Posted { published_at, .. } => Some(published_at),
            _ => None,
        }
    }

    #[must_use]
    pub fn engagement(&self) -> Option<Engagement> {
        match self.stage {
            IdeaStage::Posted { engagement, .. } => Some(engagement),
            _ => None,
        }
    }
}

/// Body of a `POST /generate_ideas` call on the agent origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub persona: String,
    pub brand_rules: String,
    pub platforms: Vec<Platform>,
    pub ai_type: String,
}

impl GenerateRequest {
    /// Text generation request for the given platforms.
    #[must_use]
    pub fn text(
        persona: impl Into<String>,
        brand_rules: impl Into<String>,
        platforms: Vec<Platform>,
    ) -> Self {
        Self {
            persona: persona.into(),
            brand_rules: brand_rules.into(),
            platforms,
            ai_type: "text".to_string(),
        }
    }
}
