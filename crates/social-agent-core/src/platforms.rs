//! Platforms, connected accounts, and trend snapshots.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ideas::Engagement;
use crate::ParseEnumError;

/// A social platform the dashboard can publish to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    X,
    Instagram,
    Linkedin,
    Tiktok,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::X,
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Tiktok,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::X => "x",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
        }
    }

    /// Whether the core API exposes an OAuth login endpoint for this platform.
    ///
    /// TikTok connections are mocked locally and never reach the API.
    #[must_use]
    pub fn has_oauth_login(self) -> bool {
        !matches!(self, Platform::Tiktok)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" | "twitter" => Ok(Platform::X),
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::Linkedin),
            "tiktok" => Ok(Platform::Tiktok),
            _ => Err(ParseEnumError {
                kind: "platform",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Connected,
    Disconnected,
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStatus::Connected => write!(f, "connected"),
            AccountStatus::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// An OAuth-linked account on one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedAccount {
    pub id: i64,
    pub platform: Platform,
    pub username: String,
    pub status: AccountStatus,
}

/// A snapshot of a trending post. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub id: i64,
    pub source: Platform,
    pub topic: String,
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub engagement: Engagement,
    /// Relevance in `[0.0, 1.0]`.
    pub score: f64,
    pub captured_at: DateTime<Utc>,
}
