use chrono::{DateTime, Utc};
use social_agent_core::{ConfigError, IdeaStatus};
use thiserror::Error;

use crate::store::Transition;

/// A failed call to one of the remote origins.
///
/// Non-2xx responses carry the HTTP status; transport failures and
/// undecodable bodies do not.
#[derive(Debug, Clone, Error)]
#[error("{method} {path} failed: {reason}")]
pub struct NetworkError {
    pub method: String,
    pub path: String,
    pub status: Option<u16>,
    pub reason: String,
}

/// Errors surfaced by the content service and its stores.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i64 },

    #[error("cannot {action} idea {id}: it is {from}")]
    InvalidTransition {
        id: i64,
        from: IdeaStatus,
        action: Transition,
    },

    #[error("cannot schedule idea {id} at {at}: time is not in the future")]
    ScheduleNotInFuture { id: i64, at: DateTime<Utc> },

    #[error("invalid origin URL '{url}': {reason}")]
    InvalidOrigin { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON serialization error for {context}: {source}")]
    Serialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
