pub mod app_config;
pub mod brand;
pub mod config;
pub mod ideas;
pub mod platforms;

pub use app_config::{AppConfig, Environment};
pub use brand::{load_brand_config, BrandConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use ideas::{Engagement, GenerateRequest, Idea, IdeaStage, IdeaStatus};
pub use platforms::{AccountStatus, ConnectedAccount, Platform, Trend};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brand config file {path}: {source}")]
    BrandFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brand config file: {0}")]
    BrandFileParse(#[from] serde_yaml::Error),

    #[error("brand config validation failed: {0}")]
    Validation(String),
}

/// Returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}
