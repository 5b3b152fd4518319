use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Base URL of the core API (brand config, ideas, auth, analytics).
    pub api_url: String,
    /// Base URL of the agent API (trend refresh, idea generation).
    pub agent_url: String,
    pub log_level: String,
    /// `None` leaves requests without a deadline.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    /// `Some` selects the deterministic engagement generator.
    pub engagement_seed: Option<u64>,
    pub seed_demo_ideas: bool,
    pub brand_path: Option<PathBuf>,
}
