use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_AGENT_URL: &str = "http://localhost:8001";
const DEFAULT_USER_AGENT: &str = "social-agent/0.1 (content-automation)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let origin = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(invalid(
                var,
                format!("'{raw}' must start with http:// or https://"),
            ));
        }
        Ok(trimmed.to_string())
    };

    let optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        lookup(var)
            .ok()
            .map(|raw| raw.parse::<u64>().map_err(|e| invalid(var, e.to_string())))
            .transpose()
    };

    let env = parse_environment(&or_default("SOCIAL_AGENT_ENV", "development"))?;
    let api_url = origin("SOCIAL_AGENT_API_URL", DEFAULT_API_URL)?;
    let agent_url = origin("SOCIAL_AGENT_AGENT_URL", DEFAULT_AGENT_URL)?;
    let log_level = or_default("SOCIAL_AGENT_LOG_LEVEL", "info");
    let user_agent = or_default("SOCIAL_AGENT_USER_AGENT", DEFAULT_USER_AGENT);

    let request_timeout_secs = optional_u64("SOCIAL_AGENT_REQUEST_TIMEOUT_SECS")?;
    if request_timeout_secs == Some(0) {
        return Err(invalid(
            "SOCIAL_AGENT_REQUEST_TIMEOUT_SECS",
            "must be greater than zero; unset it to disable the timeout".to_string(),
        ));
    }
    let engagement_seed = optional_u64("SOCIAL_AGENT_ENGAGEMENT_SEED")?;

    let seed_demo_ideas = parse_bool(
        "SOCIAL_AGENT_SEED_DEMO_IDEAS",
        &or_default("SOCIAL_AGENT_SEED_DEMO_IDEAS", "true"),
    )?;

    let brand_path = lookup("SOCIAL_AGENT_BRAND_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        env,
        api_url,
        agent_url,
        log_level,
        request_timeout_secs,
        user_agent,
        engagement_seed,
        seed_demo_ideas,
        brand_path,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SOCIAL_AGENT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected true/false/1/0, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
