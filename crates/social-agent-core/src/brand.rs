use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Voice and constraints applied to every generated idea.
///
/// Replaced wholesale on update; there is no per-field merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub persona: String,
    pub brand_rules: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_hashtags: Option<String>,
}

/// Load and validate a brand configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brand_config(path: &Path) -> Result<BrandConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let brand: BrandConfig = serde_yaml::from_str(&content)?;
    validate_brand(&brand)?;

    Ok(brand)
}

fn validate_brand(brand: &BrandConfig) -> Result<(), ConfigError> {
    if brand.persona.trim().is_empty() {
        return Err(ConfigError::Validation(
            "persona must be non-empty".to_string(),
        ));
    }
    if brand.brand_rules.trim().is_empty() {
        return Err(ConfigError::Validation(
            "brand_rules must be non-empty".to_string(),
        ));
    }
    if let Some(tags) = &brand.default_hashtags {
        if let Some(bad) = tags.split_whitespace().find(|t| !t.starts_with('#')) {
            return Err(ConfigError::Validation(format!(
                "default_hashtags entry '{bad}' must start with '#'"
            )));
        }
    }
    Ok(())
}
