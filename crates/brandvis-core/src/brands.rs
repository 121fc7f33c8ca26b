use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The brand whose visibility is being measured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedBrand {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorConfig {
    /// Human-facing label. Falls back to `tracked_name` when absent.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Name matched against response text.
    pub tracked_name: String,
}

impl CompetitorConfig {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.tracked_name)
    }
}

/// Contents of the brands YAML file. Competitor order is preserved as written
/// and drives every ordering decision in the analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandsFile {
    pub brand: TrackedBrand,
    #[serde(default)]
    pub competitors: Vec<CompetitorConfig>,
}

/// Load and validate the brands configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brands(path: &Path) -> Result<BrandsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_brands(&content)
}

/// Parse and validate brands YAML already held in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_brands(content: &str) -> Result<BrandsFile, ConfigError> {
    let brands_file: BrandsFile = serde_yaml::from_str(content)?;
    validate_brands(&brands_file)?;
    Ok(brands_file)
}

fn validate_brands(brands_file: &BrandsFile) -> Result<(), ConfigError> {
    let brand_name = brands_file.brand.name.trim();
    if brand_name.is_empty() {
        return Err(ConfigError::Validation(
            "brand name must be non-empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    seen.insert(brand_name.to_lowercase());

    for competitor in &brands_file.competitors {
        let tracked = competitor.tracked_name.trim();
        if tracked.is_empty() {
            return Err(ConfigError::Validation(
                "competitor tracked_name must be non-empty".to_string(),
            ));
        }

        if !seen.insert(tracked.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate tracked name: '{}'",
                competitor.tracked_name
            )));
        }
    }

    Ok(())
}
