//! Shared configuration and tracked-brand definitions for brandvis.

mod app_config;
mod brands;
mod config;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use brands::{load_brands, parse_brands, BrandsFile, CompetitorConfig, TrackedBrand};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brands file {path}: {source}")]
    BrandsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brands file: {0}")]
    BrandsFileParse(#[from] serde_yaml::Error),

    #[error("brands validation error: {0}")]
    Validation(String),
}
