//! Shared configuration and record types for the review-export pipelines.

pub mod app_config;
pub mod config;
pub mod products;
pub mod reviews;

use thiserror::Error;

pub use app_config::{AppConfig, FeedKind};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Product, ProductReview};
pub use reviews::OrderReview;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
