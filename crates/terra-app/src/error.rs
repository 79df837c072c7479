//! Application-level errors.

use terra_config::ConfigError;
use thiserror::Error;

use crate::platform::PlatformError;

/// Anything that can stop the application from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("platform setup failed: {0}")]
    Platform(#[from] PlatformError),

    #[error("configuration failed: {0}")]
    Config(#[from] ConfigError),
}
