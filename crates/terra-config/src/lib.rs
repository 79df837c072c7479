//! Configuration system for Terra.
//!
//! Provides settings for the globe, camera pilot, shading and marker that
//! persist to disk as RON files. Supports CLI overrides via clap, reload
//! detection, and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, GlobeConfig, MarkerConfig, PilotConfig, ShadingConfig, CONFIG_FILE_NAME,
};
pub use error::ConfigError;
