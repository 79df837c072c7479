//! Startup configuration loading.

use std::path::{Path, PathBuf};

use terra_config::{CliArgs, Config};
use tracing::info;

use crate::error::AppError;

/// Config as loaded at startup, plus where it came from.
#[derive(Clone, Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// The `config.ron` that was read or written.
    pub path: PathBuf,
    /// `true` if no file existed and defaults were written.
    pub created: bool,
}

impl LoadedConfig {
    /// Report where the config came from. Call once logging is installed;
    /// the loader runs before the subscriber exists.
    pub fn log_source(&self) {
        if self.created {
            info!(path = %self.path.display(), "created default config");
        } else {
            info!(path = %self.path.display(), "loaded config");
        }
    }
}

/// Load or create `config.ron` in `config_dir` and apply CLI overrides.
///
/// # Errors
///
/// Returns [`AppError::Config`] if the file cannot be read, parsed or written.
pub fn load_config(config_dir: &Path, args: &CliArgs) -> Result<LoadedConfig, AppError> {
    let path = Config::file_path(config_dir);
    let created = !path.exists();
    let mut config = Config::load_or_create(config_dir)?;
    config.apply_cli_overrides(args);
    Ok(LoadedConfig {
        config,
        path,
        created,
    })
}
