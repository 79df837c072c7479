//! OS-specific directory resolution.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during platform operations.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    /// Directory creation failed.
    #[error("platform I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Directories Terra reads and writes.
///
/// Follows OS conventions (XDG on Linux, Known Folders on Windows, Library
/// on macOS).
#[derive(Clone, Debug)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Log files.
    pub log_dir: PathBuf,
}

const APP_NAME: &str = "terra";

impl PlatformDirs {
    /// Resolve directories without creating them.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NoConfigDir`] if the OS does not expose a
    /// configuration directory.
    pub fn resolve() -> Result<Self, PlatformError> {
        let app_dir = dirs::config_dir()
            .ok_or(PlatformError::NoConfigDir)?
            .join(APP_NAME);
        let log_dir = dirs::data_local_dir()
            .map(|dir| dir.join(APP_NAME).join("logs"))
            .unwrap_or_else(|| app_dir.join("logs"));
        Ok(Self {
            config_dir: app_dir,
            log_dir,
        })
    }

    /// Resolve directories, honouring an explicit config directory, and
    /// create them on disk.
    ///
    /// With an override the OS directories are not consulted at all.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if resolution or directory creation fails.
    pub fn resolve_and_create(config_override: Option<&Path>) -> Result<Self, PlatformError> {
        let dirs = match config_override {
            Some(config_dir) => Self::with_config_dir(config_dir),
            None => Self::resolve()?,
        };
        dirs.create_dirs()?;
        Ok(dirs)
    }

    /// Directories for an explicit config directory, logs kept beside it.
    pub fn with_config_dir(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
            log_dir: config_dir.join("logs"),
        }
    }

    /// Create all directories on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Io`] if any directory cannot be created.
    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_override_layout() {
        let dir = Path::new("/tmp/terra-custom");
        let dirs = PlatformDirs::with_config_dir(dir);
        assert_eq!(dirs.config_dir, dir);
        assert_eq!(dirs.log_dir, dir.join("logs"));
    }

    #[test]
    fn test_override_is_created_on_disk() {
        let temp = tempfile::tempdir().unwrap();
        let config_dir = temp.path().join("nested").join("config");
        let dirs = PlatformDirs::resolve_and_create(Some(&config_dir)).unwrap();
        assert_eq!(dirs.config_dir, config_dir);
        assert!(dirs.config_dir.is_dir());
        assert!(dirs.log_dir.is_dir());
        // Creating twice is fine.
        dirs.create_dirs().unwrap();
    }

    #[test]
    fn test_error_display() {
        let err = PlatformError::NoConfigDir;
        assert_eq!(err.to_string(), "could not determine OS configuration directory");
        let io_err = PlatformError::from(io::Error::other("disk full"));
        assert!(io_err.to_string().contains("disk full"));
    }
}
