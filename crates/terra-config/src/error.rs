//! Errors raised while reading or writing `config.ron`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A config file operation that failed, with the file it failed on.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory config could not be turned into RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}

impl ConfigError {
    /// The file or directory involved, if the error came from the filesystem.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ReadError { path, .. }
            | Self::WriteError { path, .. }
            | Self::ParseError { path, .. } => Some(path),
            Self::SerializeError(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_the_file() {
        let err = ConfigError::ReadError {
            path: PathBuf::from("/etc/terra/config.ron"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let message = err.to_string();
        assert!(message.starts_with("failed to read /etc/terra/config.ron: "), "{message}");
        assert_eq!(err.path(), Some(Path::new("/etc/terra/config.ron")));
    }

    #[test]
    fn test_source_is_chained() {
        use std::error::Error as _;
        let err = ConfigError::WriteError {
            path: PathBuf::from("config.ron"),
            source: io::Error::other("disk full"),
        };
        assert_eq!(err.source().map(|s| s.to_string()), Some("disk full".to_string()));
    }
}
