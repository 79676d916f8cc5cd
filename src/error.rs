use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong in response to a user action.
///
/// None of these are fatal: the controller turns each one into an error dialog
/// carrying the underlying message and the window keeps running.
#[derive(Error, Debug)]
pub enum AppError {
    /// Listing, creation or deletion failed in the filesystem.
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path typed by the user does not name an existing directory.
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// An external program could not be launched.
    #[error("Could not launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Home directory could not be resolved")]
    NoHomeDirectory,
}

impl AppError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// The OS error kind behind an `Io` failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            AppError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
