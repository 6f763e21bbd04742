use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for m3uclean
#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("{0}")]
    Usage(String),

    #[error("Failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server returned status {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Fetched playlist from {url} is empty")]
    EmptySource { url: String },

    #[error("Not a valid M3U document: missing required #EXTM3U header")]
    MissingHeader,

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for m3uclean
pub type Result<T> = std::result::Result<T, PlaylistError>;

impl PlaylistError {
    /// Create a usage error
    pub fn usage<S: Into<String>>(msg: S) -> Self {
        PlaylistError::Usage(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PlaylistError::Config(msg.into())
    }

    /// True for failures that happen before the destination is touched
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            PlaylistError::Fetch { .. }
                | PlaylistError::Status { .. }
                | PlaylistError::EmptySource { .. }
        )
    }

    /// True when the run failed before the destination was opened
    pub fn leaves_destination_untouched(&self) -> bool {
        !matches!(self, PlaylistError::Write { .. })
    }

    /// Every failure is terminal for the run and maps to the same status.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
