use std::path::PathBuf;
use thiserror::Error;

use crate::Fingerprint;

/// Result type alias for omreport operations
pub type Result<T> = std::result::Result<T, OmReportError>;

/// Stage of a file read that failed while fingerprinting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoStage {
    /// The file could not be opened
    Open,
    /// A read failed part way through the stream
    Read,
}

impl std::fmt::Display for IoStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Read => write!(f, "read"),
        }
    }
}

/// Errors that can occur when validating, invoking or decoding omreport
#[derive(Error, Debug)]
pub enum OmReportError {
    /// The configured executable does not carry the required base name
    #[error("expected binary name to be {expected}, got {}", path.display())]
    UnexpectedBinaryName {
        /// Offending path
        path: PathBuf,
        /// Required base name
        expected: &'static str,
    },

    /// The executable path could not be stat'ed
    #[error("cannot stat {}: {source}", path.display())]
    Stat {
        /// Path that was queried
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The executable path is a symbolic link
    #[error("expected {} to not be a symlink", path.display())]
    Symlink {
        /// Offending path
        path: PathBuf,
    },

    /// The executable path exists but is not a regular file
    #[error("expected {} to be a regular file", path.display())]
    NotAFile {
        /// Offending path
        path: PathBuf,
    },

    /// Reading the executable for fingerprinting failed
    #[error("{stage} failed for {}: {source}", path.display())]
    Io {
        /// File being fingerprinted
        path: PathBuf,
        /// Where the failure happened
        stage: IoStage,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The executable changed since the baseline was captured
    #[error(
        "current binary checksum {current} does not match the original checksum {baseline} of {}",
        path.display()
    )]
    TamperDetected {
        /// Trusted path
        path: PathBuf,
        /// Freshly computed fingerprint
        current: Fingerprint,
        /// Fingerprint captured at construction
        baseline: Fingerprint,
    },

    /// The external tool could not be started
    #[error("failed to spawn {}: {source}", program.display())]
    Spawn {
        /// Program that failed to start
        program: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran but exited unsuccessfully
    #[error("{} exited with {}: {output}", program.display(), exit_label(*status))]
    CommandFailed {
        /// Program that was run
        program: PathBuf,
        /// Exit code, `None` when terminated by a signal
        status: Option<i32>,
        /// Combined stdout and stderr
        output: String,
    },

    /// The report document could not be decoded
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// A physical disk attribute mask is not a binary number
    #[error("invalid attributes mask: {0:?}")]
    InvalidAttributesMask(String),
}

fn exit_label(status: Option<i32>) -> String {
    status.map_or_else(|| "signal".to_string(), |code| format!("status {code}"))
}

impl OmReportError {
    /// Builds an [`OmReportError::Io`] for `path`
    pub fn io(path: impl Into<PathBuf>, stage: IoStage, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            stage,
            source,
        }
    }

    /// Returns true if the binary changed since it was trusted
    #[must_use]
    pub const fn is_tamper(&self) -> bool {
        matches!(self, Self::TamperDetected { .. })
    }

    /// Returns true if the configured binary was refused outright
    #[must_use]
    pub const fn is_rejected_binary(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedBinaryName { .. } | Self::Symlink { .. } | Self::NotAFile { .. }
        )
    }

    /// Returns true if the error may clear on retry
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Stat { .. })
    }
}
