//! Error types for ozon_stock_sync

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for sync operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Marketplace or feed host answered with a non-success status
    #[error("HTTP error {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Malformed price or quantity field in the supplier feed
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Programming misuse, e.g. a zero batch size
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Supplier archive or spreadsheet could not be read
    #[error("Supplier feed error: {0}")]
    Feed(String),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse failure classes shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Connection,
    Other,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Connection => write!(f, "connection"),
            FailureKind::Other => write!(f, "other"),
        }
    }
}

impl SyncError {
    pub fn http_status(status: StatusCode, body: String) -> Self {
        SyncError::HttpStatus { status, body }
    }

    /// Classify the error for the run summary.
    pub fn kind(&self) -> FailureKind {
        match self {
            SyncError::Transport(e) if e.is_timeout() => FailureKind::Timeout,
            SyncError::Transport(e) if e.is_connect() => FailureKind::Connection,
            _ => FailureKind::Other,
        }
    }
}

impl From<zip::result::ZipError> for SyncError {
    fn from(err: zip::result::ZipError) -> Self {
        SyncError::Feed(format!("archive: {}", err))
    }
}

impl From<calamine::Error> for SyncError {
    fn from(err: calamine::Error) -> Self {
        SyncError::Feed(format!("spreadsheet: {}", err))
    }
}

/// Result alias for sync operations
pub type Result<T> = std::result::Result<T, SyncError>;
