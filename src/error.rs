// Error types for the route table server

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Routing table unavailable at {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed route record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Invalid route flags: {0:?}")]
    InvalidFlags(String),

    #[error("Invalid address encoding: {0:?}")]
    InvalidAddressEncoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Convert error to the message shown on the error page
    pub fn user_message(&self) -> String {
        match self {
            AppError::SourceUnavailable { .. } => {
                "Failed to read the kernel routing table. Check that this host exposes it and that the server has permission to read it.".to_string()
            }
            AppError::MalformedRecord { line, .. } => {
                format!("The routing table contains an unreadable entry (line {}).", line)
            }
            AppError::InvalidFlags(_) => {
                "A route carries a flags field that is not valid hexadecimal.".to_string()
            }
            AppError::InvalidAddressEncoding(_) => {
                "A route carries an address that is not 8 hexadecimal characters.".to_string()
            }
            AppError::Io(_) => "Connection error while serving the page.".to_string(),
        }
    }

    /// HTTP status line text used when this error reaches the client
    pub fn status_line(&self) -> &'static str {
        "500 Internal Server Error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_names_line() {
        let err = AppError::MalformedRecord {
            line: 3,
            reason: "expected 11 fields, found 4".to_string(),
        };
        assert!(err.user_message().contains("line 3"));
        assert!(err.to_string().contains("expected 11 fields"));
    }

    #[test]
    fn test_source_unavailable_display() {
        let err = AppError::SourceUnavailable {
            path: PathBuf::from("/proc/net/route"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/proc/net/route"));
        assert_eq!(err.status_line(), "500 Internal Server Error");
    }
}
