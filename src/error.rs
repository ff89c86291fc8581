//! Error handling for the streamsave library.
//!
//! Errors never escape [`DownloadController::start`]: they are logged and
//! folded into the returned [`Summary`]. The enum below is what those
//! failures look like internally, and what the helper functions return.
//!
//! [`DownloadController::start`]: crate::controller::DownloadController::start
//! [`Summary`]: crate::download::Summary

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Errors that can happen while transferring a file.
#[derive(Error, Debug)]
pub enum Error {
    /// The resource locator could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a status outside the success range.
    #[error("Failed to download file: server responded with {0}")]
    Status(StatusCode),

    /// The transfer was cancelled before it completed.
    #[error("Transfer cancelled")]
    Cancelled,

    /// I/O Error.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised by the HTTP middleware stack (retries, tracing).
    #[error("HTTP middleware error: {source}")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

/// Result type alias for streamsave operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = Error::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Failed to download file: server responded with 500 Internal Server Error"
        );
    }

    #[test]
    fn test_cancelled_message() {
        assert_eq!(Error::Cancelled.to_string(), "Transfer cancelled");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::IOError { .. }));
    }
}
