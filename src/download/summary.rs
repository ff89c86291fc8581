//! Transfer summary functionality.
//!
//! [`DownloadController::start`] never returns an error. Instead it hands
//! back a [`Summary`] describing how the transfer ended; callers that only
//! watch the controller state can simply drop it.
//!
//! ```rust
//! use streamsave::download::{Status, Summary};
//! use reqwest::StatusCode;
//!
//! let summary = Summary::new("https://example.com/a.png", "Cover art", Status::Success)
//!     .with_statuscode(StatusCode::OK)
//!     .with_size(2048)
//!     .with_filename("Cover_1_abcd.png");
//!
//! assert!(summary.is_success());
//! assert_eq!(summary.filename(), Some("Cover_1_abcd.png"));
//! ```
//!
//! [`DownloadController::start`]: crate::controller::DownloadController::start

use crate::error::Error;
use reqwest::StatusCode;

/// Transfer status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Payload assembled and handed to the save target
    Success,
    /// Transfer failed with error message
    Fail(String),
    /// Transfer stopped by a cancellation token or a reset
    Cancelled,
}

/// Represents the outcome of one transfer.
///
/// The request is kept as plain strings so that a URL which failed to parse
/// can still be reported.
#[derive(Debug, Clone)]
pub struct Summary {
    url: String,
    display_name: String,
    /// HTTP status code, if a response was received.
    statuscode: Option<StatusCode>,
    /// Bytes received.
    size: u64,
    /// Name the payload was offered under.
    filename: Option<String>,
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`].
    pub fn new(url: &str, display_name: &str, status: Status) -> Self {
        Self {
            url: url.to_string(),
            display_name: display_name.to_string(),
            statuscode: None,
            size: 0,
            filename: None,
            status,
        }
    }

    /// Attach a status to a [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Attach the response status code.
    pub fn with_statuscode(self, statuscode: StatusCode) -> Self {
        Self {
            statuscode: Some(statuscode),
            ..self
        }
    }

    /// Attach the number of bytes received.
    pub fn with_size(self, size: u64) -> Self {
        Self { size, ..self }
    }

    /// Attach the derived filename.
    pub fn with_filename(self, filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..self
        }
    }

    /// Get the requested URL, as supplied by the caller.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the display name supplied by the caller.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Get the response status code.
    pub fn statuscode(&self) -> Option<StatusCode> {
        self.statuscode
    }

    /// Get the number of bytes received.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the derived filename, set only on success.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

impl From<&Error> for Status {
    fn from(error: &Error) -> Self {
        match error {
            Error::Cancelled => Status::Cancelled,
            e => Status::Fail(e.to_string()),
        }
    }
}
