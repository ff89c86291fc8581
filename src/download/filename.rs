//! Collision-resistant output filenames.
//!
//! A filename is `{first word}_{timestamp}_{token}.{extension}`. The
//! timestamp and token are captured once, when a transfer starts, so they do
//! not depend on how long the transfer takes. Uniqueness is probabilistic.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use chrono::Utc;
use rand::RngCore;

/// Number of random bytes drawn per transfer.
pub const TOKEN_BYTES: usize = 3;

/// Naming ingredients fixed at the start of a transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStamp {
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    /// Short printable random token.
    pub token: String,
}

impl SessionStamp {
    /// Capture the current time and draw a fresh random token.
    pub fn capture() -> Self {
        Self {
            timestamp: Utc::now().timestamp_millis(),
            token: random_token(),
        }
    }

    /// Build the filename for `first_word` and `extension`.
    ///
    /// ```rust
    /// use streamsave::download::SessionStamp;
    ///
    /// let stamp = SessionStamp { timestamp: 1700000000000, token: "a-_Z".into() };
    /// assert_eq!(stamp.filename("Report", "pdf"), "Report_1700000000000_a-_Z.pdf");
    /// ```
    pub fn filename(&self, first_word: &str, extension: &str) -> String {
        format!(
            "{}_{}_{}.{}",
            first_word, self.timestamp, self.token, extension
        )
    }
}

/// Encode [`TOKEN_BYTES`] cryptographically strong random bytes.
///
/// The URL-safe alphabet keeps path separators out of the token.
pub fn random_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE.encode(bytes)
}
