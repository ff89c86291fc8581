//! Core transfer request.
//!
//! A [`Download`] pairs the resource locator with the caller-supplied display
//! name. The display name is only used for naming the saved file; it is never
//! validated.
//!
//! # Examples
//!
//! ```rust
//! use streamsave::download::Download;
//!
//! let download = Download::parse("https://example.com/track", "Morning Song")?;
//! assert_eq!(download.first_word(), "Morning");
//! # Ok::<(), streamsave::Error>(())
//! ```

use crate::error::Error;

use reqwest::Url;

/// Represents a file to be transferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// URL of the resource.
    pub url: Url,
    /// Human readable name, the first word of which prefixes the filename.
    pub display_name: String,
}

impl Download {
    /// Creates a new [`Download`].
    pub fn new(url: &Url, display_name: &str) -> Self {
        Self {
            url: url.clone(),
            display_name: String::from(display_name),
        }
    }

    /// Parses `url` and creates a new [`Download`].
    pub fn parse(url: &str, display_name: &str) -> Result<Self, Error> {
        let url = Url::parse(url).map_err(|e| {
            Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e))
        })?;
        Ok(Self::new(&url, display_name))
    }

    /// First whitespace-delimited token of the display name.
    ///
    /// Empty when the display name is empty or only whitespace.
    pub fn first_word(&self) -> &str {
        self.display_name.split_whitespace().next().unwrap_or("")
    }
}
