//! Download module containing the transfer request and its naming helpers.
//!
//! - [`download`] - The [`Download`] request (URL + display name)
//! - [`summary`] - How a transfer ended
//! - [`filename`] - Timestamp and random token naming
//! - [`mime`] - Content type to extension mapping
//!
//! # Examples
//!
//! ```rust
//! use streamsave::download::{extension_for, Download, SessionStamp};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let download = Download::parse("https://example.com/cover", "Album cover")?;
//! let stamp = SessionStamp::capture();
//! let name = stamp.filename(download.first_word(), extension_for(Some("image/png")));
//! assert!(name.starts_with("Album_"));
//! assert!(name.ends_with(".png"));
//! # Ok(())
//! # }
//! ```

pub mod download;
pub mod filename;
pub mod mime;
pub mod summary;

pub use download::Download;
pub use filename::{random_token, SessionStamp};
pub use mime::extension_for;
pub use summary::{Status, Summary};
