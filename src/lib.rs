//! Streamsave downloads a remote file, reports progress while the body
//! streams in, and offers the result for saving under a collision-resistant
//! name.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use streamsave::ControllerBuilder;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let controller = ControllerBuilder::new().save_to("output").build();
//! let summary = controller
//!     .start("https://www.rust-lang.org/logos/rust-logo-512x512.png", "Rust logo")
//!     .await;
//!
//! // e.g. "output/Rust_1718000000000_Qx-7.png"
//! println!("{:?} {:?}", summary.status(), summary.filename());
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`controller`] - The `DownloadController`, its builder and observable state
//! - [`download`] - The transfer request, its summary, and filename derivation
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client construction and response header helpers
//! - [`progress`] - Percent accounting and the terminal progress bar
//! - [`save`] - Save targets receiving the assembled payload

pub mod controller;
pub mod download;
pub mod error;
pub mod http;
pub mod progress;
pub mod save;

pub use controller::{ControllerBuilder, DownloadController, Phase, TransferSession};
pub use download::{extension_for, Download, SessionStamp, Status, Summary};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use progress::{percent_complete, ProgressBarOpts};
pub use save::{DirectoryTarget, SaveTarget};
pub use tokio_util::sync::CancellationToken;
