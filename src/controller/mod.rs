//! Controller module containing the streaming download controller, its
//! builder, configuration, and observable state.
//!
//! - `controller` - The [`DownloadController`] and its transfer logic
//! - `builder` - [`ControllerBuilder`] for configuring a controller
//! - `config` - Configuration structure and callback types
//! - `state` - The [`TransferSession`] callers observe
//!
//! # Examples
//!
//! ```rust,no_run
//! use streamsave::controller::ControllerBuilder;
//! use streamsave::download::Status;
//!
//! # async fn example() {
//! let controller = ControllerBuilder::new()
//!     .save_to("downloads")
//!     .on_progress(|percent| println!("{}%", percent))
//!     .build();
//!
//! let summary = controller.start("https://example.com/cover", "Album cover").await;
//! if let Status::Fail(reason) = summary.status() {
//!     eprintln!("download failed: {}", reason);
//! }
//!
//! controller.reset();
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod controller;
pub mod state;

pub use builder::ControllerBuilder;
pub use config::{CompletionCallback, ControllerConfig, ProgressCallback};
pub use controller::DownloadController;
pub use state::{Phase, TransferSession};
