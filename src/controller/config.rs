//! Configuration structures and defaults for the controller.
//!
//! ```rust
//! use streamsave::controller::{CompletionCallback, ProgressCallback};
//! use streamsave::download::Status;
//!
//! let on_complete: CompletionCallback = Box::new(|summary| match summary.status() {
//!     Status::Success => println!("saved {}", summary.filename().unwrap_or_default()),
//!     Status::Fail(msg) => println!("failed: {}", msg),
//!     _ => {}
//! });
//! let on_progress: ProgressCallback = Box::new(|percent| println!("{}%", percent));
//! ```

use crate::download::Summary;
use crate::progress::ProgressBarOpts;
use crate::save::{DirectoryTarget, SaveTarget};

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::sync::Arc;

/// Callback type for transfer completion events, whatever the outcome.
pub type CompletionCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Callback type for each published progress percentage.
pub type ProgressCallback = Box<dyn Fn(u8) + Send + Sync>;

/// Configuration structure for the controller.
#[derive(Clone)]
pub struct ControllerConfig {
    /// Number of retries for transient request failures.
    pub retries: u32,
    /// Optional proxy configuration.
    pub proxy: Option<reqwest::Proxy>,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Progress bar options.
    pub style_options: ProgressBarOpts,
    /// Where assembled payloads are offered.
    pub save_target: Arc<dyn SaveTarget>,
    /// Callback for each progress update.
    pub on_progress: Option<Arc<ProgressCallback>>,
    /// Callback for when a transfer ends.
    pub on_complete: Option<Arc<CompletionCallback>>,
}

impl std::fmt::Debug for ControllerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerConfig")
            .field("retries", &self.retries)
            .field("proxy", &self.proxy)
            .field("headers", &self.headers)
            .field("style_options", &self.style_options)
            .field("on_progress", &self.on_progress.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            retries: 0,
            proxy: None,
            headers: None,
            style_options: ProgressBarOpts::default(),
            save_target: Arc::new(DirectoryTarget::new(current_dir().unwrap_or_default())),
            on_progress: None,
            on_complete: None,
        }
    }
}
