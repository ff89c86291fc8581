//! Builder pattern implementation for creating [`DownloadController`] instances.
//!
//! ```rust
//! use streamsave::controller::ControllerBuilder;
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "MyApp/1.0".parse()?);
//!
//! let controller = ControllerBuilder::new()
//!     .save_to("downloads")
//!     .headers(headers)
//!     .on_progress(|percent| println!("{}%", percent))
//!     .on_complete(|summary| println!("{:?}", summary.status()))
//!     .build();
//! # Ok(())
//! # }
//! ```

use super::{config::ControllerConfig, controller::DownloadController};
use crate::download::Summary;
use crate::progress::ProgressBarOpts;
use crate::save::{DirectoryTarget, SaveTarget};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::{path::PathBuf, sync::Arc};

/// A builder used to create a [`DownloadController`].
///
/// ```rust
/// # fn main()  {
/// use streamsave::controller::ControllerBuilder;
///
/// let c = ControllerBuilder::hidden().retries(2).save_to("downloads").build();
/// # }
/// ```
#[derive(Default)]
pub struct ControllerBuilder {
    config: ControllerConfig,
}

impl ControllerBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ControllerBuilder::default()
    }

    /// Convenience function to hide the progress bar.
    pub fn hidden() -> Self {
        let mut builder = ControllerBuilder::default();
        builder.config.style_options = ProgressBarOpts::hidden();
        builder
    }

    /// Set the number of retries for transient failures.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Route requests through a proxy.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set the progress bar options.
    pub fn style_options(mut self, style_options: ProgressBarOpts) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Save payloads into `directory`.
    pub fn save_to(mut self, directory: impl Into<PathBuf>) -> Self {
        self.config.save_target = Arc::new(DirectoryTarget::new(directory));
        self
    }

    /// Offer payloads to a custom [`SaveTarget`].
    pub fn save_target<T>(mut self, target: T) -> Self
    where
        T: SaveTarget + 'static,
    {
        self.config.save_target = Arc::new(target);
        self
    }

    /// Set callback for each progress update.
    ///
    /// Called in chunk order, only for the current session, and only when
    /// the response declared a non-zero length.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.config.on_progress = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Set callback for when a transfer ends, whatever the outcome.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add a single http header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`DownloadController`] with the specified options.
    pub fn build(self) -> DownloadController {
        DownloadController::new(self.config)
    }
}
