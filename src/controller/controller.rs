//! Streaming download controller.
//!
//! The [`DownloadController`] fetches one resource at a time, publishes
//! progress while the body streams in, then offers the assembled payload to
//! its save target under a derived filename.
//!
//! # Examples
//!
//! ```rust,no_run
//! use streamsave::controller::ControllerBuilder;
//!
//! # async fn example() {
//! let controller = ControllerBuilder::new().save_to("downloads").build();
//! let mut state = controller.subscribe();
//!
//! tokio::spawn(async move {
//!     while state.changed().await.is_ok() {
//!         println!("{}%", state.borrow().progress_percent);
//!     }
//! });
//!
//! controller.start("https://example.com/track", "Morning Song").await;
//! assert!(controller.state().completed);
//! # }
//! ```
//!
//! ## Cancellation
//!
//! ```rust,no_run
//! use streamsave::controller::ControllerBuilder;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() {
//! let controller = ControllerBuilder::hidden().build();
//! let token = CancellationToken::new();
//! token.cancel();
//!
//! let summary = controller
//!     .start_with_cancel("https://example.com/big.pdf", "Manual", token)
//!     .await;
//! assert!(controller.state().cancelled);
//! # }
//! ```

use super::config::ControllerConfig;
use super::state::TransferSession;
use crate::download::{extension_for, Download, SessionStamp, Status, Summary};
use crate::error::{Error, Result};
use crate::http::{create_http_client, declared_content_type, declared_length, HttpClientConfig};
use crate::progress::{percent_complete, ProgressDisplay};

use futures::StreamExt;
use parking_lot::Mutex;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::fmt;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Identifies the current session. Only the holder of the current epoch may
/// mutate the published state.
#[derive(Debug, Default)]
struct SessionSlot {
    epoch: u64,
    cancel: Option<CancellationToken>,
}

/// Handle a running transfer keeps on its own session.
struct Session {
    epoch: u64,
    token: CancellationToken,
}

/// What the server sent back, kept for the summary whatever the outcome.
#[derive(Debug, Default)]
struct TransferRecord {
    statuscode: Option<StatusCode>,
    received: u64,
}

/// Clears `busy` when a transfer ends, however it ends.
struct BusyGuard<'a> {
    controller: &'a DownloadController,
    epoch: u64,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut slot = self.controller.slot.lock();
        if slot.epoch == self.epoch {
            slot.cancel = None;
            self.controller.state.send_modify(|s| s.busy = false);
        }
    }
}

/// Represents the streaming download controller.
///
/// A controller can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use streamsave::controller::ControllerBuilder;
///
/// let c = ControllerBuilder::new().build();
/// assert!(!c.state().busy);
/// # }
/// ```
pub struct DownloadController {
    config: ControllerConfig,
    state: watch::Sender<TransferSession>,
    slot: Mutex<SessionSlot>,
}

impl fmt::Debug for DownloadController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadController")
            .field("config", &self.config)
            .field("state", &*self.state.borrow())
            .finish()
    }
}

impl DownloadController {
    /// Creates a new controller with the given configuration.
    pub(crate) fn new(config: ControllerConfig) -> Self {
        let (state, _) = watch::channel(TransferSession::default());
        Self {
            config,
            state,
            slot: Mutex::new(SessionSlot::default()),
        }
    }

    /// Gets the number of retries per request.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Snapshot of the observable state.
    pub fn state(&self) -> TransferSession {
        *self.state.borrow()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<TransferSession> {
        self.state.subscribe()
    }

    /// Whether a transfer is running.
    pub fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }

    /// Whether the last transfer offered its payload.
    pub fn is_completed(&self) -> bool {
        self.state.borrow().completed
    }

    /// Last published progress, 0 to 100.
    pub fn progress(&self) -> u8 {
        self.state.borrow().progress_percent
    }

    /// Fetch `url` and offer it for saving under a name derived from
    /// `display_name`.
    ///
    /// Never fails: errors are logged and reported through the returned
    /// [`Summary`], which callers are free to ignore.
    pub async fn start(&self, url: &str, display_name: &str) -> Summary {
        self.start_with_cancel(url, display_name, CancellationToken::new())
            .await
    }

    /// Same as [`start`](Self::start), stopping at the next suspension point
    /// once `cancel` fires.
    pub async fn start_with_cancel(
        &self,
        url: &str,
        display_name: &str,
        cancel: CancellationToken,
    ) -> Summary {
        let stamp = SessionStamp::capture();
        let session = self.begin(cancel.child_token());
        let busy = BusyGuard {
            controller: self,
            epoch: session.epoch,
        };

        let mut record = TransferRecord::default();
        let outcome = match Download::parse(url, display_name) {
            Ok(download) => self.fetch(&download, &stamp, &session, &mut record).await,
            Err(e) => Err(e),
        };

        let summary = match outcome {
            Ok(filename) => Summary::new(url, display_name, Status::Success).with_filename(filename),
            Err(Error::Cancelled) => {
                debug!("Transfer of {} cancelled", url);
                self.publish(&session, |s| s.cancelled = true);
                Summary::new(url, display_name, Status::Cancelled)
            }
            Err(e) => {
                warn!("Download error: {}", e);
                Summary::new(url, display_name, Status::from(&e))
            }
        };
        let summary = match record.statuscode {
            Some(statuscode) => summary.with_statuscode(statuscode),
            None => summary,
        }
        .with_size(record.received);
        drop(busy);

        if let Some(ref callback) = self.config.on_complete {
            callback(&summary);
        }

        summary
    }

    /// Return to the idle state.
    ///
    /// A transfer still running is cancelled at its next suspension point and
    /// will neither save its payload nor touch the state again. Called from
    /// inside a save target, it leaves the offered payload alone and only
    /// keeps the transfer from being marked completed.
    pub fn reset(&self) {
        let mut slot = self.slot.lock();
        if let Some(token) = slot.cancel.take() {
            debug!("Abandoning in-flight transfer");
            token.cancel();
        }
        slot.epoch += 1;
        self.state.send_replace(TransferSession::default());
    }

    /// Open a new session, superseding any running one.
    fn begin(&self, token: CancellationToken) -> Session {
        let mut slot = self.slot.lock();
        if let Some(previous) = slot.cancel.replace(token.clone()) {
            previous.cancel();
        }
        slot.epoch += 1;
        self.state.send_replace(TransferSession::started());

        Session {
            epoch: slot.epoch,
            token,
        }
    }

    /// Whether `session` is still the current, uncancelled one.
    fn is_current(&self, session: &Session) -> bool {
        let slot = self.slot.lock();
        slot.epoch == session.epoch && !session.token.is_cancelled()
    }

    /// Apply `update` if `session` is still the current one.
    fn publish(&self, session: &Session, update: impl FnOnce(&mut TransferSession)) -> bool {
        let slot = self.slot.lock();
        if slot.epoch != session.epoch {
            return false;
        }
        self.state.send_modify(update);
        true
    }

    fn publish_progress(&self, session: &Session, percent: u8) {
        if self.publish(session, |s| s.progress_percent = percent) {
            if let Some(ref callback) = self.config.on_progress {
                callback(percent);
            }
        }
    }

    /// Stream the body into memory, then offer it to the save target.
    ///
    /// Returns the filename the payload was offered under.
    async fn fetch(
        &self,
        download: &Download,
        stamp: &SessionStamp,
        session: &Session,
        record: &mut TransferRecord,
    ) -> Result<String> {
        let client = create_http_client(HttpClientConfig {
            retries: self.config.retries,
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
        })?;

        debug!("Fetching {}", &download.url);
        let res = tokio::select! {
            biased;
            _ = session.token.cancelled() => return Err(Error::Cancelled),
            res = client.get(download.url.clone()).send() => res?,
        };

        let statuscode = res.status();
        record.statuscode = Some(statuscode);
        if !statuscode.is_success() {
            return Err(Error::Status(statuscode));
        }

        let declared = declared_length(res.headers());
        let content_type = declared_content_type(res.headers());
        debug!(
            "Response declared length {:?}, content type {:?}",
            declared, content_type
        );

        let display = ProgressDisplay::new(&self.config.style_options, declared);
        let mut chunks = Vec::new();

        debug!("Retrieving chunks...");
        let mut stream = res.bytes_stream();
        loop {
            let item = tokio::select! {
                biased;
                _ = session.token.cancelled() => {
                    display.abandon("cancelled");
                    return Err(Error::Cancelled);
                }
                item = stream.next() => item,
            };
            let Some(item) = item else { break };

            let chunk = match item {
                Ok(chunk) => chunk,
                Err(e) => {
                    display.abandon("failed");
                    return Err(e.into());
                }
            };
            let chunk_size = chunk.len() as u64;
            record.received += chunk_size;
            display.inc(chunk_size);
            chunks.push(chunk);

            if let Some(percent) = percent_complete(record.received, declared) {
                self.publish_progress(session, percent);
            }
        }
        display.finish();

        let payload: Vec<u8> = chunks.concat();
        drop(chunks);

        let extension = extension_for(content_type.as_deref());
        let filename = stamp.filename(download.first_word(), extension);

        if !self.is_current(session) {
            return Err(Error::Cancelled);
        }
        debug!("Offering {} ({} bytes)", filename, payload.len());
        self.config.save_target.offer(&filename, payload);
        // A reset issued while offering wins over completion.
        self.publish(session, |s| s.completed = true);

        Ok(filename)
    }
}
