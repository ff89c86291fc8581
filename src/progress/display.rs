//! Progress bar display for a single transfer.

use crate::progress::ProgressBarOpts;
use indicatif::ProgressBar;

/// Terminal progress bar tracking the bytes of one transfer.
pub struct ProgressDisplay {
    bar: ProgressBar,
    clear: bool,
}

impl ProgressDisplay {
    /// Create the display for a transfer with an optional declared length.
    pub fn new(opts: &ProgressBarOpts, declared: Option<u64>) -> Self {
        Self {
            bar: opts.to_progress_bar(declared),
            clear: opts.clear,
        }
    }

    /// Advance by one received chunk.
    pub fn inc(&self, chunk_size: u64) {
        self.bar.inc(chunk_size);
    }

    /// Bytes shown so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish the bar after a successful transfer.
    pub fn finish(self) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
    }

    /// Leave the bar where it stopped after a failure or cancellation.
    pub fn abandon(self, msg: &'static str) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.abandon_with_message(msg);
        }
    }
}
