//! Observable transfer session state.

/// State a caller observes while a transfer runs.
///
/// `progress_percent` only moves when the response declared a non-zero
/// length; otherwise it stays at 0 and `completed` is the success signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferSession {
    /// A transfer is running.
    pub busy: bool,
    /// The last transfer handed its payload to the save target.
    pub completed: bool,
    /// Percent of the declared length received, in `0..=100`.
    pub progress_percent: u8,
    /// The last transfer was stopped by its cancellation token.
    pub cancelled: bool,
}

/// Coarse lifecycle position derived from a [`TransferSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InProgress,
    Completed,
    Cancelled,
}

impl TransferSession {
    /// State published when a transfer begins.
    pub(crate) fn started() -> Self {
        Self {
            busy: true,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        if self.busy {
            Phase::InProgress
        } else if self.completed {
            Phase::Completed
        } else if self.cancelled {
            Phase::Cancelled
        } else {
            Phase::Idle
        }
    }
}
