//! Save targets: where an assembled payload is offered to the user.
//!
//! The controller hands the payload and its derived filename to a
//! [`SaveTarget`] and moves on; it never waits for or observes the outcome.
//! Ownership of the payload moves into the target, so the controller keeps no
//! reference to it once the offer is made.
//!
//! Any `Fn(&str, Vec<u8>)` closure is a target:
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use streamsave::save::SaveTarget;
//!
//! let offered = Arc::new(Mutex::new(Vec::new()));
//! let sink = offered.clone();
//! let target = move |filename: &str, payload: Vec<u8>| {
//!     sink.lock().unwrap().push((filename.to_string(), payload.len()));
//! };
//!
//! target.offer("Cover_1_abcd.png", vec![0u8; 16]);
//! assert_eq!(offered.lock().unwrap()[0], ("Cover_1_abcd.png".to_string(), 16));
//! ```

pub mod directory;

pub use directory::{sanitize_file_name, DirectoryTarget};

/// Host "offer file to user" primitive.
pub trait SaveTarget: Send + Sync {
    /// Present `payload` for saving under `filename`.
    ///
    /// Called on the transfer's task: long work belongs on a spawned task.
    fn offer(&self, filename: &str, payload: Vec<u8>);
}

impl<F> SaveTarget for F
where
    F: Fn(&str, Vec<u8>) + Send + Sync,
{
    fn offer(&self, filename: &str, payload: Vec<u8>) {
        self(filename, payload)
    }
}
