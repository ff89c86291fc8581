//! Save target writing payloads into a directory.

use super::SaveTarget;
use crate::error::Result;

use std::path::PathBuf;
use tokio::{fs, runtime::Handle};
use tracing::{debug, warn};

/// Writes each offered payload into `directory` on a background task.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    directory: PathBuf,
}

impl DirectoryTarget {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Write `payload` to disk and return the final path.
    pub async fn save(&self, filename: &str, payload: &[u8]) -> Result<PathBuf> {
        debug!("Creating destination directory {:?}", self.directory);
        fs::create_dir_all(&self.directory).await?;

        let output = self.directory.join(sanitize_file_name(filename));
        debug!("Writing {} bytes to {:?}", payload.len(), output);
        fs::write(&output, payload).await?;
        Ok(output)
    }
}

impl SaveTarget for DirectoryTarget {
    fn offer(&self, filename: &str, payload: Vec<u8>) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Cannot save {}: no async runtime ({})", filename, e);
                return;
            }
        };

        let target = self.clone();
        let filename = filename.to_string();
        handle.spawn(async move {
            if let Err(e) = target.save(&filename, &payload).await {
                warn!("Failed to save {}: {}", filename, e);
            }
        });
    }
}

/// Replace path separators so a name can never escape the target directory.
///
/// ```rust
/// use streamsave::save::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("a/b\\c_1_x.bin"), "a_b_c_1_x.bin");
/// assert_eq!(sanitize_file_name("  "), "download");
/// ```
pub fn sanitize_file_name(file_name: &str) -> String {
    let name: String = file_name
        .trim()
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();

    if name.is_empty() {
        "download".to_string()
    } else {
        name
    }
}
