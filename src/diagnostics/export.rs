// SPDX-License-Identifier: MPL-2.0
//! Writing the diagnostics log to disk.

use super::DiagnosticsCollector;
use crate::error::{Error, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamped file name for an exported log.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("iced_gallery_diagnostics_{}.jsonl", now.format("%Y%m%d_%H%M%S"))
}

/// Directory exports go to: `preferred` when given, otherwise the user's
/// documents folder, falling back to the working directory.
#[must_use]
pub fn default_export_directory(preferred: Option<PathBuf>) -> PathBuf {
    preferred
        .or_else(dirs::document_dir)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

impl DiagnosticsCollector {
    /// Writes the buffered events to `path` as JSON lines, creating parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if serialization or any file operation fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let lines = self
            .to_json_lines()
            .map_err(|err| Error::Io(format!("diagnostics serialization: {err}")))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, lines)?;
        Ok(path.to_path_buf())
    }
}
