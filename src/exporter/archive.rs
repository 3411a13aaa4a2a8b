//! Moves parsed session files out of the scan directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Directory, next to the source files, receiving parsed files.
pub const PROCESSED_DIR: &str = "processed";

/// Move every file in `files` into a sibling `processed/` directory,
/// creating it if absent.
///
/// Runs only after the whole batch assembled successfully; any failure here
/// is fatal to the run. A file may end up moved while a later one fails -
/// the move is not transactional.
pub fn archive_processed(files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        return Ok(());
    }

    for file in files {
        let Some(parent) = file.parent() else {
            bail!("Session file has no parent directory: {}", file.display());
        };
        let processed_dir = parent.join(PROCESSED_DIR);
        fs::create_dir_all(&processed_dir).with_context(|| {
            format!("Failed to create processed directory: {}", processed_dir.display())
        })?;

        let Some(name) = file.file_name() else {
            bail!("Session file has no file name: {}", file.display());
        };
        let destination = processed_dir.join(name);
        fs::rename(file, &destination).with_context(|| {
            format!("Failed to move {} to {}", file.display(), destination.display())
        })?;
    }

    Ok(())
}
