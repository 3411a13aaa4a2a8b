//! Batch building: enumerate session files, parse each, encode the payload.
//!
//! The batch is all-or-nothing. Any file that fails structurally (wrong
//! section count, bad timestamp, unreadable file) halts the run with no
//! partial output; per-section corruption has already been absorbed inside
//! [`parse_session`] by that point.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::Session;
use crate::parsers::parse_session;

/// Suffix identifying session log files.
pub const SESSION_FILE_SUFFIX: &str = ".csv";

/// Separator terminating each JSON line of the payload.
const PAYLOAD_LINE_TERMINATOR: &str = "\r\n";

/// Enumerate session files directly inside `dir` (no recursion), sorted by
/// file name so batch output is deterministic.
pub fn collect_session_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read session directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        if name.ends_with(SESSION_FILE_SUFFIX) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Parse every session file in `dir`.
///
/// Returns the parsed sessions together with the source paths, in the same
/// order, so the caller can archive exactly the files that made it into the
/// batch. The first file-fatal parse error aborts the whole scan.
pub fn parse_directory(dir: &Path) -> Result<(Vec<Session>, Vec<PathBuf>)> {
    let files = collect_session_files(dir)?;
    let mut sessions = Vec::with_capacity(files.len());

    for path in &files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let session = parse_session(&file_name, &content)
            .with_context(|| format!("Failed to parse session file: {}", path.display()))?;
        sessions.push(session);
    }

    Ok((sessions, files))
}

/// Encode sessions as newline-delimited JSON: one session object per line,
/// each line CRLF-terminated, no enclosing array.
pub fn encode_payload(sessions: &[Session]) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    for session in sessions {
        let line = serde_json::to_vec(session).context("Failed to serialize session")?;
        payload.extend_from_slice(&line);
        payload.extend_from_slice(PAYLOAD_LINE_TERMINATOR.as_bytes());
    }
    Ok(payload)
}
