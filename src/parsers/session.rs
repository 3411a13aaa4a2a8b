//! Assembles one [`Session`] from a raw file.
//!
//! The assembler is deliberately more tolerant than its sub-decoders: a wrong
//! section count or an unreadable timestamp fails the file, but a section
//! that fails to decode is downgraded to an absent field via [`absorb`] so a
//! partially corrupt log still produces a session. That downgrade is policy,
//! not accident - see the tests at the bottom of this file.

use sha1::{Digest, Sha1};

use crate::models::Session;
use crate::parsers::error::ParseError;
use crate::parsers::sections::{SECTION_COUNT, split_sections};
use crate::parsers::settings::{decode_general_settings, decode_session_stats};
use crate::parsers::table::{decode_kills, decode_weapon_settings};
use crate::parsers::timestamp::extract_timestamp;

/// Parse one session file into a [`Session`].
///
/// Pure and deterministic: the same file name and content always produce the
/// same session. The identifier is the hex SHA-1 of the file name bytes, so
/// two files with the same name collide even when their content differs; the
/// hash says nothing about content integrity.
pub fn parse_session(file_name: &str, content: &str) -> Result<Session, ParseError> {
    let sections = split_sections(content);
    if sections.len() != SECTION_COUNT {
        return Err(ParseError::Structure { file: file_name.to_string(), count: sections.len() });
    }

    let session_hash = hex::encode(Sha1::digest(file_name.as_bytes()));
    let time = extract_timestamp(file_name)?;

    // Fixed section order: kill log, weapon settings, statistics, general
    // settings. Each decode is best-effort from here on.
    let kills = absorb(file_name, "kill log", decode_kills(sections[0])).unwrap_or_default();
    let weapon_settings =
        absorb(file_name, "weapon settings", decode_weapon_settings(sections[1])).flatten();
    let statistics = absorb(file_name, "session statistics", decode_session_stats(sections[2]));
    let general_settings =
        absorb(file_name, "general settings", decode_general_settings(sections[3]));

    Ok(Session { session_hash, time, general_settings, weapon_settings, statistics, kills })
}

/// Downgrade a section decode failure to an absent value.
///
/// The failure is reported on stderr and the session keeps its other
/// sections. Only structural and timestamp errors may abort a file.
fn absorb<T>(file_name: &str, section: &str, result: Result<T, ParseError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            eprintln!("Warning: dropping {} section of '{}': {}", section, file_name, e);
            None
        }
    }
}
