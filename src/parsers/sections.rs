//! Splits a raw session file into its delimiter-separated sections.

/// Blank CRLF line separating the four sections of a session file.
pub const SECTION_DELIMITER: &str = "\r\n\r\n";

/// Number of sections a well-formed session file contains, in order:
/// kill log, weapon settings, session statistics, general settings.
pub const SECTION_COUNT: usize = 4;

/// Split raw file content on every non-overlapping occurrence of the section
/// delimiter. The trailing remainder is always included, so the block count
/// is exactly the delimiter count plus one.
pub fn split_sections(content: &str) -> Vec<&str> {
    content.split(SECTION_DELIMITER).collect()
}
