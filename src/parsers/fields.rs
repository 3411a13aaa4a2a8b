//! Key/value section decoding and field coercion.
//!
//! Two of the four sections are `heading:,value` line blocks. [`FieldTable`]
//! turns such a block into a lookup table, and [`FieldValue`] is the single
//! coercion routine shared by every decoder in this crate: each target type
//! states how it reads a raw cell, and required/optional/default policy is
//! applied at the call site ([`FieldTable::require`], [`super::table::Row`]).

use std::collections::HashMap;

use crate::parsers::error::ParseError;

/// Line separator inside a section block.
const LINE_SEPARATOR: &str = "\r\n";

/// Two-character separator between a heading and its value.
const KEY_VALUE_SEPARATOR: &str = ":,";

/// A type a raw text cell can be coerced into.
///
/// `from_field` returns `None` on any lexical failure; callers decide whether
/// that is a hard error (required fields) or a zero-value default (optional
/// fields).
pub trait FieldValue: Sized {
    /// Type name used in error messages.
    const EXPECTED: &'static str;

    fn from_field(raw: &str) -> Option<Self>;
}

impl FieldValue for f64 {
    const EXPECTED: &'static str = "float";

    fn from_field(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FieldValue for i64 {
    const EXPECTED: &'static str = "int64";

    fn from_field(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FieldValue for bool {
    const EXPECTED: &'static str = "bool";

    // The format admits more spellings than `str::parse::<bool>`: digits,
    // single letters, and cased words.
    fn from_field(raw: &str) -> Option<Self> {
        match raw {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
            _ => None,
        }
    }
}

/// Lookup table built from a `heading:,value` block.
#[derive(Debug)]
pub struct FieldTable {
    entries: HashMap<String, String>,
}

impl FieldTable {
    /// Build the table from a raw section block.
    ///
    /// Lines without the `:,` separator are ignored; a repeated heading keeps
    /// its last value. No duplicate detection, by contract.
    pub fn parse(block: &str) -> Self {
        let mut entries = HashMap::new();
        for line in block.split(LINE_SEPARATOR) {
            if line.is_empty() {
                continue;
            }
            if let Some((heading, value)) = line.split_once(KEY_VALUE_SEPARATOR) {
                entries.insert(heading.to_string(), value.to_string());
            }
        }
        Self { entries }
    }

    /// Look up `column` and coerce it to `T`.
    ///
    /// A missing heading coerces the empty string, so absence and a bad value
    /// surface as the same [`ParseError::Field`], raw value included.
    pub fn require<T: FieldValue>(&self, column: &str) -> Result<T, ParseError> {
        let raw = self.entries.get(column).map(String::as_str).unwrap_or("");
        T::from_field(raw).ok_or_else(|| ParseError::Field {
            column: column.to_string(),
            value: raw.to_string(),
            expected: T::EXPECTED,
        })
    }

    /// Look up a free-text column. Absence yields an empty string, never an
    /// error.
    pub fn text(&self, column: &str) -> String {
        self.entries.get(column).cloned().unwrap_or_default()
    }
}
