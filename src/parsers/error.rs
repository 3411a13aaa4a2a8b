use thiserror::Error;

/// Typed errors produced by the session parser.
///
/// `Structure` and `Timestamp` abort the parse of their file (and, at the
/// batch level, the whole run). `Field` and `Table` abort only the section
/// that raised them; the assembler downgrades those to an absent field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid session file '{file}': expected 4 sections, found {count}")]
    Structure { file: String, count: usize },

    #[error("unable to parse timestamp from '{file}': {reason}")]
    Timestamp { file: String, reason: String },

    #[error("cannot parse '{value}' as {expected} for column '{column}'")]
    Field {
        column: String,
        value: String,
        expected: &'static str,
    },

    #[error("malformed table block: {reason}")]
    Table { reason: String },
}

impl ParseError {
    pub(crate) fn timestamp(file: &str, reason: impl Into<String>) -> Self {
        ParseError::Timestamp { file: file.to_string(), reason: reason.into() }
    }
}
