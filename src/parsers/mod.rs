//! Session-file parsers.
//!
//! # Error Handling Strategy
//!
//! A session file has four CRLF-blank-line separated sections (kill log,
//! weapon settings, session statistics, general settings) and carries its
//! timestamp only in the file name. Failures split into two tiers:
//!
//! - **File-fatal**: a wrong section count ([`ParseError::Structure`]) or an
//!   unreadable file-name timestamp ([`ParseError::Timestamp`]) abort the
//!   file's parse - and, because parsing is deterministic, the batch run as
//!   a whole. There are no retries; retrying a pure parse reproduces the
//!   same error.
//!
//! - **Section-scoped**: a missing or uncoercible required field
//!   ([`ParseError::Field`], [`ParseError::Table`]) aborts only its section.
//!   The assembler logs a `Warning:` line to stderr and leaves that field
//!   absent, so partially corrupt logs still export. Optional cells in
//!   weapon rows never error at all - they default to zero values.
//!
//! Callers outside the parser deal in `anyhow::Result` with context; the
//! typed [`ParseError`] exists so the assembly boundary can tell the two
//! tiers apart.

pub mod error;
pub mod fields;
pub mod sections;
pub mod session;
pub mod settings;
pub mod table;
pub mod timestamp;

pub use error::ParseError;
pub use session::parse_session;
