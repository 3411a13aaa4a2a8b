//! Aim Session Exporter - turn aim-trainer session logs into line-delimited JSON
//!
//! The trainer writes one `*.csv` file per session: four CRLF-blank-line
//! separated sections (kill log, weapon settings, session statistics,
//! general settings) of loosely-typed key/value and tabular text, with the
//! session timestamp embedded only in the file name. This crate supports:
//!
//! - Parsing one session file into a typed [`models::Session`]
//! - Scanning a directory and batch-encoding all sessions as
//!   newline-delimited JSON
//! - Archiving parsed files into a sibling `processed/` directory
//! - Handing the payload to a destination behind the
//!   [`storage::PayloadSink`] seam
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use aim_session_exporter::{encode_payload, parse_directory};
//!
//! let (sessions, _files) = parse_directory(Path::new("./sessions"))?;
//! let payload = encode_payload(&sessions)?;
//! println!("{} bytes from {} sessions", payload.len(), sessions.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod exporter;
pub mod models;
pub mod parsers;
pub mod storage;

// Re-export commonly used items
pub use exporter::builder::{encode_payload, parse_directory};
pub use models::Session;
pub use parsers::error::ParseError;
pub use parsers::session::parse_session;
