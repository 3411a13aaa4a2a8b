//! Batch layer: directory scan, per-file parse, payload encoding, and
//! post-parse archival. Everything here is peripheral I/O around the pure
//! parser in [`crate::parsers`].

pub mod archive;
pub mod builder;

pub use archive::archive_processed;
pub use builder::{collect_session_files, encode_payload, parse_directory};
