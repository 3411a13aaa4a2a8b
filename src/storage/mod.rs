//! Externally-injected destination configuration and the payload hand-off
//! seam. No network client lives in this crate; the real object store sits
//! behind [`PayloadSink`].

pub mod config;
pub mod sink;

pub use config::ExportConfig;
pub use sink::{BucketDir, PayloadSink};
