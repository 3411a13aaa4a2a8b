//! Payload hand-off seam.
//!
//! The exporter finishes with an opaque byte buffer; where those bytes land
//! is behind [`PayloadSink`]. Deployments put an object-storage client
//! behind it; this crate ships [`BucketDir`], which lays objects out in a
//! local directory the same way a bucket would, which is also what the
//! integration tests drive.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use uuid::Uuid;

/// Destination for a finalized payload.
pub trait PayloadSink {
    /// Store `payload` under `object_name`.
    fn store(&self, object_name: &str, payload: &[u8]) -> Result<()>;
}

/// Generate a fresh object name for one payload upload.
pub fn object_name() -> String {
    Uuid::new_v4().to_string()
}

/// Local directory standing in for an object-storage bucket.
#[derive(Debug, Clone)]
pub struct BucketDir {
    root: PathBuf,
}

impl BucketDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PayloadSink for BucketDir {
    fn store(&self, object_name: &str, payload: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create bucket directory: {}", self.root.display()))?;
        let path = self.root.join(object_name);
        fs::write(&path, payload)
            .with_context(|| format!("Failed to write payload object: {}", path.display()))
    }
}
