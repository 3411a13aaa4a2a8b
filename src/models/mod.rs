//! Data models for parsed session logs.
//!
//! One [`Session`] is produced per input file. Its sub-records mirror the four
//! sections of the raw format:
//!
//! - [`Kill`] - one per row of the kill-log table
//! - [`WeaponSettings`] - per-weapon aggregates
//! - [`Statistics`] - whole-session aggregates
//! - [`GeneralSettings`] - game-wide settings
//!
//! All models serialize with serde using the snake_case wire names consumed
//! downstream; the same names round-trip back in for tests.

pub mod session;

pub use session::{GeneralSettings, Kill, Session, Statistics, WeaponSettings};
