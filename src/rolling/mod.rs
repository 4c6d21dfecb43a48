//! Rolling hash implementation.
//!
//! This module contains the windowed checksum that drives segment-boundary
//! detection:
//!
//! - [`RollingHash`] - spamsum-style 32-bit rolling hash

mod spamsum;

pub use spamsum::{ROLLING_WINDOW, RollingHash};
