//! Content-defined segmentation primitives.
//!
//! This module turns the rolling-hash trigger stream into segments and
//! reduces each segment to one 6-bit checksum value:
//!
//! - [`boundary`] - trigger-modulus evaluation and boundary positions
//! - [`SegmentChecksum`] - FNV-1 per-segment reduction

pub mod boundary;
mod checksum;

pub use checksum::SegmentChecksum;
