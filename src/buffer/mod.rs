//! Internal buffer management for the streaming pipeline.
//!
//! This module provides a thread-local buffer pool so repeated streaming
//! scans (including block-size retry rescans) reuse one allocation. It is
//! an implementation detail and not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
