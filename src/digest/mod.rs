//! Digest generation - the batch and streaming pipelines behind one API.
//!
//! This module composes the rolling hash, block-size estimation,
//! segmentation, and signature encoding into two end-to-end strategies:
//!
//! - [`batch`] - vectorized pipeline over a materialized input
//! - [`stream`] - sequential buffered reference pipeline
//!
//! Both are exposed through [`FuzzyHasher`] and produce bit-identical
//! signatures for the same bytes; the streaming variant exists as the
//! correctness and performance reference for the batch one.

pub(crate) mod batch;
pub(crate) mod stream;

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use bytes::Bytes;
use tracing::debug;

use crate::config::DigestConfig;
use crate::error::FuzzyError;
use crate::signature::Signature;
use crate::signature::encode::MAX_DIGEST_LEN;

/// A scan is retried with a halved block size while the long hash has
/// fewer symbols than this and the block size is above the floor.
pub(crate) const RETRY_THRESHOLD: usize = MAX_DIGEST_LEN / 2;

/// Computes similarity-preserving fuzzy digests.
///
/// `FuzzyHasher` is the high-level API over both digest strategies. It
/// holds a configuration and constructs all mutable pipeline state fresh
/// inside every call, so one hasher value may serve any number of
/// sequential computations without them influencing each other.
///
/// # Example
///
/// ```
/// use fuzzysum::{DigestConfig, FuzzyHasher};
///
/// let hasher = FuzzyHasher::new(DigestConfig::default());
/// let sig = hasher.digest_bytes(&b"The quick brown fox jumps over the lazy dog"[..]);
/// assert_eq!(sig.to_string(), "3:FJKKIUKact:FHIGi");
/// ```
#[derive(Debug, Clone)]
pub struct FuzzyHasher {
    config: DigestConfig,
}

impl FuzzyHasher {
    /// Creates a new hasher with the given configuration.
    pub fn new(config: DigestConfig) -> Self {
        Self { config }
    }

    /// Digests an in-memory byte sequence with the batch pipeline.
    ///
    /// The whole input is materialized, the trigger array is computed in
    /// one pass, and boundary positions are re-derived from it on each
    /// block-size retry.
    ///
    /// # Example
    ///
    /// ```
    /// use fuzzysum::FuzzyHasher;
    ///
    /// let hasher = FuzzyHasher::default();
    /// let a = hasher.digest_bytes(&b"some data"[..]);
    /// let b = hasher.digest_bytes(&b"some data"[..]);
    /// assert_eq!(a, b);
    /// ```
    pub fn digest_bytes(&self, data: impl Into<Bytes>) -> Signature {
        let data = data.into();
        batch::digest(&data)
    }

    /// Digests a rewindable byte source with the streaming pipeline.
    ///
    /// The source length is taken by seeking to the end and rewinding;
    /// block-size retries rewind and rescan from the start. Produces the
    /// same signature as [`FuzzyHasher::digest_bytes`] over the same
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::Io`] if reading or seeking fails; the
    /// originating error kind is preserved.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use fuzzysum::FuzzyHasher;
    ///
    /// let hasher = FuzzyHasher::default();
    /// let sig = hasher.digest_reader(Cursor::new(b"some data"))?;
    /// assert_eq!(sig, hasher.digest_bytes(&b"some data"[..]));
    /// # Ok::<(), fuzzysum::FuzzyError>(())
    /// ```
    pub fn digest_reader<R: Read + Seek>(&self, reader: R) -> Result<Signature, FuzzyError> {
        stream::StreamingDigest::new(reader, self.config.buffer_size()).digest()
    }

    /// Digests a file and renders the file wire format.
    ///
    /// Streams the file contents and appends `:"<path>"` to the
    /// signature.
    ///
    /// # Errors
    ///
    /// - [`FuzzyError::FileNotFound`] if the path does not exist or is not
    ///   a regular file
    /// - [`FuzzyError::PermissionDenied`] if the file is unreadable
    /// - [`FuzzyError::Io`] for any other read failure
    pub fn digest_file(&self, path: impl AsRef<Path>) -> Result<String, FuzzyError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| FuzzyError::open(path, e))?;
        if !file.metadata()?.is_file() {
            return Err(FuzzyError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), "hashing file");
        let signature = self.digest_reader(file)?;
        Ok(signature.with_path(path))
    }

    /// Returns the configuration used by this hasher.
    pub fn config(&self) -> &DigestConfig {
        &self.config
    }
}

impl Default for FuzzyHasher {
    fn default() -> Self {
        Self::new(DigestConfig::default())
    }
}
