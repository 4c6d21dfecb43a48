//! fuzzysum
//!
//! Context-triggered piecewise hashing (CTPH) for Rust.
//!
//! `fuzzysum` reduces a byte stream to a short similarity-preserving
//! signature in the spamsum/ssdeep family: near-duplicate inputs produce
//! signatures sharing long common substrings, which makes the digests
//! suitable input for approximate-match comparison downstream. It is
//! designed as a small, composable primitive for:
//!
//! - near-duplicate detection
//! - spam and malware triage
//! - content clustering
//!
//! The crate intentionally:
//! - does NOT score signature similarity
//! - does NOT claim cryptographic collision resistance
//! - does NOT manage concurrency
//!
//! It only does one thing: **bytes → `"blocksize:long_hash:short_hash"`**
//!
//! Two pipelines produce that signature - a batch pass over materialized
//! input and a buffered streaming pass over any rewindable reader - and
//! they are bit-identical for the same bytes, so either can check the
//! other.
//!
//! # In-memory
//!
//! ```
//! use fuzzysum::hash;
//!
//! let sig = hash("The quick brown fox jumps over the lazy dog");
//! assert_eq!(sig.to_string(), "3:FJKKIUKact:FHIGi");
//!
//! // A one-byte edit only perturbs a localized region of the signature.
//! let edited = hash("The quick brown fox jumps over the lazy hog");
//! assert_eq!(edited.to_string(), "3:FJKKIUKacp:FHIGu");
//! ```
//!
//! # Files
//!
//! ```no_run
//! use fuzzysum::{FuzzyError, hash_from_file};
//!
//! fn main() -> Result<(), FuzzyError> {
//!     let digest = hash_from_file("data.bin")?;
//!     println!("{digest}"); // 196608:kKBk...:aWpE...:"data.bin"
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blocksize;
mod config;
mod digest;
mod error;
mod signature;

mod buffer; // internal (thread-local reuse)
mod rolling; // internal spamsum rolling hash
mod segment; // internal boundary + checksum primitives

//
// Public surface (intentionally tiny)
//

pub use config::{DEFAULT_BUFFER_SIZE, DigestConfig};
pub use digest::FuzzyHasher;
pub use error::FuzzyError;
pub use signature::Signature;

use std::path::Path;

use bytes::Bytes;

/// Digests a string with the default configuration.
///
/// # Example
///
/// ```
/// use fuzzysum::hash;
///
/// assert_eq!(hash(""), hash(""));
/// ```
pub fn hash(text: &str) -> Signature {
    hash_bytes(Bytes::copy_from_slice(text.as_bytes()))
}

/// Digests a raw byte sequence with the default configuration.
///
/// # Example
///
/// ```
/// use fuzzysum::hash_bytes;
///
/// let sig = hash_bytes(&b"The quick brown fox jumps over the lazy dog"[..]);
/// assert_eq!(sig.block_size(), 3);
/// ```
pub fn hash_bytes(data: impl Into<Bytes>) -> Signature {
    FuzzyHasher::default().digest_bytes(data)
}

/// Digests a file with the default configuration.
///
/// Returns the signature suffixed with `:"<path>"`.
///
/// # Errors
///
/// Returns [`FuzzyError::FileNotFound`] or [`FuzzyError::PermissionDenied`]
/// when the path cannot be opened for reading, and [`FuzzyError::Io`] for
/// any other read failure.
pub fn hash_from_file(path: impl AsRef<Path>) -> Result<String, FuzzyError> {
    FuzzyHasher::default().digest_file(path)
}
