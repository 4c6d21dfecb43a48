//! Configuration for digest generation.
//!
//! - [`DigestConfig`] - Controls the streaming pipeline's read-buffer size
//!
//! # Example
//!
//! ```
//! use fuzzysum::DigestConfig;
//!
//! // Custom buffer size
//! let config = DigestConfig::new(64 * 1024)?;
//!
//! # Ok::<(), fuzzysum::FuzzyError>(())
//! ```

use crate::error::FuzzyError;

/// Default read-buffer size for the streaming pipeline.
pub const DEFAULT_BUFFER_SIZE: usize = 8096;

/// Configuration for digest generation.
///
/// The digest algorithm itself is fully determined (block sizes, emission
/// caps, and the symbol alphabet are fixed by the signature format); the
/// configuration only tunes how the streaming pipeline reads its input.
/// The buffer size has no effect on the resulting signature.
///
/// # Example
///
/// ```
/// use fuzzysum::DigestConfig;
///
/// // Use default configuration
/// let config = DigestConfig::default();
///
/// // Builder pattern
/// let config = DigestConfig::default().with_buffer_size(64 * 1024);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigestConfig {
    /// Read-buffer size in bytes for streaming scans.
    buffer_size: usize,
}

impl DigestConfig {
    /// Creates a new configuration with the given read-buffer size.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidConfig`] if `buffer_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use fuzzysum::DigestConfig;
    ///
    /// let config = DigestConfig::new(4096)?;
    /// assert_eq!(config.buffer_size(), 4096);
    /// # Ok::<(), fuzzysum::FuzzyError>(())
    /// ```
    pub fn new(buffer_size: usize) -> Result<Self, FuzzyError> {
        if buffer_size == 0 {
            return Err(FuzzyError::InvalidConfig {
                message: "buffer size must be non-zero",
            });
        }

        Ok(Self { buffer_size })
    }

    /// Sets the read-buffer size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`DigestConfig::validate`] to check if the configuration is valid.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Returns the read-buffer size.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), FuzzyError> {
        Self::new(self.buffer_size).map(|_| ())
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}
