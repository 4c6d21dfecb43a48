//! The Signature type - a finished fuzzy digest.

use std::fmt;
use std::path::Path;

/// A similarity-preserving fuzzy digest.
///
/// A signature is the triple of the final block size and the two
/// resolution-specific hash strings. Its `Display` form is the wire format
/// `"<blocksize>:<long_hash>:<short_hash>"`.
///
/// # Example
///
/// ```
/// use fuzzysum::hash;
///
/// let sig = hash("The quick brown fox jumps over the lazy dog");
/// assert_eq!(sig.to_string(), "3:FJKKIUKact:FHIGi");
/// assert_eq!(sig.block_size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    block_size: u32,
    long: String,
    short: String,
}

impl Signature {
    pub(crate) fn new(block_size: u32, long: String, short: String) -> Self {
        Self {
            block_size,
            long,
            short,
        }
    }

    /// Returns the block size the digest settled on.
    ///
    /// Always at least 3 and a power-of-two multiple of 3; smaller than the
    /// initial estimate when the halving retry loop fired.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Returns the long-resolution hash string (at most 63 symbols).
    pub fn long_hash(&self) -> &str {
        &self.long
    }

    /// Returns the short-resolution hash string (at most 31 symbols).
    pub fn short_hash(&self) -> &str {
        &self.short
    }

    /// Splits the signature into its parts.
    pub fn into_parts(self) -> (u32, String, String) {
        (self.block_size, self.long, self.short)
    }

    /// Renders the file-hashing wire format: the signature followed by
    /// `:"<path>"`. The quotes keep the path out of the colon-delimited
    /// field structure.
    pub fn with_path(&self, path: &Path) -> String {
        format!("{}:\"{}\"", self, path.display())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.block_size, self.long, self.short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let sig = Signature::new(3, "FJKKIUKact".into(), "FHIGi".into());
        assert_eq!(sig.to_string(), "3:FJKKIUKact:FHIGi");
    }

    #[test]
    fn test_empty_hashes_keep_field_structure() {
        let sig = Signature::new(3, String::new(), String::new());
        assert_eq!(sig.to_string(), "3::");
        assert_eq!(sig.to_string().matches(':').count(), 2);
    }

    #[test]
    fn test_accessors() {
        let sig = Signature::new(6, "abc".into(), "xy".into());
        assert_eq!(sig.block_size(), 6);
        assert_eq!(sig.long_hash(), "abc");
        assert_eq!(sig.short_hash(), "xy");

        let (block_size, long, short) = sig.into_parts();
        assert_eq!((block_size, long.as_str(), short.as_str()), (6, "abc", "xy"));
    }

    #[test]
    fn test_with_path_quoting() {
        let sig = Signature::new(3, "abc".into(), "xy".into());
        let rendered = sig.with_path(Path::new("/tmp/data.bin"));
        assert_eq!(rendered, "3:abc:xy:\"/tmp/data.bin\"");
    }
}
