//! Streaming digest pipeline - the sequential reference implementation.
//!
//! The streaming strategy never materializes the input. It reads
//! fixed-size buffers and advances the rolling hash and both checksum
//! accumulators one byte at a time, emitting a symbol whenever a trigger
//! fires. Its scan is a small state machine:
//!
//! ```text
//! ESTIMATE -> SCAN -> (MAYBE_RETRY -> SCAN)* -> DONE
//! ```
//!
//! ESTIMATE guesses the block size from the source length. Each SCAN runs
//! the whole input. MAYBE_RETRY halves the block size and rescans from the
//! start while the long hash came out under half its target length and the
//! block size is above the floor; every rescan starts from fully reset
//! state. DONE flushes the trailing segment and assembles the signature.
//! Retries are why the source must be `Seek`.

use std::io::{Read, Seek, SeekFrom};

use tracing::debug;

use crate::blocksize::{MIN_BLOCK_SIZE, guess_block_size};
use crate::buffer::Buffer;
use crate::error::FuzzyError;
use crate::rolling::RollingHash;
use crate::segment::SegmentChecksum;
use crate::segment::boundary;
use crate::signature::Signature;
use crate::signature::encode::SymbolString;

use super::RETRY_THRESHOLD;

/// One streaming digest computation over a rewindable source.
///
/// Constructed fresh for every computation; consumed by
/// [`StreamingDigest::digest`].
pub(crate) struct StreamingDigest<R> {
    reader: R,
    buffer_size: usize,
}

impl<R: Read + Seek> StreamingDigest<R> {
    pub(crate) fn new(reader: R, buffer_size: usize) -> Self {
        Self {
            reader,
            buffer_size,
        }
    }

    /// Runs the state machine to completion and returns the signature.
    pub(crate) fn digest(mut self) -> Result<Signature, FuzzyError> {
        let len = self.reader.seek(SeekFrom::End(0))?;
        let mut block_size = guess_block_size(len);
        debug!(block_size, len, "estimated initial block size");

        let mut buf = Buffer::take(self.buffer_size);
        let mut roll = RollingHash::new();

        loop {
            self.reader.seek(SeekFrom::Start(0))?;
            roll.reset();
            let mut long_sum = SegmentChecksum::new();
            let mut short_sum = SegmentChecksum::new();
            let mut long = SymbolString::long();
            let mut short = SymbolString::short();
            let mut last_trigger = 0u32;

            loop {
                let n = self.reader.read(buf.as_mut_slice())?;
                if n == 0 {
                    break;
                }

                for &byte in &buf.as_slice()[..n] {
                    long_sum.update(byte);
                    short_sum.update(byte);
                    last_trigger = roll.update(byte);

                    if boundary::is_boundary(last_trigger, block_size) && !long.is_full() {
                        long.push(long_sum.emit());
                    }
                    if boundary::is_boundary(last_trigger, block_size * 2) && !short.is_full() {
                        short.push(short_sum.emit());
                    }
                }
            }

            if block_size > MIN_BLOCK_SIZE && long.len() < RETRY_THRESHOLD {
                block_size /= 2;
                debug!(block_size, "long hash too short, rescanning with halved block size");
                continue;
            }

            // Trailing segment: flushed only when the scan ended mid-context.
            if last_trigger != 0 {
                if !long.is_full() {
                    long.push(long_sum.value());
                }
                if !short.is_full() {
                    short.push(short_sum.value());
                }
            }

            return Ok(Signature::new(
                block_size,
                long.into_string(),
                short.into_string(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn stream_digest(data: &[u8]) -> Signature {
        StreamingDigest::new(Cursor::new(data), 64)
            .digest()
            .unwrap()
    }

    #[test]
    fn test_quick_fox_golden() {
        let sig = stream_digest(b"The quick brown fox jumps over the lazy dog");
        assert_eq!(sig.to_string(), "3:FJKKIUKact:FHIGi");
    }

    #[test]
    fn test_locality_golden() {
        // One changed byte perturbs only a localized region of the digest.
        let sig = stream_digest(b"The quick brown fox jumps over the lazy hog");
        assert_eq!(sig.to_string(), "3:FJKKIUKacp:FHIGu");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(stream_digest(b"").to_string(), "3::");
    }

    #[test]
    fn test_buffer_size_does_not_change_signature() {
        let data: Vec<u8> = (0..5000).map(|i| (i * 31 % 251) as u8).collect();

        let reference = stream_digest(&data);
        for buffer_size in [1usize, 7, 64, 8096, 1 << 16] {
            let sig = StreamingDigest::new(Cursor::new(&data[..]), buffer_size)
                .digest()
                .unwrap();
            assert_eq!(sig, reference, "buffer size {} diverged", buffer_size);
        }
    }

    #[test]
    fn test_matches_batch_pipeline() {
        for len in [0usize, 1, 7, 43, 64, 193, 500, 2048, 10_000] {
            let data: Vec<u8> = (0..len).map(|i| (i * 7 + 13) as u8).collect();
            assert_eq!(
                stream_digest(&data),
                super::super::batch::digest(&data),
                "pipelines diverged at len {}",
                len
            );
        }
    }

    #[test]
    fn test_retry_resets_all_state() {
        // Inputs that force at least one halving must still agree with the
        // batch pipeline, which shares no scan state across retries.
        let data: Vec<u8> = (0..1000).map(|i| (i * 89 % 256) as u8).collect();
        let sig = stream_digest(&data);
        assert_eq!(sig, super::super::batch::digest(&data));
        assert!(sig.block_size() <= guess_block_size(data.len() as u64));
    }
}
