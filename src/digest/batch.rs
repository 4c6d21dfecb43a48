//! Batch digest pipeline - vectorized over a materialized input.
//!
//! The batch strategy front-loads all per-byte work: one pass computes the
//! full rolling-hash trigger array, and everything after that operates on
//! positions. Triggers do not depend on the block size, so the halving
//! retry loop re-derives boundary positions from the same array instead of
//! rescanning the input.

use tracing::debug;

use crate::blocksize::{MIN_BLOCK_SIZE, guess_block_size};
use crate::rolling::RollingHash;
use crate::segment::SegmentChecksum;
use crate::segment::boundary;
use crate::signature::Signature;
use crate::signature::encode::SymbolString;

use super::RETRY_THRESHOLD;

/// Digests a fully materialized byte sequence.
pub(crate) fn digest(data: &[u8]) -> Signature {
    let triggers = RollingHash::hash_sequence(data);
    let last_trigger = triggers.last().copied().unwrap_or(0);

    let mut block_size = guess_block_size(data.len() as u64);
    debug!(block_size, len = data.len(), "estimated initial block size");

    loop {
        let (long_positions, short_positions) = boundary::boundaries(&triggers, block_size);

        let (mut long, long_tail) = encode_positions(data, &long_positions, SymbolString::long());
        if block_size > MIN_BLOCK_SIZE && long.len() < RETRY_THRESHOLD {
            block_size /= 2;
            debug!(block_size, "long hash too short, halving block size");
            continue;
        }

        let (mut short, short_tail) =
            encode_positions(data, &short_positions, SymbolString::short());

        // Trailing segment: everything after the last emitted boundary, at
        // each resolution, flushed only when the scan ended mid-context.
        if last_trigger != 0 {
            if !long.is_full() {
                long.push(SegmentChecksum::of(&data[long_tail..]));
            }
            if !short.is_full() {
                short.push(SegmentChecksum::of(&data[short_tail..]));
            }
        }

        return Signature::new(block_size, long.into_string(), short.into_string());
    }
}

/// Emits one symbol per boundary position until the cap is reached.
///
/// Returns the symbol string and the start of the residual range, i.e. the
/// byte after the last boundary whose symbol was actually emitted. Once
/// the cap is hit the residual start stops advancing, so the trailing
/// segment absorbs everything the cap cut off.
fn encode_positions(
    data: &[u8],
    positions: &[usize],
    mut out: SymbolString,
) -> (SymbolString, usize) {
    let mut start = 0;
    for &pos in positions {
        if out.is_full() {
            break;
        }
        out.push(SegmentChecksum::of(&data[start..=pos]));
        start = pos + 1;
    }
    (out, start)
}
