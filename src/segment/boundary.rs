//! Trigger evaluation and boundary detection.
//!
//! A position in the input is a segment boundary when the rolling-hash
//! trigger value at that position satisfies a modulus condition:
//!
//! - long resolution: `trigger % block_size == block_size - 1`
//! - short resolution: `trigger % (2 * block_size) == 2 * block_size - 1`
//!
//! The short condition arithmetically implies the long one, so every short
//! boundary is also a long boundary. Both conditions are still evaluated
//! independently at every position: the two resolutions keep separate
//! checksum accumulators and separate emission caps, and must never share
//! bookkeeping.
//!
//! Segments at a given resolution are the half-open ranges between
//! consecutive boundary positions, starting at 0, plus the trailing range
//! from the last boundary to end-of-input.

/// Reduces one trigger value against both resolution moduli.
///
/// Returns `(trigger % block_size, trigger % (2 * block_size))`, the pair
/// the boundary conditions are checked against.
#[inline]
pub fn trigger_pair(trigger: u32, block_size: u32) -> (u32, u32) {
    (trigger % block_size, trigger % (2 * block_size))
}

/// Returns true if `trigger` marks a boundary for the given modulus.
#[inline]
pub fn is_boundary(trigger: u32, modulus: u32) -> bool {
    trigger % modulus == modulus - 1
}

/// Collects boundary positions at both resolutions in one pass.
///
/// Positions index into the trigger array (equivalently, the input); a
/// position `p` in the result means the segment ending at byte `p`
/// inclusive. Used by the batch pipeline, which re-derives positions from
/// the same trigger array each time the block size halves.
pub fn boundaries(triggers: &[u32], block_size: u32) -> (Vec<usize>, Vec<usize>) {
    let short_modulus = 2 * block_size;
    let mut long = Vec::new();
    let mut short = Vec::new();

    for (pos, &trigger) in triggers.iter().enumerate() {
        let (long_rem, short_rem) = trigger_pair(trigger, block_size);
        if long_rem == block_size - 1 {
            long.push(pos);
        }
        if short_rem == short_modulus - 1 {
            short.push(pos);
        }
    }

    (long, short)
}
