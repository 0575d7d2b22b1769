//! Two-level priority-encoded leading/trailing zero counter.
//!
//! The native operation is a trailing-zero count; a leading count reverses
//! the operand first. The conditioned value is split into 8-bit groups:
//! 1. **Leaf level:** a priority encoder per group reports the index of its
//!    lowest set bit, with a separate validity bit (group is nonzero).
//! 2. **Group level:** a priority encoder over the validity vector picks the
//!    first nonzero group; its index forms the count's upper bits and
//!    selects the matching leaf index for the lower three.
//!
//! If no group is valid, the count is the active width (the top bit of the
//! `log2(W) + 1`-bit internal result, forced). Word mode selects the low
//! half and forces the unused half to all-ones, so it can never contribute a
//! spurious first set bit while an all-zero low half still stops the count
//! at exactly `W / 2`.

use crate::common::bits::{ones, reverse};
use crate::core::signals::CountDir;

/// Leaf priority encoder: index of the lowest set bit in an 8-bit group.
#[derive(Debug)]
pub struct PriorityEncoder8;

impl PriorityEncoder8 {
    /// Returns the index (0-7) of the lowest set bit of `bits`.
    ///
    /// An all-zero input returns 0; callers must consult a separate validity
    /// signal to distinguish "lowest set bit at 0" from "no set bit". The
    /// scan is a fixed-length select chain (high position examined first,
    /// lower positions override), so the trip count never depends on the
    /// operand.
    pub fn first_set(bits: u8) -> u8 {
        let mut index = 0;
        let mut position = 8u8;
        while position > 0 {
            position -= 1;
            if (bits >> position) & 1 == 1 {
                index = position;
            }
        }
        index
    }
}

/// Leading/trailing zero counter over `W` bits.
///
/// `W` must be a power of two in `8..=64` (checked at compile time) so the
/// value splits into whole 8-bit groups.
#[derive(Debug)]
pub struct ZeroCounter<const W: usize>;

impl<const W: usize> ZeroCounter<W> {
    /// Counts leading or trailing zeros of the active portion of `value`,
    /// zero-extended to 64 bits.
    ///
    /// An all-zero active portion yields the active width (`W`, or `W / 2`
    /// in word mode).
    pub fn count(value: u64, direction: CountDir, word: bool) -> u64 {
        const {
            assert!(
                W.is_power_of_two() && W >= 8 && W <= 64,
                "zero counter width must be a power of two in 8..=64"
            );
        }
        let half = W / 2;

        // Condition to a trailing-count problem: reverse for leading counts,
        // select the low half and ones-fill the rest in word mode.
        let v = if word {
            let lo = value & ones(half);
            let lo = match direction {
                CountDir::Leading => reverse(lo, half),
                CountDir::Trailing => lo,
            };
            lo | (ones(W - half) << half)
        } else {
            let active = value & ones(W);
            match direction {
                CountDir::Leading => reverse(active, W),
                CountDir::Trailing => active,
            }
        };

        let groups = W / 8;
        let mut leaf_index = [0u8; 8];
        let mut validity = 0u8;
        for group in 0..groups {
            let bits = ((v >> (group * 8)) & 0xFF) as u8;
            leaf_index[group] = PriorityEncoder8::first_set(bits);
            if bits != 0 {
                validity |= 1 << group;
            }
        }

        if validity == 0 {
            // All-zero operand: count equals the width, i.e. the forced top
            // bit of the internal result with zero low bits.
            W as u64
        } else {
            let first_group = PriorityEncoder8::first_set(validity) as usize;
            ((first_group as u64) << 3) | u64::from(leaf_index[first_group])
        }
    }
}
