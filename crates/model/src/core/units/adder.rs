//! Parallel-prefix (Kogge-Stone) adder/subtractor.
//!
//! Computes `a + b + carry_in` over `W` bits together with the carry out of
//! the top bit. The carry chain is resolved with a Kogge-Stone prefix
//! network: per-bit generate/propagate pairs are combined over doubling
//! distances, so every carry is known after `ceil(log2(W + 1))` dependent
//! stages instead of the `W` stages of a ripple chain. That O(log W) depth is
//! the reason this unit exists in place of a native `+`.
//!
//! Subtraction is addition of the inverted second operand with
//! `carry_in = 1`; the dispatcher owns the inversion.

use crate::common::bits::ones;

/// Parallel-prefix adder over `W` bits.
///
/// `W` must be a power of two no greater than 64 (checked at compile time);
/// the prefix network runs over `W + 1` positions so the carry-in occupies
/// bit 0 and the carry-out falls out as prefix bit `W`.
#[derive(Debug)]
pub struct Adder<const W: usize>;

impl<const W: usize> Adder<W> {
    /// Returns `(a + b + carry_in) mod 2^W` and the carry out of bit `W - 1`.
    ///
    /// Operand bits at or above `W` are ignored.
    pub fn sum(a: u64, b: u64, carry_in: bool) -> (u64, bool) {
        const {
            assert!(W.is_power_of_two() && W <= 64, "adder width must be a power of two <= 64");
        }
        let carry = u128::from(carry_in);

        // (W+1)-bit working vectors: carry-in prepended as bit 0 of both
        // operands, so stage 0 generates it (cin & cin) without a special
        // injection port.
        let x = (u128::from(a & ones(W)) << 1) | carry;
        let y = (u128::from(b & ones(W)) << 1) | carry;

        let p0 = x ^ y;
        let mut generate = x & y;
        let mut propagate = p0;

        // Prefix combine over doubling distances. Positions below the current
        // distance are already final; ORing a zero-shifted-in generate and
        // ANDing a ones-filled propagate leaves them unchanged, which is the
        // "copy" half of each stage.
        let mut distance = 1;
        while distance <= W {
            generate |= propagate & (generate << distance);
            propagate &= (propagate << distance) | ((1u128 << distance) - 1);
            distance <<= 1;
        }

        // Sum bit k is p0[k] xor the carry into k, i.e. the prefix generate
        // one position below.
        let sum = p0 ^ (generate << 1);
        let result = ((sum >> 1) as u64) & ones(W);
        let carry_out = (generate >> W) & 1 == 1;
        (result, carry_out)
    }

    /// Stage-0 propagate/generate pair over the active `W` bits.
    ///
    /// `propagate = a ^ b` and `generate = a & b` are the adder's first
    /// stage; the dispatcher derives the bitwise logical operations from
    /// these instead of instantiating separate gates.
    pub fn propagate_generate(a: u64, b: u64) -> (u64, u64) {
        const {
            assert!(W.is_power_of_two() && W <= 64, "adder width must be a power of two <= 64");
        }
        let a = a & ones(W);
        let b = b & ones(W);
        (a ^ b, a & b)
    }
}
