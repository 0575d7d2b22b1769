//! Operation dispatcher.
//!
//! This module routes a decoded operation tag and two 64-bit operands
//! through the functional units and slices the selected unit's output into
//! the final result. It performs:
//! 1. **Unit Selection:** add-class, compare, and min/max tags to the adder;
//!    shift/rotate and single-bit tags to the barrel shifter; count tags to
//!    the counters; carry-less and permute tags to their units.
//! 2. **Operand Conditioning:** operand inversion for subtraction, constant
//!    pre-shifts for the shift-add family, zero/sign extension for word
//!    forms (constant shifts and extensions are fixed wiring, not units).
//! 3. **Logic Derivation:** bitwise logical operations from the adder's
//!    stage-0 propagate/generate pair instead of separate gates.
//!
//! Dispatch is total: the match is exhaustive with no wildcard arm, so every
//! tag has exactly one defined behavior and adding a tag is a compile-time
//! obligation.

use crate::common::bits;
use crate::common::constants::{BYTE_BITS, BYTE_LANES, WORD_MASK, XLEN};
use crate::core::signals::{AluOp, AluOut, ClmulSel, CountDir, ShiftDir, ShiftKind};
use crate::core::units::adder::Adder;
use crate::core::units::clmul::CarrylessMultiplier;
use crate::core::units::permute::Permuter;
use crate::core::units::popcount::PopulationCounter;
use crate::core::units::shifter::Shifter;
use crate::core::units::zerocount::ZeroCounter;

/// Arithmetic/logic unit dispatcher.
///
/// A pure, total function from operation tag, operands, and mode flag to the
/// 64-bit result and carry-out. Holds no state; distinct invocations are
/// fully independent.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes one ALU operation.
    ///
    /// `is32` selects the W-suffix form where the ISA defines one (`Add`,
    /// `Sub`, `Sll`, `Srl`, `Sra`, `Rol`, `Ror`, `Clz`, `Ctz`, `Cpop`,
    /// `Pack`); every other tag ignores the flag. `carry_out` in the result
    /// is the adder's top prefix bit and is reported as `false` by all
    /// non-adder-backed operations.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvalu_core::{Alu, AluOp};
    ///
    /// // 64-bit addition with carry-out.
    /// let out = Alu::execute(AluOp::Add, 5, 3, false);
    /// assert_eq!(out.result, 8);
    /// assert!(!out.carry_out);
    ///
    /// // Rotate right across the word boundary.
    /// let out = Alu::execute(AluOp::Ror, 0x8000_0000_0000_0001, 1, false);
    /// assert_eq!(out.result, 0xC000_0000_0000_0000);
    ///
    /// // Carry-less multiply: (x^2 + x) * (x^2 + 1) over GF(2).
    /// let out = Alu::execute(AluOp::Clmul, 0b110, 0b101, false);
    /// assert_eq!(out.result, 0b11110);
    ///
    /// // Word-mode addition sign-extends from bit 31.
    /// let out = Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1, true);
    /// assert_eq!(out.result, 0);
    /// ```
    pub fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> AluOut {
        match op {
            // Add-class: the parallel-prefix adder, with operand wiring.
            AluOp::Add => Self::add_sub(a, b, false, is32),
            AluOp::Sub => Self::add_sub(a, b, true, is32),
            AluOp::Sh1add => Self::shift_add(a, b, 1, false),
            AluOp::Sh2add => Self::shift_add(a, b, 2, false),
            AluOp::Sh3add => Self::shift_add(a, b, 3, false),
            AluOp::AddUw => Self::shift_add(a, b, 0, true),
            AluOp::Sh1addUw => Self::shift_add(a, b, 1, true),
            AluOp::Sh2addUw => Self::shift_add(a, b, 2, true),
            AluOp::Sh3addUw => Self::shift_add(a, b, 3, true),

            // Compare and min/max from the adder's borrow and operand signs.
            AluOp::Slt => Self::value(u64::from(Self::less_than(a, b, true))),
            AluOp::Sltu => Self::value(u64::from(Self::less_than(a, b, false))),
            AluOp::Min => Self::value(if Self::less_than(a, b, true) { a } else { b }),
            AluOp::Max => Self::value(if Self::less_than(a, b, true) { b } else { a }),
            AluOp::Minu => Self::value(if Self::less_than(a, b, false) { a } else { b }),
            AluOp::Maxu => Self::value(if Self::less_than(a, b, false) { b } else { a }),

            // Logic from the adder's stage-0 propagate/generate pair.
            AluOp::And => Self::value(Adder::<XLEN>::propagate_generate(a, b).1),
            AluOp::Xor => Self::value(Adder::<XLEN>::propagate_generate(a, b).0),
            AluOp::Or => {
                let (p, g) = Adder::<XLEN>::propagate_generate(a, b);
                Self::value(p | g)
            }
            AluOp::Andn => Self::value(Adder::<XLEN>::propagate_generate(a, !b).1),
            AluOp::Orn => {
                let (p, g) = Adder::<XLEN>::propagate_generate(a, !b);
                Self::value(p | g)
            }
            AluOp::Xnor => Self::value(!Adder::<XLEN>::propagate_generate(a, b).0),

            // Variable shifts and rotates: the barrel network.
            AluOp::Sll => Self::shift(a, b, ShiftKind::Logical, ShiftDir::Left, is32, false),
            AluOp::Srl => Self::shift(a, b, ShiftKind::Logical, ShiftDir::Right, is32, false),
            AluOp::Sra => Self::shift(a, b, ShiftKind::Arithmetic, ShiftDir::Right, is32, false),
            AluOp::Rol => Self::shift(a, b, ShiftKind::Rotate, ShiftDir::Left, is32, false),
            AluOp::Ror => Self::shift(a, b, ShiftKind::Rotate, ShiftDir::Right, is32, false),
            AluOp::SlliUw => Self::shift(a, b, ShiftKind::Logical, ShiftDir::Left, false, true),

            // Single-bit operations: one-hot mask built by the shifter.
            AluOp::Bclr => Self::value(a & !Self::one_hot(b)),
            AluOp::Binv => Self::value(a ^ Self::one_hot(b)),
            AluOp::Bset => Self::value(a | Self::one_hot(b)),
            AluOp::Bext => Self::value(
                Shifter::<XLEN>::shift(a, b, ShiftKind::Logical, ShiftDir::Right, false, false)
                    & 1,
            ),

            // Counters.
            AluOp::Clz => Self::value(ZeroCounter::<XLEN>::count(a, CountDir::Leading, is32)),
            AluOp::Ctz => Self::value(ZeroCounter::<XLEN>::count(a, CountDir::Trailing, is32)),
            AluOp::Cpop => Self::value(PopulationCounter::<XLEN>::count(a, is32)),

            // Carry-less multiply, three slices of one 128-bit product.
            AluOp::Clmul => Self::value(Self::carryless(a, b, ClmulSel::Low)),
            AluOp::Clmulh => Self::value(Self::carryless(a, b, ClmulSel::High)),
            AluOp::Clmulr => Self::value(Self::carryless(a, b, ClmulSel::Reversed)),

            // Lane crossbar.
            AluOp::Xperm4 => Self::value(Permuter::xperm4(a, b)),
            AluOp::Xperm8 => Self::value(Permuter::xperm8(a, b)),

            // Direct bit-slicing/concatenation; no sub-unit.
            AluOp::Pack => Self::value(if is32 {
                bits::sign_extend_word(((b & 0xFFFF) << 16) | (a & 0xFFFF))
            } else {
                ((b & WORD_MASK) << 32) | (a & WORD_MASK)
            }),
            AluOp::Packh => Self::value(((b & 0xFF) << 8) | (a & 0xFF)),
            AluOp::Rev8 => Self::value(Self::byte_reverse(a)),
            AluOp::Brev8 => Self::value(Self::bit_reverse_bytes(a)),
            AluOp::OrcB => Self::value(Self::or_combine_bytes(a)),
            AluOp::SextB => Self::value(bits::sign_extend_byte(a)),
            AluOp::SextH => Self::value(bits::sign_extend_half(a)),
            AluOp::ZextH => Self::value(bits::zero_extend_half(a)),
        }
    }

    /// Wraps a result with no meaningful carry.
    const fn value(result: u64) -> AluOut {
        AluOut {
            result,
            carry_out: false,
        }
    }

    /// Addition/subtraction through the prefix adder. Subtraction inverts
    /// the second operand and injects a carry-in; word forms sign-extend the
    /// low 32 bits of the full-width sum.
    fn add_sub(a: u64, b: u64, subtract: bool, is32: bool) -> AluOut {
        let operand_b = if subtract { !b } else { b };
        let (sum, carry_out) = Adder::<XLEN>::sum(a, operand_b, subtract);
        let result = if is32 { bits::sign_extend_word(sum) } else { sum };
        AluOut { result, carry_out }
    }

    /// Shift-add family (`sh[123]add[.uw]`, `add.uw`). The constant
    /// pre-shift and word zero-extension are operand wiring; the sum goes
    /// through the prefix adder.
    fn shift_add(a: u64, b: u64, left: u32, unsigned_word: bool) -> AluOut {
        let conditioned = if unsigned_word {
            bits::zero_extend_word(a)
        } else {
            a
        };
        let (sum, carry_out) = Adder::<XLEN>::sum(conditioned.wrapping_shl(left), b, false);
        AluOut { result: sum, carry_out }
    }

    /// Shifter call wrapped into the result record.
    fn shift(a: u64, b: u64, kind: ShiftKind, dir: ShiftDir, word: bool, uext: bool) -> AluOut {
        Self::value(Shifter::<XLEN>::shift(a, b, kind, dir, word, uext))
    }

    /// `a < b` via the adder: unsigned from the borrow (inverted carry-out
    /// of `a + !b + 1`); signed from the operand signs, falling back to the
    /// difference's sign when they agree.
    fn less_than(a: u64, b: u64, signed: bool) -> bool {
        let (difference, carry_out) = Adder::<XLEN>::sum(a, !b, true);
        if signed {
            let sign_a = (a >> (XLEN - 1)) & 1 == 1;
            let sign_b = (b >> (XLEN - 1)) & 1 == 1;
            if sign_a == sign_b {
                (difference >> (XLEN - 1)) & 1 == 1
            } else {
                sign_a
            }
        } else {
            !carry_out
        }
    }

    /// One-hot mask for the single-bit operations; the variable shift runs
    /// on the barrel network, which also masks the index to 6 bits.
    fn one_hot(index: u64) -> u64 {
        Shifter::<XLEN>::shift(1, index, ShiftKind::Logical, ShiftDir::Left, false, false)
    }

    /// Carry-less product slice selection.
    fn carryless(a: u64, b: u64, select: ClmulSel) -> u64 {
        let product = CarrylessMultiplier::product(a, b, XLEN);
        match select {
            ClmulSel::Low => product as u64,
            ClmulSel::High => (product >> XLEN) as u64,
            ClmulSel::Reversed => (product >> (XLEN - 1)) as u64,
        }
    }

    /// Byte-order reversal (`rev8`): lane `i` moves to lane `7 - i`.
    fn byte_reverse(value: u64) -> u64 {
        let mut out = 0u64;
        for lane in 0..BYTE_LANES {
            out |= bits::byte_lane(value, lane) << ((BYTE_LANES - 1 - lane) * BYTE_BITS);
        }
        out
    }

    /// Bit-order reversal within each byte lane (`brev8`).
    fn bit_reverse_bytes(value: u64) -> u64 {
        let mut out = 0u64;
        for lane in 0..BYTE_LANES {
            out |= bits::reverse(bits::byte_lane(value, lane), BYTE_BITS) << (lane * BYTE_BITS);
        }
        out
    }

    /// OR-combine within each byte lane (`orc.b`): nonzero lanes saturate to
    /// 0xFF.
    fn or_combine_bytes(value: u64) -> u64 {
        let mut out = 0u64;
        for lane in 0..BYTE_LANES {
            if bits::byte_lane(value, lane) != 0 {
                out |= 0xFF << (lane * BYTE_BITS);
            }
        }
        out
    }
}
