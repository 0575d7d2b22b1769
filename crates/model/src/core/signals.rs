//! Operation tags and unit control signals.
//!
//! This module defines the closed operation enumeration dispatched by the
//! ALU, the sub-selector enums consumed by individual units, and the result
//! record. It provides:
//! 1. **Operation Tags:** every arithmetic, logical, shift/rotate, compare,
//!    min/max, single-bit, count, carry-less-multiply, permute, pack, and
//!    extend operation the ALU implements.
//! 2. **Sub-selectors:** shift kind/direction, count direction, and the
//!    carry-less product slice, derived from the tag by the dispatcher.
//! 3. **Results:** the 64-bit result plus the adder's carry-out bit.
//!
//! W-suffix (32-bit) forms are selected by the `is32` flag on
//! [`Alu::execute`](crate::core::alu::Alu::execute), not by separate tags.

use serde::{Deserialize, Serialize};

/// ALU operation selector.
///
/// The enumeration is closed and the dispatcher matches it exhaustively, so
/// adding an operation is a compile-time-checked obligation. Tags whose
/// RISC-V instruction has a W-suffix form honor the `is32` mode flag; the
/// remaining tags ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AluOp {
    /// Integer addition (`add`/`addw`).
    Add,

    /// Integer subtraction (`sub`/`subw`).
    Sub,

    /// Shift left logical (`sll`/`sllw`).
    Sll,

    /// Set less than, signed (`slt`).
    Slt,

    /// Set less than, unsigned (`sltu`).
    Sltu,

    /// Bitwise XOR (`xor`).
    Xor,

    /// Shift right logical (`srl`/`srlw`).
    Srl,

    /// Shift right arithmetic (`sra`/`sraw`).
    Sra,

    /// Bitwise OR (`or`).
    Or,

    /// Bitwise AND (`and`).
    And,

    /// AND with inverted second operand (`andn`).
    Andn,

    /// OR with inverted second operand (`orn`).
    Orn,

    /// Exclusive NOR (`xnor`).
    Xnor,

    /// Rotate left (`rol`/`rolw`).
    Rol,

    /// Rotate right (`ror`/`rorw`).
    Ror,

    /// Shift-by-1 and add (`sh1add`).
    Sh1add,

    /// Shift-by-2 and add (`sh2add`).
    Sh2add,

    /// Shift-by-3 and add (`sh3add`).
    Sh3add,

    /// Add unsigned word: zero-extended low word of `a` plus `b` (`add.uw`).
    AddUw,

    /// Shift-by-1 unsigned word and add (`sh1add.uw`).
    Sh1addUw,

    /// Shift-by-2 unsigned word and add (`sh2add.uw`).
    Sh2addUw,

    /// Shift-by-3 unsigned word and add (`sh3add.uw`).
    Sh3addUw,

    /// Shift left the zero-extended low word (`slli.uw`).
    SlliUw,

    /// Minimum, signed (`min`).
    Min,

    /// Minimum, unsigned (`minu`).
    Minu,

    /// Maximum, signed (`max`).
    Max,

    /// Maximum, unsigned (`maxu`).
    Maxu,

    /// Clear the single bit indexed by `b` (`bclr`).
    Bclr,

    /// Extract the single bit indexed by `b` (`bext`).
    Bext,

    /// Invert the single bit indexed by `b` (`binv`).
    Binv,

    /// Set the single bit indexed by `b` (`bset`).
    Bset,

    /// Count leading zeros (`clz`/`clzw`).
    Clz,

    /// Count trailing zeros (`ctz`/`ctzw`).
    Ctz,

    /// Count set bits (`cpop`/`cpopw`).
    Cpop,

    /// Carry-less multiply, low half of the product (`clmul`).
    Clmul,

    /// Carry-less multiply, high half of the product (`clmulh`).
    Clmulh,

    /// Carry-less multiply, reversed: product bits 126:63 (`clmulr`).
    Clmulr,

    /// Nibble-lane crossbar permutation (`xperm4`).
    Xperm4,

    /// Byte-lane crossbar permutation (`xperm8`).
    Xperm8,

    /// Pack the low halves of both operands (`pack`/`packw`).
    Pack,

    /// Pack the low bytes of both operands (`packh`).
    Packh,

    /// Reverse the byte order (`rev8`).
    Rev8,

    /// Reverse the bit order within each byte (`brev8`).
    Brev8,

    /// OR-combine within each byte: 0xFF where the byte is nonzero (`orc.b`).
    OrcB,

    /// Sign-extend the low byte (`sext.b`).
    SextB,

    /// Sign-extend the low half-word (`sext.h`).
    SextH,

    /// Zero-extend the low half-word (`zext.h`).
    ZextH,
}

/// Shift kind consumed by the barrel shifter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftKind {
    /// Vacated bits fill with zero.
    Logical,

    /// Vacated bits fill with the sign bit.
    Arithmetic,

    /// Vacated bits wrap around from the opposite end.
    Rotate,
}

/// Shift direction consumed by the barrel shifter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftDir {
    /// Shift toward the most significant bit.
    Left,

    /// Shift toward the least significant bit.
    Right,
}

/// Zero-count direction consumed by the zero counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountDir {
    /// Count zeros from the most significant bit downward.
    Leading,

    /// Count zeros from the least significant bit upward.
    Trailing,
}

/// Slice of the 128-bit carry-less product returned to the datapath.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClmulSel {
    /// Product bits 63:0.
    Low,

    /// Product bits 127:64.
    High,

    /// Product bits 126:63.
    Reversed,
}

/// Result record produced by the dispatcher.
///
/// `carry_out` is the adder's 65th prefix bit and is meaningful only for
/// adder-backed tags (add/sub and the shift-add family); every other
/// operation reports `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOut {
    /// 64-bit operation result.
    pub result: u64,
    /// Carry out of bit 63 for adder-backed operations.
    pub carry_out: bool,
}
