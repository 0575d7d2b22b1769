//! Bit-exact combinational model of a 64-bit RISC-V bit-manipulation ALU.
//!
//! This crate is a clockless golden reference for the arithmetic/logic unit of
//! an RV64 core with the Zba/Zbb/Zbc/Zbs/Zbkb/Zbkx operation families. Every
//! operation is a pure function of its operands, and the wide datapaths are
//! modeled with the same structural decomposition the hardware uses:
//! 1. **Adder:** Kogge-Stone parallel-prefix carry propagation (O(log W) depth).
//! 2. **Shifter:** barrel network with reverse-based left/right unification.
//! 3. **Counters:** summation-tree population count, two-level priority-encoded
//!    leading/trailing zero count.
//! 4. **Carry-less multiplier:** Karatsuba recursion over an 8x8 bit-matrix
//!    base case.
//! 5. **Permuter:** byte/nibble lane crossbar.
//!
//! The [`crate::core::alu::Alu`] dispatcher unifies the units into the ALU's
//! full operation set; [`vectors`] exchanges golden stimulus/response records
//! with an RTL testbench.

/// Common types, constants, and bit-slicing helpers.
pub mod common;
/// ALU core (operation signals, functional units, dispatcher).
pub mod core;
/// Golden test-vector records and JSON exchange.
pub mod vectors;

/// Main dispatcher type; evaluate operations with [`Alu::execute`].
pub use crate::core::alu::Alu;
/// Operation selector for [`Alu::execute`].
pub use crate::core::signals::AluOp;
/// Result record produced by [`Alu::execute`].
pub use crate::core::signals::AluOut;
