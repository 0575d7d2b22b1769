//! Structural functional units of the ALU datapath.
//!
//! Each unit models the combinational block the hardware instantiates, with
//! the same decomposition (prefix stages, barrel stages, summation tree,
//! Karatsuba recursion, lane crossbar) rather than native machine arithmetic.
//! Units are pure: no state, no side effects, data-independent control flow.

/// Parallel-prefix (Kogge-Stone) adder/subtractor.
pub mod adder;

/// Carry-less multiplier (bit-matrix base case + Karatsuba recursion).
pub mod clmul;

/// Byte/nibble lane crossbar permuter.
pub mod permute;

/// Summation-tree population counter.
pub mod popcount;

/// Barrel shifter (logical/arithmetic/rotate, both directions).
pub mod shifter;

/// Two-level priority-encoded leading/trailing zero counter.
pub mod zerocount;
