//! Unit tests for the ALU core.
//!
//! Organized like the source: one suite for the dispatcher's operation
//! semantics, one suite per functional unit.


/// Per-unit structural tests.
pub mod units;
