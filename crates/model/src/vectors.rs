//! Golden test-vector records and JSON exchange.
//!
//! A verification flow checks the RTL against this model by exchanging
//! stimulus/response records. This module provides:
//! 1. **Records:** one operation, its operands and mode flag, and the
//!    expected result/carry pair.
//! 2. **Exchange:** JSON load/save of record files.
//! 3. **Replay:** re-evaluation of a record set against the model, stopping
//!    at the first disagreement.
//!
//! This is the crate's only I/O surface; the core units never touch a file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::common::error::VectorError;
use crate::core::alu::Alu;
use crate::core::signals::{AluOp, AluOut};

/// One golden stimulus/response record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVector {
    /// Operation under test.
    pub op: AluOp,
    /// First operand.
    pub a: u64,
    /// Second operand (also the shift amount or index vector).
    pub b: u64,
    /// W-suffix (32-bit) form selector.
    #[serde(default)]
    pub is32: bool,
    /// Expected 64-bit result.
    pub result: u64,
    /// Expected carry-out (adder-backed operations only).
    #[serde(default)]
    pub carry_out: bool,
}

impl TestVector {
    /// Builds a record by evaluating the model on the given stimulus.
    ///
    /// Used when emitting golden files for an RTL testbench to check
    /// against.
    pub fn capture(op: AluOp, a: u64, b: u64, is32: bool) -> Self {
        let out = Alu::execute(op, a, b, is32);
        Self {
            op,
            a,
            b,
            is32,
            result: out.result,
            carry_out: out.carry_out,
        }
    }

    /// Re-evaluates the model on this record's stimulus.
    pub fn replay(&self) -> AluOut {
        Alu::execute(self.op, self.a, self.b, self.is32)
    }

    /// Whether the model agrees with the recorded response.
    pub fn passes(&self) -> bool {
        let out = self.replay();
        out.result == self.result && out.carry_out == self.carry_out
    }
}

/// Loads a golden-vector file.
///
/// # Errors
///
/// Returns [`VectorError::Io`] if the file cannot be read and
/// [`VectorError::Format`] if it is not a JSON array of records.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<TestVector>, VectorError> {
    let raw = fs::read_to_string(path)?;
    let vectors: Vec<TestVector> = serde_json::from_str(&raw)?;
    debug!(count = vectors.len(), "loaded golden vectors");
    Ok(vectors)
}

/// Saves a golden-vector file as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`VectorError::Io`] if the file cannot be written.
pub fn save<P: AsRef<Path>>(path: P, vectors: &[TestVector]) -> Result<(), VectorError> {
    let raw = serde_json::to_string_pretty(vectors)?;
    fs::write(path, raw)?;
    debug!(count = vectors.len(), "saved golden vectors");
    Ok(())
}

/// Replays every record against the model.
///
/// # Errors
///
/// Returns [`VectorError::Mismatch`] for the first record whose recorded
/// response disagrees with the model.
pub fn replay_all(vectors: &[TestVector]) -> Result<(), VectorError> {
    for (index, vector) in vectors.iter().enumerate() {
        let out = vector.replay();
        if out.result != vector.result || out.carry_out != vector.carry_out {
            trace!(index, op = ?vector.op, "golden vector mismatch");
            return Err(VectorError::Mismatch {
                index,
                expected: vector.result,
                expected_carry: vector.carry_out,
                actual: out.result,
                actual_carry: out.carry_out,
            });
        }
    }
    Ok(())
}
