//! Error types for the vector-file boundary.
//!
//! The ALU core itself is total: every operand/mode combination maps to a
//! defined output, so no unit returns a `Result`. The only fallible surface
//! is the golden-vector exchange in [`crate::vectors`], whose failures are
//! collected here.

use thiserror::Error;

/// Errors produced while loading, saving, or replaying golden vectors.
#[derive(Debug, Error)]
pub enum VectorError {
    /// The vector file could not be read or written.
    #[error("vector file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The vector file is not valid JSON or does not match the record shape.
    #[error("malformed vector file: {0}")]
    Format(#[from] serde_json::Error),

    /// A replayed vector disagreed with the model.
    #[error(
        "vector {index}: model produced {actual:#018x} (carry {actual_carry}), \
         file expects {expected:#018x} (carry {expected_carry})"
    )]
    Mismatch {
        /// Zero-based index of the failing record in the file.
        index: usize,
        /// Result the record expects.
        expected: u64,
        /// Carry-out flag the record expects.
        expected_carry: bool,
        /// Result the model produced.
        actual: u64,
        /// Carry-out flag the model produced.
        actual_carry: bool,
    },
}
