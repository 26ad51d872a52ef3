//! Error types for string construction, mutation, and slicing.
//!
//! Every fallible operation in this crate returns [`Error`] to its immediate
//! caller; nothing panics on a recoverable condition and a failed operation
//! never commits a partial mutation. Destruction is infallible and tolerates
//! already-empty handles, so it has no error representation at all.
//!
//! The language-neutral contract this crate implements also names a
//! "null handle" error. That case is unrepresentable here: operations take
//! references, which cannot be null, so the variant does not exist.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors produced by [`ZString`](crate::ZString) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying allocator could not satisfy a buffer request.
    ///
    /// The string (if one already existed) is left in its prior valid state:
    /// content, length, and capacity are unchanged.
    #[error("buffer allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// Slice bounds were empty or out of range for the source string.
    ///
    /// A slice must satisfy `start < len`, `end <= len`, and `start < end`.
    #[error("invalid slice range {start}..{end} for string of length {len}")]
    Range {
        /// Requested start offset (inclusive).
        start: usize,
        /// Requested end offset (exclusive).
        end: usize,
        /// Content length of the source string at the time of the request.
        len: usize,
    },
}
