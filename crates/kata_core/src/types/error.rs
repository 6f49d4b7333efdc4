//! Error types for structured error handling.
//!
//! Every exercise is total over its documented domain. `KataError` names the
//! conditions reported when a caller steps outside that domain.

use thiserror::Error;

/// Invalid-argument conditions raised by the exercises.
///
/// # Variants
/// - `OutOfDomain`: Numeric input outside the supported range
/// - `NotSquare`: Matrix input is ragged or not square
/// - `Overflow`: Result does not fit the output integer type
/// - `InvalidInput`: General malformed input
///
/// # Examples
/// ```
/// use kata_core::types::KataError;
///
/// let err = KataError::OutOfDomain { value: 40, min: 1, max: 39 };
/// assert_eq!(format!("{}", err), "Value 40 outside supported domain [1, 39]");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KataError {
    /// Numeric input outside the supported range.
    #[error("Value {value} outside supported domain [{min}, {max}]")]
    OutOfDomain {
        /// The rejected value
        value: i64,
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },

    /// Matrix row length does not match the number of rows.
    #[error("Matrix is not square: row {row} has length {len}, expected {expected}")]
    NotSquare {
        /// Index of the offending row
        row: usize,
        /// Length of the offending row
        len: usize,
        /// Required row length (the number of rows)
        expected: usize,
    },

    /// Result does not fit the output integer type.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl KataError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an overflow error.
    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }
}
