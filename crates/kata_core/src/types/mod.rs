//! Shared error and coordinate types.
//!
//! This module provides:
//! - `error`: Structured error type for out-of-domain exercise input
//! - `position`: Board coordinates for the chess exercise
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`KataError`] from `error`
//! - [`Position`] from `position`
//! - [`Grid`]: row-major square matrix representation

pub mod error;
pub mod position;

pub use error::KataError;
pub use position::Position;

/// Row-major two-dimensional grid, `grid[row][col]`.
///
/// Matrix exercises expect every row to have the same length as the
/// number of rows.
pub type Grid<T> = Vec<Vec<T>>;
