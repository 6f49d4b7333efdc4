//! Square matrix construction and in-place rotation.
//!
//! ## Available Functions
//!
//! - [`get_spiral_matrix`]: Fill `1..=size²` in a clockwise spiral
//! - [`rotate_matrix`]: Rotate 90° clockwise in place, layer by layer
//!
//! Matrices use the row-major [`Grid`](crate::types::Grid) representation,
//! `matrix[row][col]`.
//!
//! ## Example
//!
//! ```
//! use kata_core::matrix::{get_spiral_matrix, rotate_matrix};
//!
//! let mut matrix = get_spiral_matrix(2);
//! assert_eq!(matrix, vec![vec![1, 2], vec![4, 3]]);
//!
//! rotate_matrix(&mut matrix).unwrap();
//! assert_eq!(matrix, vec![vec![4, 1], vec![3, 2]]);
//! ```

mod rotate;
mod spiral;

pub use rotate::rotate_matrix;
pub use spiral::get_spiral_matrix;
