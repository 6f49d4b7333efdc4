//! Chessboard and triangle checks.
//!
//! - [`can_queen_capture_king`]: Row, column and diagonal attack test
//! - [`is_isosceles_triangle`]: Triangle inequality followed by equal-side test

mod queen;
mod triangle;

pub use queen::can_queen_capture_king;
pub use triangle::is_isosceles_triangle;
