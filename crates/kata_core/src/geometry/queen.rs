//! Queen attack check.

use crate::types::Position;

/// Returns `true` if a queen at `queen` attacks the square `king`.
///
/// The queen attacks along its column, its row, and both diagonals, where a
/// diagonal means equal absolute column and row distance. Blocking pieces
/// are not modelled.
///
/// # Examples
/// ```
/// use kata_core::geometry::can_queen_capture_king;
/// use kata_core::types::Position;
///
/// assert!(can_queen_capture_king(Position::new(1, 1), Position::new(5, 5)));
/// assert!(can_queen_capture_king(Position::new(2, 1), Position::new(2, 8)));
/// assert!(!can_queen_capture_king(Position::new(1, 1), Position::new(2, 8)));
/// ```
pub fn can_queen_capture_king(queen: Position, king: Position) -> bool {
    let (dx, dy) = queen.delta(&king);
    dx == 0 || dy == 0 || dx == dy
}
