//! Board coordinates.

/// A square on a chessboard, addressed by integer column `x` and row `y`.
///
/// Coordinates are not bounded to an 8x8 board; the capture check only
/// compares deltas.
///
/// # Examples
/// ```
/// use kata_core::types::Position;
///
/// let queen = Position::new(1, 1);
/// assert_eq!(queen.x, 1);
/// assert_eq!(Position::from((2, 8)), Position { x: 2, y: 8 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Position {
    /// Create a position from its coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Absolute column and row distance to `other`.
    #[inline]
    pub fn delta(&self, other: &Position) -> (u32, u32) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_is_symmetric() {
        let a = Position::new(1, 7);
        let b = Position::new(4, 2);
        assert_eq!(a.delta(&b), (3, 5));
        assert_eq!(b.delta(&a), (3, 5));
    }

    #[test]
    fn test_delta_extreme_coordinates() {
        let a = Position::new(i32::MIN, 0);
        let b = Position::new(i32::MAX, 0);
        assert_eq!(a.delta(&b), (u32::MAX, 0));
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Position::from((3, -2)), Position::new(3, -2));
    }
}
