//! Clockwise spiral generation.

use crate::types::Grid;
use tracing::trace;

/// Row/column steps in clockwise order: right, down, left, up.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Unfilled marker; every written value is at least 1.
const EMPTY: u64 = 0;

/// The neighbouring cell in `direction`, if it lies inside the grid.
fn step(size: usize, row: usize, col: usize, direction: usize) -> Option<(usize, usize)> {
    let (dr, dc) = DIRECTIONS[direction];
    let next_row = row.checked_add_signed(dr)?;
    let next_col = col.checked_add_signed(dc)?;
    (next_row < size && next_col < size).then_some((next_row, next_col))
}

/// Generates a `size` x `size` matrix filled with `1..=size²` in a
/// clockwise spiral.
///
/// Filling starts at the top-left corner heading right. Whenever the next
/// cell would leave the grid or is already filled, the heading turns
/// clockwise (right, down, left, up).
///
/// A `size` of zero yields an empty matrix.
///
/// # Examples
/// ```
/// use kata_core::matrix::get_spiral_matrix;
///
/// assert_eq!(
///     get_spiral_matrix(4),
///     vec![
///         vec![1, 2, 3, 4],
///         vec![12, 13, 14, 5],
///         vec![11, 16, 15, 6],
///         vec![10, 9, 8, 7],
///     ]
/// );
/// ```
pub fn get_spiral_matrix(size: usize) -> Grid<u64> {
    let mut matrix = vec![vec![EMPTY; size]; size];
    let total = (size as u64) * (size as u64);

    let (mut row, mut col) = (0, 0);
    let mut direction = 0;

    for value in 1..=total {
        matrix[row][col] = value;
        if value == total {
            break;
        }

        let next = match step(size, row, col, direction) {
            Some((r, c)) if matrix[r][c] == EMPTY => Some((r, c)),
            _ => {
                direction = (direction + 1) % DIRECTIONS.len();
                trace!(value, direction, "spiral turn");
                step(size, row, col, direction)
            }
        };

        match next {
            Some((r, c)) => {
                row = r;
                col = c;
            }
            None => break,
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_three() {
        assert_eq!(
            get_spiral_matrix(3),
            vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]
        );
    }

    #[test]
    fn test_size_four() {
        assert_eq!(
            get_spiral_matrix(4),
            vec![
                vec![1, 2, 3, 4],
                vec![12, 13, 14, 5],
                vec![11, 16, 15, 6],
                vec![10, 9, 8, 7],
            ]
        );
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(get_spiral_matrix(0).is_empty());
        assert_eq!(get_spiral_matrix(1), vec![vec![1]]);
        assert_eq!(get_spiral_matrix(2), vec![vec![1, 2], vec![4, 3]]);
    }

    #[test]
    fn test_every_value_once() {
        for size in 1..12 {
            let matrix = get_spiral_matrix(size);
            let mut values: Vec<u64> = matrix.into_iter().flatten().collect();
            values.sort_unstable();
            let expected: Vec<u64> = (1..=(size * size) as u64).collect();
            assert_eq!(values, expected, "size {}", size);
        }
    }

    #[test]
    fn test_consecutive_values_are_adjacent() {
        let size = 7;
        let matrix = get_spiral_matrix(size);
        let mut positions = vec![(0, 0); size * size + 1];
        for (r, row) in matrix.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                positions[v as usize] = (r, c);
            }
        }
        for v in 1..size * size {
            let (r1, c1) = positions[v];
            let (r2, c2) = positions[v + 1];
            assert_eq!(r1.abs_diff(r2) + c1.abs_diff(c2), 1, "{} -> {}", v, v + 1);
        }
    }

    #[test]
    fn test_outer_ring_is_first() {
        let size = 5;
        let matrix = get_spiral_matrix(size);
        assert_eq!(matrix[0], vec![1, 2, 3, 4, 5]);
        assert_eq!(matrix[size - 1][0], 13);
        assert_eq!(matrix[1][0], 16);
        assert_eq!(matrix[2][2], 25);
    }
}
