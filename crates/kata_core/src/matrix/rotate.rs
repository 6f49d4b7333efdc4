//! In-place 90° clockwise rotation.

use crate::types::KataError;
use tracing::trace;

/// Rotates a square matrix 90° clockwise in place.
///
/// Works from the outermost layer inwards. Within a layer each element of
/// the top edge starts a four-way cycle: left edge to top, bottom to left,
/// right to bottom, and the saved top to right. Only one element is held
/// aside at a time, so extra memory is O(1) regardless of matrix size.
///
/// # Returns
///
/// * `Ok(())` - The matrix now holds its rotation
/// * `Err(KataError::NotSquare)` - Some row length differs from the row
///   count; the matrix is left untouched
///
/// # Examples
/// ```
/// use kata_core::matrix::rotate_matrix;
///
/// let mut matrix = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
/// rotate_matrix(&mut matrix).unwrap();
/// assert_eq!(matrix, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
/// ```
pub fn rotate_matrix<T: Copy>(matrix: &mut [Vec<T>]) -> Result<(), KataError> {
    let n = matrix.len();
    if let Some((row, len)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != n)
    {
        return Err(KataError::NotSquare {
            row,
            len,
            expected: n,
        });
    }

    for layer in 0..n / 2 {
        let first = layer;
        let last = n - 1 - layer;
        trace!(layer, first, last, "rotating layer");

        for i in first..last {
            let offset = i - first;
            let top = matrix[first][i];
            matrix[first][i] = matrix[last - offset][first];
            matrix[last - offset][first] = matrix[last][last - offset];
            matrix[last][last - offset] = matrix[i][last];
            matrix[i][last] = top;
        }
    }

    Ok(())
}
