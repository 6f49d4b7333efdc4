//! Balance index scan.

/// Returns the smallest index whose strictly-left sum equals its
/// strictly-right sum.
///
/// The right sum starts as the total and shrinks by each element as the
/// scan reaches it; the left sum grows by each element after it is
/// compared. Sums are accumulated in `i128`, so no `i64` input overflows.
///
/// # Returns
///
/// * `Some(index)` - First balance index
/// * `None` - No balance index exists, including for an empty slice
///
/// # Examples
/// ```
/// use kata_core::array::get_balance_index;
///
/// assert_eq!(get_balance_index(&[1, 2, 5, 3, 0]), Some(2));
/// assert_eq!(get_balance_index(&[2, 3, 9, 5]), Some(2));
/// assert_eq!(get_balance_index(&[1, 2, 3, 4, 5]), None);
/// ```
pub fn get_balance_index(arr: &[i64]) -> Option<usize> {
    let mut right_sum: i128 = arr.iter().map(|&v| i128::from(v)).sum();
    let mut left_sum: i128 = 0;

    for (index, &value) in arr.iter().enumerate() {
        right_sum -= i128::from(value);
        if left_sum == right_sum {
            return Some(index);
        }
        left_sum += i128::from(value);
    }
    None
}
