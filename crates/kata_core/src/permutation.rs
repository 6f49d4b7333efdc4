//! Next larger permutation of decimal digits.

use crate::numeric::Digits;
use crate::types::KataError;
use tracing::debug;

/// Rightmost pivot boundary: the largest `i` with `digits[i - 1] < digits[i]`.
fn pivot_boundary(digits: &[u8]) -> Option<usize> {
    (1..digits.len()).rev().find(|&i| digits[i - 1] < digits[i])
}

/// Index of the smallest digit in `digits[from..]` strictly greater than
/// `target`, leftmost on ties.
///
/// `digits[from]` itself must exceed `target`.
fn smallest_greater(digits: &[u8], from: usize, target: u8) -> usize {
    let mut best = from;
    for j in from..digits.len() {
        if digits[j] > target && digits[j] < digits[best] {
            best = j;
        }
    }
    best
}

/// Returns the smallest integer greater than `number` that uses exactly
/// the same decimal digits, or `number` itself when no such rearrangement
/// exists.
///
/// # Algorithm
///
/// 1. Split `number` into digits, most significant first.
/// 2. Find the rightmost position `i` where `digit[i - 1] < digit[i]`. If
///    there is none the digits are in descending order and `number` is
///    already the largest arrangement.
/// 3. Swap `digit[i - 1]` with the smallest larger digit to its right
///    (leftmost on ties).
/// 4. Sort the digits from `i` onwards ascending and reassemble.
///
/// Zero has no digits and is returned unchanged.
///
/// # Returns
///
/// * `Ok(n)` - The next larger arrangement, or `number` if none exists
/// * `Err(KataError::Overflow)` - The next arrangement exceeds `u64::MAX`
///
/// # Examples
/// ```
/// use kata_core::permutation::get_nearest_bigger;
///
/// assert_eq!(get_nearest_bigger(12345).unwrap(), 12354);
/// assert_eq!(get_nearest_bigger(123440).unwrap(), 124034);
/// assert_eq!(get_nearest_bigger(987).unwrap(), 987);
/// ```
pub fn get_nearest_bigger(number: u64) -> Result<u64, KataError> {
    let mut digits = Digits::new(number).most_significant_first();

    let Some(pivot) = pivot_boundary(&digits) else {
        debug!(number, "digits descending, no larger arrangement");
        return Ok(number);
    };

    let swap_index = smallest_greater(&digits, pivot, digits[pivot - 1]);
    debug!(number, pivot, swap_index, "next permutation pivot");
    digits.swap(pivot - 1, swap_index);
    digits[pivot..].sort_unstable();

    digits
        .iter()
        .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
        .ok_or_else(|| {
            KataError::overflow(format!(
                "next digit permutation of {} exceeds u64::MAX",
                number
            ))
        })
}
