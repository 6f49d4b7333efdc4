//! Sign, maximum and digit-membership predicates.

use super::Digits;
use num_traits::Zero;

/// Returns `true` if `n` is positive, counting zero as positive.
///
/// Works for any numeric type with a zero. `NaN` compares false and is
/// therefore not positive.
///
/// # Examples
/// ```
/// use kata_core::numeric::is_positive;
///
/// assert!(is_positive(10));
/// assert!(is_positive(0));
/// assert!(!is_positive(-5));
/// assert!(is_positive(0.0_f64));
/// ```
#[inline]
pub fn is_positive<T: Zero + PartialOrd>(n: T) -> bool {
    n >= T::zero()
}

/// Returns the largest of three values.
///
/// Ties are resolved by priority: `c` wins over `b`, and `b` wins over `a`.
/// This is observable for values that compare equal but are distinct, such
/// as `0.0` and `-0.0`.
///
/// # Examples
/// ```
/// use kata_core::numeric::get_max_number;
///
/// assert_eq!(get_max_number(1, 2, 3), 3);
/// assert_eq!(get_max_number(-5, 0, 5), 5);
/// assert_eq!(get_max_number(-0.1, 0.0, 0.2), 0.2);
/// ```
pub fn get_max_number<T: PartialOrd>(a: T, b: T, c: T) -> T {
    if c >= b && c >= a {
        return c;
    }
    if b >= c && b >= a {
        return b;
    }
    a
}

/// Returns `true` if the decimal representation of `num` contains `digit`.
///
/// Digits are inspected least-significant first by repeated division.
/// Negative numbers are checked by magnitude, so `-123` contains `3`.
/// Zero has no digits to inspect and never matches. A `digit` above 9
/// never matches.
///
/// # Examples
/// ```
/// use kata_core::numeric::is_contain_number;
///
/// assert!(is_contain_number(123450, 5));
/// assert!(is_contain_number(123450, 0));
/// assert!(!is_contain_number(12345, 0));
/// assert!(!is_contain_number(12345, 6));
/// ```
pub fn is_contain_number(num: i64, digit: u8) -> bool {
    Digits::new(num.unsigned_abs()).any(|d| d == digit)
}
