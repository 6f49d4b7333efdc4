//! Isosceles triangle check.

use num_traits::Num;

/// Returns `true` if sides `a`, `b`, `c` form a non-degenerate isosceles
/// triangle.
///
/// Side lengths that violate the strict triangle inequality (any side at
/// least the sum of the other two) are rejected first. This also rejects
/// zero-length sides. Otherwise the triangle is isosceles when any two sides
/// are equal, which includes equilateral triangles.
///
/// The inequality is checked by subtraction, so integer sides near
/// `T::MAX` cannot overflow. A side that is zero or negative always fails it.
///
/// # Examples
/// ```
/// use kata_core::geometry::is_isosceles_triangle;
///
/// assert!(is_isosceles_triangle(2, 3, 2));
/// assert!(!is_isosceles_triangle(1, 2, 3));
/// assert!(!is_isosceles_triangle(3, 0, 3));
/// ```
pub fn is_isosceles_triangle<T: Num + PartialOrd + Copy>(a: T, b: T, c: T) -> bool {
    let zero = T::zero();
    if a <= zero || b <= zero || c <= zero {
        return false;
    }
    if reaches_sum(a, b, c) || reaches_sum(b, a, c) || reaches_sum(c, a, b) {
        return false;
    }
    a == b || a == c || b == c
}

/// `side >= x + y` for positive sides, without forming the sum.
fn reaches_sum<T: Num + PartialOrd + Copy>(side: T, x: T, y: T) -> bool {
    side > x && side - x >= y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_examples() {
        assert!(!is_isosceles_triangle(1, 2, 3));
        assert!(!is_isosceles_triangle(3, 1, 2));
        assert!(is_isosceles_triangle(2, 3, 2));
        assert!(is_isosceles_triangle(3, 2, 2));
        assert!(is_isosceles_triangle(2, 2, 3));
        assert!(!is_isosceles_triangle(2, 2, 5));
        assert!(!is_isosceles_triangle(3, 0, 3));
    }

    #[test]
    fn test_equilateral_is_isosceles() {
        assert!(is_isosceles_triangle(4, 4, 4));
    }

    #[test]
    fn test_scalene_is_not_isosceles() {
        assert!(!is_isosceles_triangle(3, 4, 5));
    }

    #[test]
    fn test_all_zero_sides() {
        assert!(!is_isosceles_triangle(0, 0, 0));
    }

    #[test]
    fn test_float_sides() {
        assert!(is_isosceles_triangle(1.5_f64, 1.5, 2.0));
        assert!(!is_isosceles_triangle(1.0_f64, 1.0, 2.0));
    }

    #[test]
    fn test_negative_side_rejected() {
        assert!(!is_isosceles_triangle(2, 2, -1));
        assert!(!is_isosceles_triangle(-3, -3, -3));
    }

    // ========================================
    // Sides near the integer limit
    // ========================================

    #[test]
    fn test_large_unsigned_sides() {
        assert!(is_isosceles_triangle(200u8, 200, 10));
        assert!(is_isosceles_triangle(10u8, 200, 200));
        assert!(!is_isosceles_triangle(254u8, 127, 127));
        assert!(!is_isosceles_triangle(u64::MAX - 1, u64::MAX / 2, u64::MAX / 2));
    }

    #[test]
    fn test_large_signed_sides() {
        assert!(is_isosceles_triangle(i32::MAX, i32::MAX, 1));
        assert!(is_isosceles_triangle(1, i32::MAX, i32::MAX));
        assert!(!is_isosceles_triangle(i32::MAX - 1, i32::MAX / 2, i32::MAX / 2));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_matches_widened_sums(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
                let (wa, wb, wc) = (u16::from(a), u16::from(b), u16::from(c));
                let valid = wa + wb > wc && wa + wc > wb && wb + wc > wa;
                let expected = valid && (a == b || a == c || b == c);
                prop_assert_eq!(is_isosceles_triangle(a, b, c), expected);
            }
        }
    }
}
