//! In-place insertion sort.

/// Sorts `arr` ascending in place using insertion sort.
///
/// Each element is moved left past every strictly greater predecessor, so
/// equal elements keep their relative order (stable). Uses O(1) extra
/// memory and O(n²) comparisons in the worst case; already-sorted input
/// costs a single pass.
///
/// Incomparable values (such as `NaN`) are left where the scan meets them.
///
/// # Examples
/// ```
/// use kata_core::array::sort_by_asc;
///
/// let mut arr = [-2, 9, 5, -3];
/// sort_by_asc(&mut arr);
/// assert_eq!(arr, [-3, -2, 5, 9]);
/// ```
pub fn sort_by_asc<T: PartialOrd>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_examples() {
        let mut a = [2, 9, 5];
        sort_by_asc(&mut a);
        assert_eq!(a, [2, 5, 9]);

        let mut b = [2, 9, 5, 9];
        sort_by_asc(&mut b);
        assert_eq!(b, [2, 5, 9, 9]);

        let mut c = [-2, 9, 5, -3];
        sort_by_asc(&mut c);
        assert_eq!(c, [-3, -2, 5, 9]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        sort_by_asc(&mut empty);
        assert!(empty.is_empty());

        let mut one = [7];
        sort_by_asc(&mut one);
        assert_eq!(one, [7]);
    }

    #[test]
    fn test_reverse_sorted() {
        let mut arr: Vec<i32> = (0..50).rev().collect();
        sort_by_asc(&mut arr);
        assert_eq!(arr, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_stability() {
        // Ordered by key only; the tag records the original position.
        #[derive(Debug)]
        struct Keyed(i32, char);
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let mut keyed = vec![Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        sort_by_asc(&mut keyed);
        let order: Vec<char> = keyed.iter().map(|k| k.1).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_strings() {
        let mut words = vec!["pear", "apple", "fig"];
        sort_by_asc(&mut words);
        assert_eq!(words, vec!["apple", "fig", "pear"]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_sorted_permutation_of_input(arr in prop::collection::vec(any::<i32>(), 0..100)) {
                let mut sorted = arr.clone();
                sort_by_asc(&mut sorted);

                prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

                let mut expected = arr;
                expected.sort();
                prop_assert_eq!(sorted, expected);
            }

            #[test]
            fn test_floats_non_decreasing(arr in prop::collection::vec(-1e6f64..1e6, 0..60)) {
                let mut sorted = arr;
                sort_by_asc(&mut sorted);
                prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }
}
