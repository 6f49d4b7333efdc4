//! Roman numeral encoding.

use crate::types::KataError;

/// Smallest value accepted by [`convert_to_roman_numerals`].
pub const ROMAN_MIN: u32 = 1;

/// Largest value accepted by [`convert_to_roman_numerals`].
pub const ROMAN_MAX: u32 = 39;

/// Numeral table in greedy order, largest value first.
///
/// Subtractive pairs (`IX`, `IV`) sit directly below the symbol they
/// precede so the greedy pass never emits `VIIII` or `IIII`.
pub const ROMAN_NUMERALS: [(u32, &str); 5] = [(10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I")];

/// Converts `num` to Roman numerals.
///
/// Walks [`ROMAN_NUMERALS`] in order, appending each numeral while the
/// remaining value is at least its value.
///
/// # Returns
///
/// * `Ok(String)` - The numeral for `num`
/// * `Err(KataError::OutOfDomain)` - `num` outside `1..=39`
///
/// # Examples
/// ```
/// use kata_core::text::convert_to_roman_numerals;
///
/// assert_eq!(convert_to_roman_numerals(1).unwrap(), "I");
/// assert_eq!(convert_to_roman_numerals(26).unwrap(), "XXVI");
/// assert!(convert_to_roman_numerals(40).is_err());
/// ```
pub fn convert_to_roman_numerals(num: u32) -> Result<String, KataError> {
    if !(ROMAN_MIN..=ROMAN_MAX).contains(&num) {
        return Err(KataError::OutOfDomain {
            value: i64::from(num),
            min: i64::from(ROMAN_MIN),
            max: i64::from(ROMAN_MAX),
        });
    }

    let mut result = String::new();
    let mut remaining = num;
    for (value, numeral) in ROMAN_NUMERALS {
        while remaining >= value {
            result.push_str(numeral);
            remaining -= value;
        }
    }
    Ok(result)
}
