//! Spelling numeric strings as words.

/// Word for a single recognised character, or `None` if it is skipped.
fn word_for(ch: char) -> Option<&'static str> {
    let word = match ch {
        '0' => "zero",
        '1' => "one",
        '2' => "two",
        '3' => "three",
        '4' => "four",
        '5' => "five",
        '6' => "six",
        '7' => "seven",
        '8' => "eight",
        '9' => "nine",
        '.' | ',' => "point",
        _ => return None,
    };
    Some(word)
}

/// Converts a numeric string to words, one word per character.
///
/// Scans left to right:
/// - `'-'` appends `"minus"` with no leading separator
/// - digits append their English name
/// - `'.'` and `','` append `"point"`
/// - any other character appends nothing
///
/// Every word except `"minus"` is preceded by the separator, which is empty
/// for the first character and a single space from the second character on.
/// Skipped characters still advance the separator, so `"x1"` spells as
/// `" one"`.
///
/// # Examples
/// ```
/// use kata_core::text::convert_number_to_string;
///
/// assert_eq!(convert_number_to_string("1"), "one");
/// assert_eq!(convert_number_to_string("-10"), "minus one zero");
/// assert_eq!(convert_number_to_string("10,5"), "one zero point five");
/// assert_eq!(convert_number_to_string("1950.2"), "one nine five zero point two");
/// ```
pub fn convert_number_to_string(number_str: &str) -> String {
    let mut result = String::new();
    let mut separator = "";
    for ch in number_str.chars() {
        if ch == '-' {
            result.push_str("minus");
        } else if let Some(word) = word_for(ch) {
            result.push_str(separator);
            result.push_str(word);
        }
        separator = " ";
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_examples() {
        assert_eq!(convert_number_to_string("1"), "one");
        assert_eq!(convert_number_to_string("10"), "one zero");
        assert_eq!(convert_number_to_string("-10"), "minus one zero");
        assert_eq!(convert_number_to_string("10.5"), "one zero point five");
        assert_eq!(convert_number_to_string("10,5"), "one zero point five");
        assert_eq!(
            convert_number_to_string("1950.2"),
            "one nine five zero point two"
        );
    }

    #[test]
    fn test_every_digit() {
        assert_eq!(
            convert_number_to_string("0123456789"),
            "zero one two three four five six seven eight nine"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_number_to_string(""), "");
    }

    #[test]
    fn test_minus_mid_string_has_no_separator() {
        assert_eq!(convert_number_to_string("1-2"), "oneminus two");
    }

    #[test]
    fn test_skipped_characters_advance_separator() {
        assert_eq!(convert_number_to_string("x1"), " one");
        assert_eq!(convert_number_to_string("1 2"), "one two");
        assert_eq!(convert_number_to_string("1x"), "one");
    }

    #[test]
    fn test_lone_point() {
        assert_eq!(convert_number_to_string(".5"), "point five");
    }
}
