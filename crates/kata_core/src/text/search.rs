//! Palindrome check and character search.

/// Returns `true` if `s` reads the same forwards and backwards.
///
/// Compares characters pairwise from both ends towards the middle. Empty
/// and single-character strings are palindromes. The comparison is exact:
/// case and whitespace are significant.
///
/// # Examples
/// ```
/// use kata_core::text::is_palindrome;
///
/// assert!(is_palindrome("abcba"));
/// assert!(is_palindrome(""));
/// assert!(!is_palindrome("qweqwe"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return true;
    }

    let mut start = 0;
    let mut end = chars.len() - 1;
    while start < end {
        if chars[start] != chars[end] {
            return false;
        }
        start += 1;
        end -= 1;
    }
    true
}

/// Returns the character index of the first `letter` in `s`.
///
/// Matching is case-sensitive. Returns `None` when `letter` does not occur,
/// which the CLI reports as `-1`.
///
/// # Examples
/// ```
/// use kata_core::text::get_index_of;
///
/// assert_eq!(get_index_of("qwerty", 'q'), Some(0));
/// assert_eq!(get_index_of("qwerty", 't'), Some(4));
/// assert_eq!(get_index_of("qwerty", 'Q'), None);
/// ```
pub fn get_index_of(s: &str, letter: char) -> Option<usize> {
    for (index, ch) in s.chars().enumerate() {
        if ch == letter {
            return Some(index);
        }
    }
    None
}
