//! String and number formatting exercises.
//!
//! ## Available Functions
//!
//! - [`convert_to_roman_numerals`]: Greedy Roman numeral encoding for 1..=39
//! - [`convert_number_to_string`]: Spell out a numeric string word by word
//! - [`is_palindrome`]: Two-pointer palindrome check
//! - [`get_index_of`]: First occurrence of a character
//!
//! All functions operate on Unicode scalar values (`char`), so indices are
//! character positions rather than byte offsets.
//!
//! ## Example
//!
//! ```
//! use kata_core::text::{convert_number_to_string, get_index_of, is_palindrome};
//!
//! assert_eq!(convert_number_to_string("-10.5"), "minus one zero point five");
//! assert!(is_palindrome("0123210"));
//! assert_eq!(get_index_of("qwerty", 't'), Some(4));
//! ```

mod roman;
mod search;
mod words;

pub use roman::{convert_to_roman_numerals, ROMAN_MAX, ROMAN_MIN, ROMAN_NUMERALS};
pub use search::{get_index_of, is_palindrome};
pub use words::convert_number_to_string;
