//! String and number formatting commands.

use kata_core::text::{
    convert_number_to_string, convert_to_roman_numerals, get_index_of, is_palindrome,
};
use serde_json::Value;
use tracing::info;

use super::index_value;
use crate::Result;

/// Run the roman command
pub fn run_roman(number: u32) -> Result<Value> {
    info!("Converting {} to Roman numerals", number);
    Ok(Value::String(convert_to_roman_numerals(number)?))
}

/// Run the number-to-words command
pub fn run_number_to_words(number: &str) -> Value {
    info!("Spelling '{}'", number);
    Value::String(convert_number_to_string(number))
}

/// Run the palindrome command
pub fn run_palindrome(text: &str) -> Value {
    info!("Checking palindrome over {} characters", text.chars().count());
    Value::Bool(is_palindrome(text))
}

/// Run the index-of command
pub fn run_index_of(text: &str, letter: char) -> Value {
    info!("Searching for '{}'", letter);
    index_value(get_index_of(text, letter))
}
