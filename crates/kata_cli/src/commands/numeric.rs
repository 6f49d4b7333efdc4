//! Numeric predicate commands.

use kata_core::numeric::{get_max_number, is_contain_number, is_positive};
use serde_json::Value;
use tracing::info;

use super::number_value;

/// Run the is-positive command
pub fn run_is_positive(number: f64) -> Value {
    info!("Checking sign of {}", number);
    Value::Bool(is_positive(number))
}

/// Run the max-number command
pub fn run_max_number(a: f64, b: f64, c: f64) -> Value {
    info!("Maximum of {}, {}, {}", a, b, c);
    number_value(get_max_number(a, b, c))
}

/// Run the contains-digit command
pub fn run_contains_digit(number: i64, digit: u8) -> Value {
    info!("Searching {} for digit {}", number, digit);
    Value::Bool(is_contain_number(number, digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_positive() {
        assert_eq!(run_is_positive(0.0), Value::Bool(true));
        assert_eq!(run_is_positive(-5.0), Value::Bool(false));
    }

    #[test]
    fn test_max_number() {
        assert_eq!(run_max_number(-0.1, 0.0, 0.2), Value::from(0.2));
    }

    #[test]
    fn test_max_number_whole_result() {
        let value = run_max_number(1.0, 2.0, 3.0);
        assert_eq!(value, Value::from(3));
        assert_eq!(
            crate::output::render(&value, crate::config::OutputFormat::Plain).unwrap(),
            "3"
        );
        assert_eq!(run_max_number(-5.0, -9.0, -7.0), Value::from(-5));
    }

    #[test]
    fn test_contains_digit() {
        assert_eq!(run_contains_digit(123450, 0), Value::Bool(true));
        assert_eq!(run_contains_digit(12345, 6), Value::Bool(false));
    }
}
