//! CLI command implementations
//!
//! Each submodule covers one group of exercises and returns the result as a
//! JSON value for [`crate::output::render`].

pub mod array;
pub mod check;
pub mod geometry;
pub mod list;
pub mod matrix;
pub mod numeric;
pub mod sequence;
pub mod text;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{CliError, Result};

/// Parse a JSON literal argument such as `[1,2,3]`.
pub(crate) fn parse_json_arg<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw)
        .map_err(|e| CliError::invalid_argument(format!("{}: expected JSON, {}", name, e)))
}

/// Report an optional index the way the catalogue documents it: `-1` if absent.
pub(crate) fn index_value(index: Option<usize>) -> Value {
    match index {
        Some(i) => Value::from(i),
        None => Value::from(-1),
    }
}

/// Largest magnitude below which every integer is exact in an `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Report a number without a fractional part when it is a whole number.
pub(crate) fn number_value(x: f64) -> Value {
    if x.fract() == 0.0 && x.abs() <= MAX_EXACT_INTEGER {
        Value::from(x as i64)
    } else {
        Value::from(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_arg() {
        let values: Vec<i64> = parse_json_arg("array", "[1, -2, 3]").unwrap();
        assert_eq!(values, vec![1, -2, 3]);
    }

    #[test]
    fn test_parse_json_arg_error_names_argument() {
        let err = parse_json_arg::<Vec<i64>>("matrix", "[[1,2]").unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert!(err.to_string().contains("matrix"));
    }

    #[test]
    fn test_index_value() {
        assert_eq!(index_value(Some(2)), Value::from(2));
        assert_eq!(index_value(None), Value::from(-1));
    }

    #[test]
    fn test_number_value() {
        assert_eq!(number_value(3.0), Value::from(3));
        assert_eq!(number_value(-7.0), Value::from(-7));
        assert_eq!(number_value(-0.0), Value::from(0));
        assert_eq!(number_value(0.25), Value::from(0.25));
        assert_eq!(number_value(1e300), Value::from(1e300));
        assert_eq!(number_value(f64::INFINITY), Value::Null);
    }
}
