//! Array scan and sort commands.

use kata_core::array::{get_balance_index, sort_by_asc};
use serde_json::Value;
use tracing::info;

use super::{index_value, parse_json_arg};
use crate::Result;

/// Run the balance-index command
pub fn run_balance_index(array: &str) -> Result<Value> {
    let values: Vec<i64> = parse_json_arg("array", array)?;
    info!("Scanning {} values for a balance index", values.len());
    Ok(index_value(get_balance_index(&values)))
}

/// Run the sort command
pub fn run_sort(array: &str) -> Result<Value> {
    let mut values: Vec<i64> = parse_json_arg("array", array)?;
    info!("Sorting {} values", values.len());
    sort_by_asc(&mut values);
    Ok(Value::from(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_balance_index() {
        assert_eq!(run_balance_index("[1, 2, 5, 3, 0]").unwrap(), json!(2));
        assert_eq!(run_balance_index("[1, 2, 3, 4, 5]").unwrap(), json!(-1));
        assert_eq!(run_balance_index("[]").unwrap(), json!(-1));
    }

    #[test]
    fn test_sort() {
        assert_eq!(run_sort("[-2, 9, 5, -3]").unwrap(), json!([-3, -2, 5, 9]));
    }

    #[test]
    fn test_sort_rejects_non_integers() {
        assert!(run_sort("[1.5, 2]").is_err());
        assert!(run_sort("nope").is_err());
    }
}
