//! Result rendering.

use serde_json::Value;

use crate::config::OutputFormat;
use crate::Result;

/// Render a command result in the requested format.
///
/// Plain output prints strings without quotes, flat arrays space-separated
/// and matrices one row per line.
pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
        OutputFormat::Plain => Ok(render_plain(value)),
    }
}

fn render_plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(rows) if !rows.is_empty() && rows.iter().all(Value::is_array) => rows
            .iter()
            .map(render_plain)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Array(items) => items
            .iter()
            .map(render_plain)
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_scalars() {
        assert_eq!(render(&json!(true), OutputFormat::Plain).unwrap(), "true");
        assert_eq!(render(&json!(-1), OutputFormat::Plain).unwrap(), "-1");
        assert_eq!(render(&json!("XXVI"), OutputFormat::Plain).unwrap(), "XXVI");
    }

    #[test]
    fn test_plain_matrix() {
        let matrix = json!([[1, 2, 3], [8, 9, 4], [7, 6, 5]]);
        assert_eq!(
            render(&matrix, OutputFormat::Plain).unwrap(),
            "1 2 3\n8 9 4\n7 6 5"
        );
    }

    #[test]
    fn test_plain_flat_array() {
        assert_eq!(
            render(&json!([-3, -2, 5, 9]), OutputFormat::Plain).unwrap(),
            "-3 -2 5 9"
        );
        assert_eq!(render(&json!([]), OutputFormat::Plain).unwrap(), "");
    }

    #[test]
    fn test_json_output() {
        assert_eq!(
            render(&json!("043215"), OutputFormat::Json).unwrap(),
            "\"043215\""
        );
        assert_eq!(
            render(&json!([[7, 4, 1]]), OutputFormat::Json).unwrap(),
            "[[7,4,1]]"
        );
    }
}
