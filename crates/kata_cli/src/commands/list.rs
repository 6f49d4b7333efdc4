//! List command implementation
//!
//! Prints the exercise catalogue.

use kata_core::catalogue::Exercise;
use serde_json::{json, Value};

use crate::config::OutputFormat;

/// Run the list command
pub fn run(format: OutputFormat) -> Value {
    match format {
        OutputFormat::Json => Value::Array(
            Exercise::ALL
                .iter()
                .map(|e| {
                    json!({
                        "command": e.command(),
                        "function": format!("{}::{}", e.module(), e.function_name()),
                        "description": e.description(),
                    })
                })
                .collect(),
        ),
        OutputFormat::Plain => {
            let width = Exercise::ALL
                .iter()
                .map(|e| e.command().len())
                .max()
                .unwrap_or(0);
            let lines: Vec<String> = Exercise::ALL
                .iter()
                .map(|e| format!("{:<width$}  {}", e.command(), e.description(), width = width))
                .collect();
            Value::String(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lists_every_command() {
        let Value::String(text) = run(OutputFormat::Plain) else {
            panic!("expected text");
        };
        for exercise in Exercise::ALL {
            assert!(text.contains(exercise.command()));
        }
        assert_eq!(text.lines().count(), Exercise::ALL.len());
    }

    #[test]
    fn test_json_entries() {
        let Value::Array(entries) = run(OutputFormat::Json) else {
            panic!("expected array");
        };
        assert_eq!(entries.len(), Exercise::ALL.len());
        assert_eq!(entries[0]["function"], "numeric::is_positive");
    }
}
