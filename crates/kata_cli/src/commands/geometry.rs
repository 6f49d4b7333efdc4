//! Chessboard and triangle commands.

use kata_core::geometry::{can_queen_capture_king, is_isosceles_triangle};
use kata_core::types::Position;
use serde_json::Value;
use tracing::info;

use super::parse_json_arg;
use crate::{CliError, Result};

/// Parse a position given as `x,y` or as JSON `{"x":1,"y":2}`.
pub fn parse_position(name: &str, raw: &str) -> Result<Position> {
    let trimmed = raw.trim();
    if trimmed.starts_with('{') {
        return parse_json_arg(name, trimmed);
    }

    let (x, y) = trimmed
        .split_once(',')
        .ok_or_else(|| CliError::invalid_argument(format!("{}: expected x,y", name)))?;
    let parse = |part: &str| {
        part.trim().parse::<i32>().map_err(|e| {
            CliError::invalid_argument(format!("{}: '{}' is not an integer ({})", name, part, e))
        })
    };
    Ok(Position::new(parse(x)?, parse(y)?))
}

/// Run the queen-captures-king command
pub fn run_queen_captures_king(queen: &str, king: &str) -> Result<Value> {
    let queen = parse_position("queen", queen)?;
    let king = parse_position("king", king)?;
    info!("Queen at {:?}, king at {:?}", queen, king);
    Ok(Value::Bool(can_queen_capture_king(queen, king)))
}

/// Run the isosceles command
pub fn run_isosceles(a: f64, b: f64, c: f64) -> Value {
    info!("Sides {}, {}, {}", a, b, c);
    Value::Bool(is_isosceles_triangle(a, b, c))
}
