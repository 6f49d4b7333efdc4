//! Spiral and rotation commands.

use kata_core::matrix::{get_spiral_matrix, rotate_matrix};
use kata_core::types::Grid;
use serde_json::Value;
use tracing::info;

use super::parse_json_arg;
use crate::Result;

/// Run the spiral command
pub fn run_spiral(size: usize) -> Result<Value> {
    info!("Generating {}x{} spiral", size, size);
    Ok(serde_json::to_value(get_spiral_matrix(size))?)
}

/// Run the rotate command
pub fn run_rotate(matrix: &str, times: u8) -> Result<Value> {
    let mut grid: Grid<i64> = parse_json_arg("matrix", matrix)?;
    info!("Rotating {}x{} matrix {} time(s)", grid.len(), grid.len(), times);
    for _ in 0..times {
        rotate_matrix(&mut grid)?;
    }
    Ok(serde_json::to_value(grid)?)
}
