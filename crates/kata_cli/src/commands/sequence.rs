//! Shuffle and digit permutation commands.

use kata_core::permutation::get_nearest_bigger;
use kata_core::shuffle::{shuffle_char, shuffle_period};
use serde_json::Value;
use tracing::info;

use crate::Result;

/// Run the shuffle command
///
/// With `period` set, prints the cycle period of `text` instead of
/// shuffling it.
pub fn run_shuffle(text: &str, iterations: u64, period: bool) -> Value {
    if period {
        info!("Computing shuffle period of {} characters", text.chars().count());
        return Value::from(shuffle_period(text));
    }
    info!("Shuffling {} characters {} time(s)", text.chars().count(), iterations);
    Value::String(shuffle_char(text, iterations))
}

/// Run the nearest-bigger command
pub fn run_nearest_bigger(number: u64) -> Result<Value> {
    info!("Finding next permutation of {}", number);
    Ok(Value::from(get_nearest_bigger(number)?))
}
