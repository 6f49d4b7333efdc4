//! Numeric predicates and decimal digit scans.
//!
//! ## Available Functions
//!
//! - [`is_positive`]: Sign check where zero counts as positive
//! - [`get_max_number`]: Maximum of three with a fixed tie priority
//! - [`is_contain_number`]: Decimal digit membership by repeated division
//!
//! ## Digit Sequences
//!
//! [`Digits`] yields the decimal digits of an unsigned integer,
//! least-significant first. It is shared with
//! [`crate::permutation::get_nearest_bigger`].
//!
//! ## Example
//!
//! ```
//! use kata_core::numeric::{get_max_number, is_contain_number, is_positive};
//!
//! assert!(is_positive(0));
//! assert_eq!(get_max_number(-5, 0, 5), 5);
//! assert!(is_contain_number(123450, 0));
//! ```

pub mod digits;
mod predicates;

pub use digits::Digits;
pub use predicates::{get_max_number, is_contain_number, is_positive};
