//! Array scans and in-place sorting.
//!
//! - [`get_balance_index`]: Index whose left and right sums agree
//! - [`sort_by_asc`]: Stable in-place insertion sort

mod balance;
mod insertion_sort;

pub use balance::get_balance_index;
pub use insertion_sort::sort_by_asc;
