//! # kata_core: Control-Flow Exercise Catalogue
//!
//! ## Kernel Layer Role
//!
//! kata_core is the bottom layer of the workspace and holds every exercise
//! as a pure function:
//! - Numeric predicates and digit scans (`numeric`)
//! - Chessboard and triangle checks (`geometry`)
//! - Roman numerals, digit words, palindromes, letter search (`text`)
//! - Balance index and insertion sort (`array`)
//! - Spiral generation and in-place rotation (`matrix`)
//! - Even/odd character shuffle with cycle reduction (`shuffle`)
//! - Next larger permutation of digits (`permutation`)
//! - Error and coordinate types (`types`)
//! - A registry of all exercises (`catalogue`)
//!
//! ## Statelessness
//!
//! No function keeps state between calls. The only side effects are the
//! documented in-place mutations of caller-owned buffers by
//! [`matrix::rotate_matrix`] and [`array::sort_by_asc`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use kata_core::matrix::get_spiral_matrix;
//! use kata_core::permutation::get_nearest_bigger;
//! use kata_core::text::convert_to_roman_numerals;
//!
//! assert_eq!(get_nearest_bigger(12345).unwrap(), 12354);
//! assert_eq!(convert_to_roman_numerals(26).unwrap(), "XXVI");
//! assert_eq!(
//!     get_spiral_matrix(3),
//!     vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Position` and `KataError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod array;
pub mod catalogue;
pub mod geometry;
pub mod matrix;
pub mod numeric;
pub mod permutation;
pub mod shuffle;
pub mod text;
pub mod types;
