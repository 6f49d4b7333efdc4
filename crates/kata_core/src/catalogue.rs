//! Registry of every exercise in the catalogue.
//!
//! Used by front-ends to list what is available and to map command names
//! back to library functions.

use crate::types::KataError;
use std::fmt;
use std::str::FromStr;

/// One exercise of the catalogue.
///
/// # Examples
/// ```
/// use kata_core::catalogue::Exercise;
///
/// let exercise: Exercise = "nearest-bigger".parse().unwrap();
/// assert_eq!(exercise, Exercise::NearestBigger);
/// assert_eq!(exercise.function_name(), "get_nearest_bigger");
/// assert_eq!(Exercise::ALL.len(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    /// [`crate::numeric::is_positive`]
    IsPositive,
    /// [`crate::numeric::get_max_number`]
    MaxNumber,
    /// [`crate::geometry::can_queen_capture_king`]
    QueenCapturesKing,
    /// [`crate::geometry::is_isosceles_triangle`]
    Isosceles,
    /// [`crate::text::convert_to_roman_numerals`]
    Roman,
    /// [`crate::text::convert_number_to_string`]
    NumberToWords,
    /// [`crate::text::is_palindrome`]
    Palindrome,
    /// [`crate::text::get_index_of`]
    IndexOf,
    /// [`crate::numeric::is_contain_number`]
    ContainsDigit,
    /// [`crate::array::get_balance_index`]
    BalanceIndex,
    /// [`crate::matrix::get_spiral_matrix`]
    Spiral,
    /// [`crate::matrix::rotate_matrix`]
    Rotate,
    /// [`crate::array::sort_by_asc`]
    Sort,
    /// [`crate::shuffle::shuffle_char`]
    Shuffle,
    /// [`crate::permutation::get_nearest_bigger`]
    NearestBigger,
}

impl Exercise {
    /// Every exercise, in catalogue order.
    pub const ALL: [Exercise; 15] = [
        Exercise::IsPositive,
        Exercise::MaxNumber,
        Exercise::QueenCapturesKing,
        Exercise::Isosceles,
        Exercise::Roman,
        Exercise::NumberToWords,
        Exercise::Palindrome,
        Exercise::IndexOf,
        Exercise::ContainsDigit,
        Exercise::BalanceIndex,
        Exercise::Spiral,
        Exercise::Rotate,
        Exercise::Sort,
        Exercise::Shuffle,
        Exercise::NearestBigger,
    ];

    /// Kebab-case command name.
    pub fn command(&self) -> &'static str {
        match self {
            Exercise::IsPositive => "is-positive",
            Exercise::MaxNumber => "max-number",
            Exercise::QueenCapturesKing => "queen-captures-king",
            Exercise::Isosceles => "isosceles",
            Exercise::Roman => "roman",
            Exercise::NumberToWords => "number-to-words",
            Exercise::Palindrome => "palindrome",
            Exercise::IndexOf => "index-of",
            Exercise::ContainsDigit => "contains-digit",
            Exercise::BalanceIndex => "balance-index",
            Exercise::Spiral => "spiral",
            Exercise::Rotate => "rotate",
            Exercise::Sort => "sort",
            Exercise::Shuffle => "shuffle",
            Exercise::NearestBigger => "nearest-bigger",
        }
    }

    /// Name of the library function implementing the exercise.
    pub fn function_name(&self) -> &'static str {
        match self {
            Exercise::IsPositive => "is_positive",
            Exercise::MaxNumber => "get_max_number",
            Exercise::QueenCapturesKing => "can_queen_capture_king",
            Exercise::Isosceles => "is_isosceles_triangle",
            Exercise::Roman => "convert_to_roman_numerals",
            Exercise::NumberToWords => "convert_number_to_string",
            Exercise::Palindrome => "is_palindrome",
            Exercise::IndexOf => "get_index_of",
            Exercise::ContainsDigit => "is_contain_number",
            Exercise::BalanceIndex => "get_balance_index",
            Exercise::Spiral => "get_spiral_matrix",
            Exercise::Rotate => "rotate_matrix",
            Exercise::Sort => "sort_by_asc",
            Exercise::Shuffle => "shuffle_char",
            Exercise::NearestBigger => "get_nearest_bigger",
        }
    }

    /// Module the function lives in.
    pub fn module(&self) -> &'static str {
        match self {
            Exercise::IsPositive | Exercise::MaxNumber | Exercise::ContainsDigit => "numeric",
            Exercise::QueenCapturesKing | Exercise::Isosceles => "geometry",
            Exercise::Roman
            | Exercise::NumberToWords
            | Exercise::Palindrome
            | Exercise::IndexOf => "text",
            Exercise::BalanceIndex | Exercise::Sort => "array",
            Exercise::Spiral | Exercise::Rotate => "matrix",
            Exercise::Shuffle => "shuffle",
            Exercise::NearestBigger => "permutation",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Exercise::IsPositive => "Is the number >= 0 (zero counts as positive)",
            Exercise::MaxNumber => "Largest of three numbers",
            Exercise::QueenCapturesKing => "Can a queen attack the king's square",
            Exercise::Isosceles => "Do three sides form an isosceles triangle",
            Exercise::Roman => "Roman numerals for 1..=39",
            Exercise::NumberToWords => "Spell a numeric string word by word",
            Exercise::Palindrome => "Does the string read the same both ways",
            Exercise::IndexOf => "First index of a character, -1 if absent",
            Exercise::ContainsDigit => "Does the number contain the digit",
            Exercise::BalanceIndex => "Index where left and right sums agree, -1 if none",
            Exercise::Spiral => "Square matrix filled in a clockwise spiral",
            Exercise::Rotate => "Rotate a square matrix 90 degrees clockwise in place",
            Exercise::Sort => "Insertion sort ascending in place",
            Exercise::Shuffle => "Move odd-indexed characters to the end, repeatedly",
            Exercise::NearestBigger => "Next larger number with the same digits",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for Exercise {
    type Err = KataError;

    /// Accepts either the command name or the function name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Exercise::ALL
            .into_iter()
            .find(|e| e.command() == s || e.function_name() == s)
            .ok_or_else(|| KataError::invalid_input(format!("Unknown exercise: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let commands: HashSet<_> = Exercise::ALL.iter().map(Exercise::command).collect();
        let functions: HashSet<_> = Exercise::ALL.iter().map(Exercise::function_name).collect();
        assert_eq!(commands.len(), Exercise::ALL.len());
        assert_eq!(functions.len(), Exercise::ALL.len());
    }

    #[test]
    fn test_round_trip_through_display() {
        for exercise in Exercise::ALL {
            let parsed: Exercise = exercise.to_string().parse().unwrap();
            assert_eq!(parsed, exercise);
        }
    }

    #[test]
    fn test_parse_function_name() {
        assert_eq!(
            "rotate_matrix".parse::<Exercise>().unwrap(),
            Exercise::Rotate
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bubble-sort".parse::<Exercise>().unwrap_err();
        assert!(err.to_string().contains("bubble-sort"));
    }

    #[test]
    fn test_descriptions_present() {
        for exercise in Exercise::ALL {
            assert!(!exercise.description().is_empty());
            assert!(!exercise.module().is_empty());
        }
    }
}
