//! Even/odd character shuffle with cycle reduction.
//!
//! One shuffle step moves every odd-indexed character (0-based) to the end,
//! keeping relative order within the even and odd groups:
//!
//! ```text
//! "012345" -> "024" + "135" -> "024135"
//! ```
//!
//! The step is a fixed permutation of positions, so repeating it on a
//! string of fixed length eventually returns the original. [`shuffle_char`]
//! exploits that cycle to avoid performing huge iteration counts directly.

use tracing::debug;

/// Applies one shuffle step: even-indexed characters, then odd-indexed.
///
/// # Examples
/// ```
/// use kata_core::shuffle::shuffle_step;
///
/// let chars: Vec<char> = "qwerty".chars().collect();
/// let shuffled: String = shuffle_step(&chars).into_iter().collect();
/// assert_eq!(shuffled, "qetwry");
/// ```
pub fn shuffle_step(chars: &[char]) -> Vec<char> {
    chars
        .iter()
        .step_by(2)
        .chain(chars.iter().skip(1).step_by(2))
        .copied()
        .collect()
}

/// Returns the cycle period of the shuffle step for `s`: the smallest
/// positive number of steps that reproduces `s`.
///
/// Strings whose characters repeat can have a shorter period than their
/// length alone implies. The empty string has period 1.
///
/// # Examples
/// ```
/// use kata_core::shuffle::shuffle_period;
///
/// assert_eq!(shuffle_period("012345"), 4);
/// assert_eq!(shuffle_period("aaaa"), 1);
/// ```
pub fn shuffle_period(s: &str) -> u64 {
    let original: Vec<char> = s.chars().collect();
    let mut current = shuffle_step(&original);
    let mut period = 1;
    while current != original {
        current = shuffle_step(&current);
        period += 1;
    }
    period
}

/// Shuffles `s` by applying [`shuffle_step`] `iterations` times.
///
/// The period is probed first: steps are taken from the original until it
/// reappears, or until more than `iterations` steps have been taken. The
/// result is then `iterations % period` steps from the original. When the
/// probe gives up, `period` is `iterations + 1` and the remainder is
/// `iterations` itself, so the answer is exact either way.
///
/// # Examples
/// ```
/// use kata_core::shuffle::shuffle_char;
///
/// assert_eq!(shuffle_char("012345", 1), "024135");
/// assert_eq!(shuffle_char("012345", 2), "043215");
/// assert_eq!(shuffle_char("qwerty", 3), "qrwtey");
/// ```
pub fn shuffle_char(s: &str, iterations: u64) -> String {
    let original: Vec<char> = s.chars().collect();

    let mut current = shuffle_step(&original);
    let mut period: u64 = 1;
    while current != original && period <= iterations {
        current = shuffle_step(&current);
        period += 1;
    }

    let effective_iterations = iterations % period;
    debug!(
        len = original.len(),
        iterations, period, effective_iterations, "shuffle period probed"
    );

    let mut result = original;
    for _ in 0..effective_iterations {
        result = shuffle_step(&result);
    }
    result.into_iter().collect()
}
