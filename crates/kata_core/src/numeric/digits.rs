//! Decimal digit extraction.

/// Iterator over the decimal digits of an unsigned integer,
/// least-significant first.
///
/// Digits are produced by repeated `% 10` and `/ 10` until the remaining
/// value is zero, so `0` yields no digits at all.
///
/// # Example
///
/// ```
/// use kata_core::numeric::Digits;
///
/// let digits: Vec<u8> = Digits::new(1203).collect();
/// assert_eq!(digits, vec![3, 0, 2, 1]);
///
/// assert_eq!(Digits::new(0).count(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits {
    remaining: u64,
}

impl Digits {
    /// Start extracting digits of `value`.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self { remaining: value }
    }

    /// Collect the digits most-significant first.
    ///
    /// ```
    /// use kata_core::numeric::Digits;
    ///
    /// assert_eq!(Digits::new(90822).most_significant_first(), vec![9, 0, 8, 2, 2]);
    /// ```
    pub fn most_significant_first(self) -> Vec<u8> {
        let mut digits: Vec<u8> = self.collect();
        digits.reverse();
        digits
    }
}

impl Iterator for Digits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let digit = (self.remaining % 10) as u8;
        self.remaining /= 10;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match self.remaining {
            0 => 0,
            n => n.ilog10() as usize + 1,
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for Digits {}
