//! Module-11 check digit arithmetic.
//!
//! The body digits are weighted right to left with multipliers cycling
//! through `2..=7`. The expected value is `11 - (sum mod 11)`, which lands in
//! `1..=11`. Two values have letter-or-zero spellings:
//!
//! | Expected | Check character |
//! |----------|-----------------|
//! | 11 | `0` |
//! | 10 | `K` |
//! | 1..=9 | the digit itself |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RutError;

/// First multiplier applied to the least significant body digit.
pub const MULTIPLIER_MIN: u64 = 2;

/// Last multiplier before the cycle wraps back to [`MULTIPLIER_MIN`].
pub const MULTIPLIER_MAX: u64 = 7;

/// Modulus of the check digit scheme.
pub const MODULUS: u64 = 11;

/// A computed or supplied check digit: `0..=9`, or `K` (stored as 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct CheckDigit(u8);

impl CheckDigit {
    /// The letter check digit, standing for the expected value 10.
    pub const K: CheckDigit = CheckDigit(10);

    /// Map an expected value in `1..=11` to its check digit.
    #[must_use]
    pub fn from_expected(expected: u64) -> Self {
        debug_assert!(
            (1..=MODULUS).contains(&expected),
            "Expected value must be in 1..=11"
        );

        match expected {
            11 => CheckDigit(0),
            10 => CheckDigit::K,
            other => CheckDigit(other as u8),
        }
    }

    /// Parse a check character. Lowercase `k` is accepted.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'K' | 'k' => Some(CheckDigit::K),
            '0'..='9' => Some(CheckDigit(c as u8 - b'0')),
            _ => None,
        }
    }

    /// The canonical (uppercase) character for this check digit.
    #[must_use]
    pub fn as_char(self) -> char {
        if self == CheckDigit::K {
            'K'
        } else {
            char::from(b'0' + self.0)
        }
    }

    /// Value compared against the module-11 expected value.
    ///
    /// `K` maps to 10 and `0` maps to 11, the inverse of
    /// [`CheckDigit::from_expected`].
    #[must_use]
    pub fn comparison_value(self) -> u64 {
        match self.0 {
            0 => MODULUS,
            other => u64::from(other),
        }
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for CheckDigit {
    type Error = RutError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        CheckDigit::from_char(c).ok_or(RutError::InvalidCheckCharacter(c))
    }
}

impl From<CheckDigit> for char {
    fn from(digit: CheckDigit) -> Self {
        digit.as_char()
    }
}

/// Weighted module-11 sum of a body, or `None` if it holds a non-digit.
#[must_use]
pub fn weighted_sum(body: &str) -> Option<u64> {
    let mut sum: u64 = 0;
    let mut multiplier = MULTIPLIER_MIN;

    for c in body.chars().rev() {
        let digit = c.to_digit(10)?;
        sum += u64::from(digit) * multiplier;

        multiplier = if multiplier < MULTIPLIER_MAX {
            multiplier + 1
        } else {
            MULTIPLIER_MIN
        };
    }

    debug_assert!((MULTIPLIER_MIN..=MULTIPLIER_MAX).contains(&multiplier));
    Some(sum)
}

/// Expected value `11 - (sum mod 11)` for a body, in `1..=11`.
#[must_use]
pub fn expected_value(body: &str) -> Option<u64> {
    let expected = MODULUS - weighted_sum(body)? % MODULUS;
    debug_assert!((1..=MODULUS).contains(&expected));
    Some(expected)
}

/// Compute the check digit for a body of ASCII digits.
pub fn check_digit(body: &str) -> Result<CheckDigit, RutError> {
    if body.is_empty() {
        return Err(RutError::EmptyBody);
    }

    expected_value(body)
        .map(CheckDigit::from_expected)
        .ok_or_else(|| RutError::NonDigitBody(body.to_string()))
}
