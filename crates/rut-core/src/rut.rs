//! Verified RUT value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checker::{split, Verdict};
use crate::checksum::{check_digit, CheckDigit};
use crate::error::RutError;

/// Smallest assignable body.
pub const BODY_MIN: u32 = 1;

/// Largest body that fits the eight-digit numbering.
pub const BODY_MAX: u32 = 99_999_999;

/// Digits between thousands separators in the display form.
const GROUP_DIGITS: usize = 3;

/// A RUT whose check digit is known to match its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rut {
    body: u32,
    check_digit: CheckDigit,
}

impl Rut {
    /// Build a RUT from its body, computing the check digit.
    pub fn new(body: u32) -> Result<Self, RutError> {
        if !(BODY_MIN..=BODY_MAX).contains(&body) {
            return Err(RutError::BodyOutOfRange(body.to_string()));
        }

        let check_digit = check_digit(&body.to_string())?;
        Ok(Self { body, check_digit })
    }

    #[must_use]
    pub fn body(&self) -> u32 {
        self.body
    }

    #[must_use]
    pub fn check_digit(&self) -> CheckDigit {
        self.check_digit
    }

    /// Display form with thousands separators, e.g. `7.593.831-4`.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_with_separators(&self.to_string())
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.body, self.check_digit)
    }
}

impl FromStr for Rut {
    type Err = RutError;

    /// Accepts any raw form that checks valid: dotted, unhyphenated, lowercase `k`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (body, check_char) = split(s);
        let (false, Some(c)) = (body.is_empty(), check_char) else {
            return Err(RutError::EmptyBody);
        };

        let supplied = CheckDigit::from_char(c).ok_or(RutError::InvalidCheckCharacter(c))?;
        if !body.chars().all(|d| d.is_ascii_digit()) {
            return Err(RutError::NonDigitBody(body));
        }

        let value = body
            .parse::<u32>()
            .ok()
            .filter(|b| (BODY_MIN..=BODY_MAX).contains(b))
            .ok_or_else(|| RutError::BodyOutOfRange(body.clone()))?;

        let rut = Rut::new(value)?;
        if rut.check_digit != supplied {
            return Err(RutError::FailedValidation {
                id_number: format!("{}-{}", body, c),
                verdict: Verdict::InvalidChecksum,
            });
        }
        Ok(rut)
    }
}

impl TryFrom<String> for Rut {
    type Error = RutError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rut> for String {
    fn from(rut: Rut) -> Self {
        rut.to_string()
    }
}

/// Insert thousands separators into the body of a raw or normalized RUT.
///
/// `12345678-5` becomes `12.345.678-5`. The input is normalized first.
#[must_use]
pub fn format_with_separators(raw: &str) -> String {
    let (body, check_char) = split(raw);
    let digits: Vec<char> = body.chars().collect();

    let mut formatted = String::with_capacity(digits.len() + digits.len() / GROUP_DIGITS + 2);
    for (i, c) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % GROUP_DIGITS == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    formatted.push('-');
    if let Some(c) = check_char {
        formatted.push(c);
    }
    formatted
}
