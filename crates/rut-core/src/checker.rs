//! Form-field RUT checking: normalization plus a verdict.
//!
//! `check` never fails. It always emits the canonical `BODY-D` display form,
//! even for input it rejects, and reports the outcome as a [`Verdict`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checksum::{expected_value, CheckDigit};
use crate::document::DocumentType;
use crate::messages::ValidityMessages;

/// Characters removed before the body and check character are split.
pub const SEPARATORS: [char; 2] = ['.', '-'];

/// Outcome of checking one raw identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Check digit matches, or the check was skipped
    Valid,
    /// Nothing left for the body once separators are stripped
    InvalidIncomplete,
    /// Supplied check character differs from the computed one
    InvalidChecksum,
    /// Body holds a non-digit, or check character is not `0-9`/`K`
    InvalidFormat,
}

impl Verdict {
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }

    /// Validity message for this verdict; empty means valid.
    #[must_use]
    pub fn message(self, messages: &ValidityMessages) -> &str {
        match self {
            Verdict::Valid => "",
            Verdict::InvalidIncomplete => &messages.incomplete,
            Verdict::InvalidChecksum | Verdict::InvalidFormat => &messages.invalid,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Verdict::Valid => "VALID",
            Verdict::InvalidIncomplete => "INCOMPLETE",
            Verdict::InvalidChecksum => "CHECKSUM",
            Verdict::InvalidFormat => "FORMAT",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::Valid => "valid",
            Verdict::InvalidIncomplete => "incomplete",
            Verdict::InvalidChecksum => "checksum mismatch",
            Verdict::InvalidFormat => "malformed",
        };
        f.write_str(text)
    }
}

/// Normalized form of the input plus its verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Canonical `BODY-D` form (the raw input untouched when skipped)
    pub normalized: String,
    pub verdict: Verdict,
}

impl CheckOutcome {
    /// Format as a single-line status for logging.
    #[must_use]
    pub fn format_status(&self) -> String {
        format!("[{}] {}", self.verdict.tag(), self.normalized)
    }
}

/// Strip separators and split into body and uppercased check character.
///
/// The check character is the last remaining character; `None` only when
/// nothing remains.
#[must_use]
pub fn split(raw: &str) -> (String, Option<char>) {
    let mut body: String = raw.chars().filter(|c| !SEPARATORS.contains(c)).collect();
    let check_char = body.pop().map(|c| c.to_ascii_uppercase());
    (body, check_char)
}

/// Canonical `BODY-D` display form. Idempotent.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let (body, check_char) = split(raw);
    compose(&body, check_char)
}

fn compose(body: &str, check_char: Option<char>) -> String {
    let mut normalized = String::with_capacity(body.len() + 2);
    normalized.push_str(body);
    normalized.push('-');
    if let Some(c) = check_char {
        normalized.push(c);
    }
    normalized
}

/// Check a raw identifier.
///
/// With `skip_check` set the input is returned unchanged and `Valid`; the
/// caller uses this when the identifier belongs to another document type.
#[must_use]
pub fn check(raw: &str, skip_check: bool) -> CheckOutcome {
    if skip_check {
        return CheckOutcome {
            normalized: raw.to_string(),
            verdict: Verdict::Valid,
        };
    }

    let (body, check_char) = split(raw);
    let normalized = compose(&body, check_char);
    let verdict = evaluate(&body, check_char);

    debug_assert!(normalized.contains('-'), "Normalized form must carry a hyphen");
    CheckOutcome { normalized, verdict }
}

/// Check a raw identifier, skipping the checksum unless the document is a RUT.
#[must_use]
pub fn check_document(raw: &str, document_type: DocumentType) -> CheckOutcome {
    check(raw, !document_type.requires_check())
}

fn evaluate(body: &str, check_char: Option<char>) -> Verdict {
    if body.is_empty() {
        return Verdict::InvalidIncomplete;
    }

    let Some(supplied) = check_char.and_then(CheckDigit::from_char) else {
        return Verdict::InvalidFormat;
    };
    let Some(expected) = expected_value(body) else {
        return Verdict::InvalidFormat;
    };

    if supplied.comparison_value() == expected {
        Verdict::Valid
    } else {
        Verdict::InvalidChecksum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_incomplete() {
        let outcome = check("", false);
        assert_eq!(outcome.verdict, Verdict::InvalidIncomplete);
        assert_eq!(outcome.normalized, "-");
    }

    #[test]
    fn test_separators_only_is_incomplete() {
        for raw in [".", "-", "...-", ".-.-"] {
            let outcome = check(raw, false);
            assert_eq!(outcome.verdict, Verdict::InvalidIncomplete, "{:?}", raw);
            assert_eq!(outcome.normalized, "-");
        }
    }

    #[test]
    fn test_lone_check_character_is_incomplete() {
        let outcome = check("K", false);
        assert_eq!(outcome.verdict, Verdict::InvalidIncomplete);
        assert_eq!(outcome.normalized, "-K");

        let outcome = check(".-k", false);
        assert_eq!(outcome.verdict, Verdict::InvalidIncomplete);
        assert_eq!(outcome.normalized, "-K");
    }

    #[test]
    fn test_single_character_is_incomplete() {
        let outcome = check("5", false);
        assert_eq!(outcome.verdict, Verdict::InvalidIncomplete);
        assert_eq!(outcome.normalized, "-5");
    }

    #[test]
    fn test_known_valid_and_invalid() {
        assert_eq!(check("12345678-5", false).verdict, Verdict::Valid);
        assert_eq!(check("12345678-6", false).verdict, Verdict::InvalidChecksum);
    }

    #[test]
    fn test_separators_are_stripped() {
        let outcome = check("7.593.831-6", false);
        assert_eq!(outcome.normalized, "7593831-6");
        assert_eq!(outcome.verdict, Verdict::InvalidChecksum);

        let outcome = check("7.593.831-4", false);
        assert_eq!(outcome.normalized, "7593831-4");
        assert!(outcome.verdict.is_valid());
    }

    #[test]
    fn test_missing_hyphen_is_inserted() {
        let outcome = check("123456785", false);
        assert_eq!(outcome.normalized, "12345678-5");
        assert_eq!(outcome.verdict, Verdict::Valid);
    }

    #[test]
    fn test_letter_check_digit_any_case() {
        // 6 -> K, see checksum tests
        assert_eq!(check("6-K", false).verdict, Verdict::Valid);

        let outcome = check("6-k", false);
        assert_eq!(outcome.normalized, "6-K");
        assert_eq!(outcome.verdict, Verdict::Valid);
    }

    #[test]
    fn test_zero_check_digit() {
        assert_eq!(check("0-0", false).verdict, Verdict::Valid);
        assert_eq!(check("0-1", false).verdict, Verdict::InvalidChecksum);
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(check("12a45678-6", false).verdict, Verdict::InvalidFormat);
        assert_eq!(check("12345678-X", false).verdict, Verdict::InvalidFormat);
        assert_eq!(check(" 12345678-5", false).verdict, Verdict::InvalidFormat);
    }

    #[test]
    fn test_skip_check_passes_input_through() {
        for raw in ["", "garbage", "12345678-6", "P1234567"] {
            let outcome = check(raw, true);
            assert_eq!(outcome.verdict, Verdict::Valid);
            assert_eq!(outcome.normalized, raw);
        }
    }

    #[test]
    fn test_normalize_matches_check() {
        assert_eq!(normalize("12.345.678-k"), "12345678-K");
        assert_eq!(normalize("12.345.678-k"), check("12.345.678-k", false).normalized);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for raw in ["", "-", "5", "7.593.831-6", "12.345.678-k", "ab.c-d", "ñ-ü"] {
            let once = check(raw, false).normalized;
            let twice = check(&once, false).normalized;
            assert_eq!(once, twice, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_check_document() {
        let outcome = check_document("12345678-6", DocumentType::Passport);
        assert_eq!(outcome.verdict, Verdict::Valid);
        assert_eq!(outcome.normalized, "12345678-6");

        let outcome = check_document("12345678-6", DocumentType::Rut);
        assert_eq!(outcome.verdict, Verdict::InvalidChecksum);
    }

    #[test]
    fn test_format_status() {
        assert_eq!(check("12345678-5", false).format_status(), "[VALID] 12345678-5");
        assert_eq!(
            check("12.345.678-6", false).format_status(),
            "[CHECKSUM] 12345678-6"
        );
    }

    #[test]
    fn test_verdict_messages() {
        let messages = ValidityMessages::default();
        assert_eq!(Verdict::Valid.message(&messages), "");
        assert_eq!(Verdict::InvalidIncomplete.message(&messages), "RUT Incompleto");
        assert_eq!(Verdict::InvalidChecksum.message(&messages), "RUT Inválido");
        assert_eq!(Verdict::InvalidFormat.message(&messages), "RUT Inválido");
    }

    #[test]
    fn test_outcome_serializes() {
        let json = serde_json::to_value(check("12345678-6", false)).unwrap();
        assert_eq!(json["normalized"], "12345678-6");
        assert_eq!(json["verdict"], "invalid_checksum");
    }
}
