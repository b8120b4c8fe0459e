//! Server-side identifier verification for billing identities.
//!
//! The form already formats the identifier, but the payment backend cleans
//! and re-checks it before issuing an electronic receipt.

use crate::checker::check;
use crate::document::DocumentType;
use crate::error::RutError;

/// Receiver RUT used on receipts when the buyer has no RUT.
pub const GENERIC_RECEIVER_RUT: &str = "66666666-6";

/// Longest receiver RUT the receipt service accepts.
pub const RECEIVER_RUT_LENGTH_MAX: usize = 10;

/// Keep only digits and `K`/`k`, then insert `-` before the last character.
///
/// An input with nothing left cleans to `-`.
#[must_use]
pub fn clean_id_number(raw: &str) -> String {
    let mut kept: Vec<char> = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, 'K' | 'k'))
        .collect();

    let hyphen_at = kept.len().saturating_sub(1);
    kept.insert(hyphen_at, '-');
    kept.into_iter().collect()
}

/// Verify a submitted identifier for the given document type.
///
/// RUTs are cleaned and must check valid; the cleaned form is returned.
/// Other document types pass through unchanged.
pub fn verify_id_number(document_type: DocumentType, id_number: &str) -> Result<String, RutError> {
    if !document_type.requires_check() {
        return Ok(id_number.to_string());
    }

    let cleaned = clean_id_number(id_number);
    let outcome = check(&cleaned, false);
    if !outcome.verdict.is_valid() {
        return Err(RutError::FailedValidation {
            id_number: cleaned,
            verdict: outcome.verdict,
        });
    }

    Ok(outcome.normalized)
}

/// RUT to print as the receipt's receiver.
pub fn receiver_rut(document_type: DocumentType, id_number: &str) -> Result<String, RutError> {
    let rut = if document_type == DocumentType::Rut {
        id_number
    } else {
        GENERIC_RECEIVER_RUT
    };

    if rut.chars().count() > RECEIVER_RUT_LENGTH_MAX {
        return Err(RutError::ReceiverRutTooLong {
            rut: rut.to_string(),
            length_max: RECEIVER_RUT_LENGTH_MAX,
        });
    }

    Ok(rut.to_string())
}
