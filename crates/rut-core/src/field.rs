//! Adaptor between the checker and an input element.
//!
//! The browser glue implements [`ValidityField`] over the real element; the
//! checker writes back the canonical form and a custom-validity message.

use crate::checker::{check, Verdict};
use crate::document::DocumentType;
use crate::messages::ValidityMessages;

/// An editable form field with a custom-validity message.
pub trait ValidityField {
    /// Current text of the field.
    fn value(&self) -> &str;

    /// Replace the text of the field.
    fn set_value(&mut self, value: String);

    /// Set the validity message. Empty marks the field valid.
    fn set_custom_validity(&mut self, message: &str);
}

/// Check a field in place.
///
/// When `document_type` names a non-RUT document the field is marked valid
/// and its text left alone. Otherwise the normalized text is written back,
/// valid or not, and the verdict's message is set.
pub fn check_field<F: ValidityField>(
    field: &mut F,
    document_type: Option<DocumentType>,
    messages: &ValidityMessages,
) -> Verdict {
    if document_type.is_some_and(|d| !d.requires_check()) {
        field.set_custom_validity("");
        return Verdict::Valid;
    }

    let outcome = check(field.value(), false);
    field.set_value(outcome.normalized);
    field.set_custom_validity(outcome.verdict.message(messages));
    outcome.verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct MockField {
        value: String,
        validity: Option<String>,
        writes_count: u64,
    }

    impl MockField {
        fn with_value(value: &str) -> Self {
            Self {
                value: value.to_string(),
                ..Default::default()
            }
        }
    }

    impl ValidityField for MockField {
        fn value(&self) -> &str {
            &self.value
        }

        fn set_value(&mut self, value: String) {
            self.writes_count += 1;
            self.value = value;
        }

        fn set_custom_validity(&mut self, message: &str) {
            self.validity = Some(message.to_string());
        }
    }

    #[test]
    fn test_valid_field_is_reformatted() {
        let mut field = MockField::with_value("12.345.678-5");
        let verdict = check_field(&mut field, None, &ValidityMessages::default());

        assert_eq!(verdict, Verdict::Valid);
        assert_eq!(field.value, "12345678-5");
        assert_eq!(field.validity.as_deref(), Some(""));
    }

    #[test]
    fn test_invalid_field_still_reformatted() {
        let mut field = MockField::with_value("12.345.678-6");
        let verdict = check_field(&mut field, Some(DocumentType::Rut), &ValidityMessages::default());

        assert_eq!(verdict, Verdict::InvalidChecksum);
        assert_eq!(field.value, "12345678-6");
        assert_eq!(field.validity.as_deref(), Some("RUT Inválido"));
    }

    #[test]
    fn test_empty_field_is_incomplete() {
        let mut field = MockField::with_value("");
        let messages = ValidityMessages {
            incomplete: "Falta el RUT".to_string(),
            ..Default::default()
        };
        let verdict = check_field(&mut field, None, &messages);

        assert_eq!(verdict, Verdict::InvalidIncomplete);
        assert_eq!(field.value, "-");
        assert_eq!(field.validity.as_deref(), Some("Falta el RUT"));
    }

    #[test]
    fn test_other_document_skips_check() {
        let mut field = MockField::with_value("P-1234567");
        let verdict = check_field(&mut field, Some(DocumentType::Passport), &ValidityMessages::default());

        assert_eq!(verdict, Verdict::Valid);
        assert_eq!(field.value, "P-1234567");
        assert_eq!(field.writes_count, 0);
        assert_eq!(field.validity.as_deref(), Some(""));
    }
}
