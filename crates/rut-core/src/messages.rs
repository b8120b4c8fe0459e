//! Validity message catalog handed to the form field.

use serde::{Deserialize, Serialize};

use crate::error::RutError;

/// Messages rendered for failing verdicts. Valid fields get an empty message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidityMessages {
    /// Shown when the body is empty
    pub incomplete: String,
    /// Shown on checksum mismatch or malformed input
    pub invalid: String,
}

impl Default for ValidityMessages {
    fn default() -> Self {
        Self {
            incomplete: "RUT Incompleto".to_string(),
            invalid: "RUT Inválido".to_string(),
        }
    }
}

impl ValidityMessages {
    /// Load a catalog from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, RutError> {
        let messages = serde_json::from_str(json)?;
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_partial_override() {
        let messages = ValidityMessages::from_json(r#"{"invalid": "RUT no válido"}"#).unwrap();
        assert_eq!(messages.invalid, "RUT no válido");
        assert_eq!(messages.incomplete, "RUT Incompleto");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            ValidityMessages::from_json("not json"),
            Err(RutError::ConfigError(_))
        ));
    }
}
