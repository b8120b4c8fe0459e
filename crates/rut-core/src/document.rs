//! Identity document types offered next to the identifier field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RutError;

/// Document type selected for a billing identity.
///
/// Serialized as the single-character code the form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentType {
    /// Chilean RUT, the only type carrying a check digit
    #[default]
    #[serde(rename = "0")]
    Rut,
    #[serde(rename = "1")]
    Passport,
    #[serde(rename = "2")]
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [DocumentType::Rut, DocumentType::Passport, DocumentType::Other];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            DocumentType::Rut => "0",
            DocumentType::Passport => "1",
            DocumentType::Other => "2",
        }
    }

    /// Look up a document type by its form code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    /// Label shown in the selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Rut => "Rut",
            DocumentType::Passport => "Pasaporte",
            DocumentType::Other => "Otros",
        }
    }

    /// Whether identifiers of this type carry a module-11 check digit.
    #[must_use]
    pub fn requires_check(self) -> bool {
        self == DocumentType::Rut
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentType {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| RutError::UnknownDocumentType(s.to_string()))
    }
}
