//! # rut-core
//!
//! Module-11 validation for Chilean RUT identifiers entered in form fields.
//!
//! ## Checking
//!
//! [`check`] strips `.` and `-`, splits off the last character as the check
//! character, emits the canonical `BODY-D` form, and returns a [`Verdict`]:
//!
//! | Verdict | Cause | Message |
//! |---------|-------|---------|
//! | Valid | check digit matches (or check skipped) | (empty) |
//! | InvalidIncomplete | empty body | RUT Incompleto |
//! | InvalidChecksum | check digit mismatch | RUT Inválido |
//! | InvalidFormat | non-digit body or bad check character | RUT Inválido |
//!
//! ```rust
//! use rut_core::{check, Verdict};
//!
//! let outcome = check("12.345.678-5", false);
//! assert_eq!(outcome.normalized, "12345678-5");
//! assert_eq!(outcome.verdict, Verdict::Valid);
//! ```

pub mod billing;
pub mod checker;
pub mod checksum;
pub mod document;
pub mod error;
pub mod field;
pub mod invariants;
pub mod messages;
pub mod property;
pub mod rut;

pub use billing::{clean_id_number, receiver_rut, verify_id_number, GENERIC_RECEIVER_RUT};
pub use checker::{check, check_document, normalize, CheckOutcome, Verdict};
pub use checksum::{check_digit, CheckDigit};
pub use document::DocumentType;
pub use error::RutError;
pub use field::{check_field, ValidityField};
pub use invariants::{RutPropertyChecker, RutSamples};
pub use messages::ValidityMessages;
pub use property::{PropertyChecker, PropertyResult, PropertySummary};
pub use rut::{format_with_separators, Rut};
