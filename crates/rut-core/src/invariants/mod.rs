//! Behavioural invariants of the checker.
//!
//! Each module defines the properties an input corpus is checked against.

pub mod rut;

pub use rut::{RutPropertyChecker, RutSamples};
