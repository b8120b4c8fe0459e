//! # rut-dst
//!
//! Deterministic RUT fixtures for property checking.
//!
//! Every fixture stream is derived from a single seed, so a failing run is
//! reproduced by re-running with the same seed.
//!
//! ## Usage
//!
//! ```rust
//! use rut_core::{PropertyChecker, RutPropertyChecker};
//! use rut_dst::{GeneratorConfig, RutCorpus};
//!
//! let corpus = RutCorpus::generate(12345, GeneratorConfig::default(), 100).unwrap();
//! let checker = RutPropertyChecker::new(&corpus);
//! assert!(checker.all_hold());
//! ```
//!
//! ## Reproducibility
//!
//! To reproduce a failing test:
//! ```bash
//! RUT_SEED=12345 cargo test
//! ```

pub mod corpus;
pub mod generator;
pub mod random;

pub use corpus::RutCorpus;
pub use generator::{GeneratorConfig, RutGenerator};
pub use random::DeterministicRng;

use rut_core::RutError;

/// Environment variable holding the fixture seed.
pub const SEED_ENV_VAR: &str = "RUT_SEED";

/// Fixture errors.
#[derive(Debug, thiserror::Error)]
pub enum DstError {
    #[error("RUT_SEED must be a valid u64, got {0:?}")]
    InvalidSeed(String),

    #[error("Generator config error: {0}")]
    InvalidConfig(String),

    #[error("RUT error: {0}")]
    Rut(#[from] RutError),
}

/// Get the fixture seed from `RUT_SEED` or generate a random one.
///
/// Prints the seed for reproduction. Use `RUT_SEED=<seed>` to reproduce.
pub fn get_or_generate_seed() -> Result<u64, DstError> {
    match std::env::var(SEED_ENV_VAR) {
        Ok(s) => {
            let seed: u64 = s.trim().parse().map_err(|_| DstError::InvalidSeed(s.clone()))?;
            println!("{}={} (from environment)", SEED_ENV_VAR, seed);
            Ok(seed)
        }
        Err(_) => {
            let seed = rand::random::<u64>();
            println!("{}={} (randomly generated)", SEED_ENV_VAR, seed);
            Ok(seed)
        }
    }
}
