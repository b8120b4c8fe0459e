//! Seeded sample corpus for the checker's property suite.

use rut_core::RutSamples;

use crate::generator::{GeneratorConfig, RutGenerator};
use crate::random::DeterministicRng;
use crate::DstError;

/// Most samples of each kind a corpus may hold.
pub const SAMPLES_COUNT_MAX: u64 = 100_000;

/// Inputs every corpus includes regardless of seed.
const FIXED_RAW_INPUTS: [&str; 8] = ["", "-", ".", "k", "12345678-6", "7.593.831-6", "--1--", "P1234567"];

/// A reproducible set of valid, decorated, noisy and corrupted inputs.
#[derive(Debug, Clone)]
pub struct RutCorpus {
    seed: u64,
    valid: Vec<String>,
    raw: Vec<String>,
    corrupted: Vec<String>,
}

impl RutCorpus {
    /// Generate `samples_count` samples of each kind from `seed`.
    pub fn generate(seed: u64, config: GeneratorConfig, samples_count: u64) -> Result<Self, DstError> {
        if samples_count > SAMPLES_COUNT_MAX {
            return Err(DstError::InvalidConfig(format!(
                "samples_count {} exceeds {}",
                samples_count, SAMPLES_COUNT_MAX
            )));
        }

        let mut master_rng = DeterministicRng::new(seed);
        let mut valid_gen = RutGenerator::new(master_rng.fork(), config.clone())?;
        let mut noise_gen = RutGenerator::new(master_rng.fork(), config)?;

        let mut corpus = Self {
            seed,
            valid: Vec::new(),
            raw: FIXED_RAW_INPUTS.iter().map(|s| s.to_string()).collect(),
            corrupted: Vec::new(),
        };

        for _ in 0..samples_count {
            let rut = valid_gen.gen_valid()?;
            corpus.valid.push(rut.to_string());
            corpus.raw.push(valid_gen.decorate(&rut));
            corpus.corrupted.push(valid_gen.substitute(&rut));
            if let Some(transposed) = valid_gen.transpose(&rut) {
                corpus.corrupted.push(transposed);
            }
            corpus.raw.push(noise_gen.noise());
        }

        debug_assert!(corpus.valid.len() as u64 == samples_count);
        Ok(corpus)
    }

    /// Seed this corpus was generated from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RutSamples for RutCorpus {
    fn valid_canonical(&self) -> Vec<String> {
        self.valid.clone()
    }

    fn raw_inputs(&self) -> Vec<String> {
        self.raw.clone()
    }

    fn corrupted(&self) -> Vec<String> {
        self.corrupted.clone()
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rut_core::{PropertyChecker, RutPropertyChecker};

    #[test]
    fn test_default_corpus_holds_all_properties() {
        let corpus = RutCorpus::generate(20_261_019, GeneratorConfig::default(), 1_000).unwrap();

        let checker = RutPropertyChecker::new(&corpus);
        let summary = checker.summary();
        assert_eq!(summary.failed, 0, "{}", summary.format_report());
        assert_eq!(summary.total, 4);
    }

    #[test]
    fn test_short_body_corpus_holds_all_properties() {
        let corpus = RutCorpus::generate(424_242, GeneratorConfig::short_bodies(), 500).unwrap();

        let checker = RutPropertyChecker::new(&corpus);
        if let Err(failure) = checker.verify_all() {
            panic!("{}", failure.format_status());
        }
    }

    #[test]
    fn test_seeded_corpus_from_environment() {
        let seed = crate::get_or_generate_seed().unwrap();
        let corpus = RutCorpus::generate(seed, GeneratorConfig::decorated(), 200).unwrap();
        assert_eq!(corpus.seed(), seed);

        let checker = RutPropertyChecker::new(&corpus);
        assert!(checker.all_hold(), "{}", checker.summary().format_report());
    }

    #[test]
    fn test_same_seed_same_corpus() {
        let a = RutCorpus::generate(77, GeneratorConfig::default(), 50).unwrap();
        let b = RutCorpus::generate(77, GeneratorConfig::default(), 50).unwrap();
        assert_eq!(a.valid, b.valid);
        assert_eq!(a.raw, b.raw);
        assert_eq!(a.corrupted, b.corrupted);
    }

    #[test]
    fn test_corpus_contents() {
        let corpus = RutCorpus::generate(9, GeneratorConfig::default(), 20).unwrap();
        assert_eq!(corpus.valid_canonical().len(), 20);
        assert_eq!(corpus.raw_inputs().len(), FIXED_RAW_INPUTS.len() + 40);
        assert!(corpus.corrupted().len() >= 20);
        assert_eq!(RutSamples::seed(&corpus), Some(9));
    }

    #[test]
    fn test_rejects_oversized_corpus() {
        assert!(matches!(
            RutCorpus::generate(1, GeneratorConfig::default(), SAMPLES_COUNT_MAX + 1),
            Err(DstError::InvalidConfig(_))
        ));
    }
}
