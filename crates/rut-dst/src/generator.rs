//! RUT fixture generation.
//!
//! Produces valid RUTs, the decorated forms users type into the field, and
//! corrupted variants modelling the transcription errors the check digit is
//! meant to catch:
//! - single-digit substitution (one body digit replaced by another)
//! - adjacent transposition (two neighbouring, different digits swapped)

use rut_core::Rut;

use crate::random::DeterministicRng;
use crate::DstError;

/// Most body digits a RUT can have.
pub const BODY_DIGITS_MAX: u64 = 8;

/// Characters used for free-form noise inputs.
const NOISE_ALPHABET: [char; 18] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'k', 'K', '.', '-', 'x', ' ', 'ñ', '_',
];

/// Longest noise input, in characters.
const NOISE_LENGTH_MAX: u64 = 14;

/// Configuration for fixture generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Fewest digits in a generated body
    pub body_digits_min: u64,
    /// Most digits in a generated body
    pub body_digits_max: u64,
    /// Probability of thousands separators in a decorated form
    pub separator_probability: f64,
    /// Probability of keeping the hyphen in a decorated form
    pub hyphen_probability: f64,
    /// Probability of writing a `K` check digit as `k`
    pub lowercase_k_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            body_digits_min: 1,
            body_digits_max: BODY_DIGITS_MAX,
            separator_probability: 0.5,
            hyphen_probability: 0.8,
            lowercase_k_probability: 0.5,
        }
    }
}

impl GeneratorConfig {
    /// Short bodies only, so `K` and `0` check digits come up often.
    #[must_use]
    pub fn short_bodies() -> Self {
        Self {
            body_digits_max: 3,
            ..Default::default()
        }
    }

    /// Every decoration applied, as a user pasting formatted RUTs would.
    #[must_use]
    pub fn decorated() -> Self {
        Self {
            body_digits_min: 4,
            separator_probability: 1.0,
            hyphen_probability: 1.0,
            lowercase_k_probability: 1.0,
            ..Default::default()
        }
    }

    /// Reject configurations that cannot produce assignable RUTs.
    pub fn validate(&self) -> Result<(), DstError> {
        if self.body_digits_min == 0 || self.body_digits_min > self.body_digits_max {
            return Err(DstError::InvalidConfig(format!(
                "body digits range {}..={} is empty or starts at zero",
                self.body_digits_min, self.body_digits_max
            )));
        }
        if self.body_digits_max > BODY_DIGITS_MAX {
            return Err(DstError::InvalidConfig(format!(
                "body_digits_max {} exceeds {}",
                self.body_digits_max, BODY_DIGITS_MAX
            )));
        }

        let probabilities = [
            self.separator_probability,
            self.hyphen_probability,
            self.lowercase_k_probability,
        ];
        if probabilities.iter().any(|p| !(0.0..=1.0).contains(p)) {
            return Err(DstError::InvalidConfig(
                "probabilities must be in [0.0, 1.0]".to_string(),
            ));
        }

        Ok(())
    }
}

/// Seeded generator of RUT fixtures.
pub struct RutGenerator {
    rng: DeterministicRng,
    config: GeneratorConfig,
}

impl RutGenerator {
    /// Create a generator, validating the config.
    pub fn new(rng: DeterministicRng, config: GeneratorConfig) -> Result<Self, DstError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Generate a body with no leading zero.
    pub fn gen_body(&mut self) -> u32 {
        let digits_count = self
            .rng
            .gen_range(self.config.body_digits_min..=self.config.body_digits_max);

        let mut body: u32 = self.rng.gen_range(1..10);
        for _ in 1..digits_count {
            body = body * 10 + self.rng.gen_range(0..10u32);
        }

        debug_assert!(body > 0);
        body
    }

    /// Generate a valid RUT.
    pub fn gen_valid(&mut self) -> Result<Rut, DstError> {
        let body = self.gen_body();
        Ok(Rut::new(body)?)
    }

    /// Render a RUT the way a user might type it.
    pub fn decorate(&mut self, rut: &Rut) -> String {
        let mut text = if self.rng.gen_bool(self.config.separator_probability) {
            rut.formatted()
        } else {
            rut.to_string()
        };

        if !self.rng.gen_bool(self.config.hyphen_probability) {
            text.retain(|c| c != '-');
        }
        if self.rng.gen_bool(self.config.lowercase_k_probability) {
            text = text.replace('K', "k");
        }
        text
    }

    /// Replace one body digit with a different digit.
    pub fn substitute(&mut self, rut: &Rut) -> String {
        let mut digits: Vec<u32> = body_digits(rut);
        let position = self.rng.gen_range(0..digits.len());
        let offset: u32 = self.rng.gen_range(1..10);
        digits[position] = (digits[position] + offset) % 10;

        debug_assert!(digits != body_digits(rut));
        compose(&digits, rut)
    }

    /// Swap two adjacent, different body digits.
    ///
    /// Returns `None` when the body has no such pair (e.g. `1111`).
    pub fn transpose(&mut self, rut: &Rut) -> Option<String> {
        let mut digits = body_digits(rut);
        let positions: Vec<usize> = (0..digits.len().saturating_sub(1))
            .filter(|&i| digits[i] != digits[i + 1])
            .collect();

        let position = *self.rng.choose(&positions)?;
        digits.swap(position, position + 1);
        Some(compose(&digits, rut))
    }

    /// Free-form text mixing digits, separators and junk.
    pub fn noise(&mut self) -> String {
        let length = self.rng.gen_range(0..=NOISE_LENGTH_MAX);
        (0..length)
            .filter_map(|_| self.rng.choose(&NOISE_ALPHABET).copied())
            .collect()
    }
}

fn body_digits(rut: &Rut) -> Vec<u32> {
    rut.body()
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

fn compose(digits: &[u32], rut: &Rut) -> String {
    let mut text: String = digits
        .iter()
        .filter_map(|d| char::from_digit(*d, 10))
        .collect();
    text.push('-');
    text.push(rut.check_digit().as_char());
    text
}
