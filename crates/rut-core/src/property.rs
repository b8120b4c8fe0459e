//! Property verification types.
//!
//! Each property names one behavioural guarantee of the checker. Failures
//! carry the offending input and, when sampled from a seeded generator, the
//! seed that reproduces it.

/// Result of checking a single property.
#[derive(Debug, Clone)]
pub struct PropertyResult {
    /// Human-readable property name (e.g., "NormalizationIdempotent")
    pub name: &'static str,

    /// Whether the property holds
    pub holds: bool,

    /// Description of violation if property doesn't hold
    pub violation: Option<String>,

    /// Input that violated the property
    pub input: Option<String>,

    /// Seed of the sample generator, for reproduction
    pub seed: Option<u64>,

    /// Number of inputs examined
    pub samples_count: u64,
}

impl PropertyResult {
    /// Create a passing property result.
    #[must_use]
    pub fn pass(name: &'static str, samples_count: u64) -> Self {
        debug_assert!(!name.is_empty(), "Property name must not be empty");

        Self {
            name,
            holds: true,
            violation: None,
            input: None,
            seed: None,
            samples_count,
        }
    }

    /// Create a failing property result.
    #[must_use]
    pub fn fail(name: &'static str, input: &str, violation: String) -> Self {
        debug_assert!(!name.is_empty(), "Property name must not be empty");
        debug_assert!(!violation.is_empty(), "Violation description must not be empty");

        Self {
            name,
            holds: false,
            violation: Some(violation),
            input: Some(input.to_string()),
            seed: None,
            samples_count: 1,
        }
    }

    /// Attach the generator seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Format as a single-line status for logging.
    #[must_use]
    pub fn format_status(&self) -> String {
        debug_assert!(!self.name.is_empty());

        if self.holds {
            format!("[PASS] {} ({} samples)", self.name, self.samples_count)
        } else {
            let seed = self
                .seed
                .map(|s| format!(" RUT_SEED={}", s))
                .unwrap_or_default();
            format!(
                "[FAIL] {} input={:?}{}: {}",
                self.name,
                self.input.as_deref().unwrap_or(""),
                seed,
                self.violation.as_deref().unwrap_or("unknown")
            )
        }
    }
}

/// Trait for verifying properties against a set of samples.
pub trait PropertyChecker {
    /// Check all properties and return results.
    ///
    /// Returns a vector of `PropertyResult`, one for each property.
    /// Even passing properties are included for completeness.
    fn check_all(&self) -> Vec<PropertyResult>;

    /// Verify all properties, returning the first failure.
    fn verify_all(&self) -> Result<(), PropertyResult> {
        for result in self.check_all() {
            if !result.holds {
                return Err(result);
            }
        }
        Ok(())
    }

    /// Check if all properties hold.
    fn all_hold(&self) -> bool {
        self.check_all().iter().all(|r| r.holds)
    }

    /// Get a summary of all property check results.
    fn summary(&self) -> PropertySummary {
        let results = self.check_all();
        let passed = results.iter().filter(|r| r.holds).count() as u64;
        let failed = results.iter().filter(|r| !r.holds).count() as u64;
        let total = results.len() as u64;

        debug_assert!(passed + failed == total);

        PropertySummary {
            passed,
            failed,
            total,
            results,
        }
    }
}

/// Summary of property check results.
#[derive(Debug, Clone)]
pub struct PropertySummary {
    /// Number of properties that passed
    pub passed: u64,
    /// Number of properties that failed
    pub failed: u64,
    /// Total number of properties checked
    pub total: u64,
    /// Individual results
    pub results: Vec<PropertyResult>,
}

impl PropertySummary {
    /// Format as a report string.
    #[must_use]
    pub fn format_report(&self) -> String {
        let mut report = format!(
            "Property Check Summary: {}/{} passed\n",
            self.passed, self.total
        );

        for result in &self.results {
            report.push_str(&result.format_status());
            report.push('\n');
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_result_pass() {
        let result = PropertyResult::pass("ValidAccepted", 10);
        assert!(result.holds);
        assert!(result.violation.is_none());
        assert!(result.input.is_none());
    }

    #[test]
    fn test_property_result_fail() {
        let result = PropertyResult::fail(
            "ValidAccepted",
            "12345678-5",
            "rejected as checksum mismatch".to_string(),
        )
        .with_seed(Some(42));
        assert!(!result.holds);
        assert_eq!(result.input.as_deref(), Some("12345678-5"));
        assert_eq!(result.seed, Some(42));
    }

    #[test]
    fn test_format_status() {
        let pass = PropertyResult::pass("Test", 3);
        assert_eq!(pass.format_status(), "[PASS] Test (3 samples)");

        let fail = PropertyResult::fail("Test", "1-9", "error".to_string()).with_seed(Some(7));
        assert_eq!(fail.format_status(), "[FAIL] Test input=\"1-9\" RUT_SEED=7: error");
    }

    struct Fixed(Vec<PropertyResult>);

    impl PropertyChecker for Fixed {
        fn check_all(&self) -> Vec<PropertyResult> {
            self.0.clone()
        }
    }

    #[test]
    fn test_summary_and_verify_all() {
        let checker = Fixed(vec![
            PropertyResult::pass("A", 1),
            PropertyResult::fail("B", "x", "broken".to_string()),
        ]);

        assert!(!checker.all_hold());
        assert_eq!(checker.verify_all().unwrap_err().name, "B");

        let summary = checker.summary();
        assert_eq!((summary.passed, summary.failed, summary.total), (1, 1, 2));
        assert!(summary.format_report().starts_with("Property Check Summary: 1/2 passed\n"));
    }
}
