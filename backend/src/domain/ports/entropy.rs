//! Port for injected randomness.
//!
//! Itinerary rating jitter and the payment gateway draw treat randomness as
//! an explicit capability rather than ambient global state, so tests can
//! force either branch deterministically with a seeded adapter.

/// Source of randomness for the domain.
#[cfg_attr(test, mockall::automock)]
pub trait Entropy: Send + Sync {
    /// Draw a uniform value in `[0.0, 1.0)`.
    fn unit(&self) -> f64;

    /// Produce an uppercase alphanumeric token of the given length.
    fn token(&self, length: usize) -> String;
}

/// Fixture implementation for tests that do not exercise randomness.
///
/// `unit` always returns `0.0` (so probabilistic draws take the success
/// branch at any non-zero rate) and tokens are a run of `A`s.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEntropy;

impl Entropy for FixtureEntropy {
    fn unit(&self) -> f64 {
        0.0
    }

    fn token(&self, length: usize) -> String {
        "A".repeat(length)
    }
}
