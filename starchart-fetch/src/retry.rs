//! Retry strategy for GraphQL requests.

use std::time::Duration;

/// Strategy for retrying failed requests.
///
/// The default matches the fetch policy: 3 total attempts with exponential
/// backoff starting at 4 seconds, doubling per attempt, with every wait
/// clamped to the [4, 10] second range.
#[derive(Debug, Clone)]
pub struct RetryStrategy {
    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,
    /// Base delay between retries in seconds.
    pub base_delay_secs: u64,
    /// Lower bound on the delay between retries.
    pub min_delay_secs: u64,
    /// Upper bound on the delay between retries.
    pub max_delay_secs: u64,
}

impl RetryStrategy {
    /// Creates a new retry strategy with the default backoff bounds.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay_secs: 4,
            min_delay_secs: 4,
            max_delay_secs: 10,
        }
    }

    /// Disables waiting between attempts. Used in tests.
    pub fn no_backoff(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay_secs: 0,
            min_delay_secs: 0,
            max_delay_secs: 0,
        }
    }

    /// Sets the base delay.
    pub fn with_base_delay(mut self, secs: u64) -> Self {
        self.base_delay_secs = secs;
        self
    }

    /// Calculates the delay after a given (1-based) failed attempt.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay = self.base_delay_secs * 2u64.pow(attempt.saturating_sub(1));
        Duration::from_secs(delay.clamp(self.min_delay_secs, self.max_delay_secs))
    }
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_progression() {
        let strategy = RetryStrategy::default();

        assert_eq!(strategy.delay_for_attempt(1), Duration::from_secs(4));
        assert_eq!(strategy.delay_for_attempt(2), Duration::from_secs(8));
    }

    #[test]
    fn test_backoff_cap() {
        let strategy = RetryStrategy::default();

        // 4 * 2^2 = 16, clamped to the 10 second ceiling
        assert_eq!(strategy.delay_for_attempt(3), Duration::from_secs(10));
        assert_eq!(strategy.delay_for_attempt(8), Duration::from_secs(10));
    }

    #[test]
    fn test_backoff_floor() {
        let strategy = RetryStrategy::default().with_base_delay(1);

        // 1 * 2^0 = 1, raised to the 4 second floor
        assert_eq!(strategy.delay_for_attempt(1), Duration::from_secs(4));
    }

    #[test]
    fn test_no_backoff() {
        let strategy = RetryStrategy::no_backoff(3);
        assert_eq!(strategy.delay_for_attempt(1), Duration::from_secs(0));
        assert_eq!(strategy.max_attempts, 3);
    }
}
