//! # Regform Testing
//!
//! Testing utilities and helpers for the regform architecture.
//!
//! This crate provides:
//! - Mock implementations of environment traits (deterministic clock)
//! - A fluent Given-When-Then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use regform_testing::{ReducerTest, test_clock};
//!
//! ReducerTest::new(FormReducer::new())
//!     .with_env(FormEnvironment::new(test_clock(), mock_client()))
//!     .given_state(FormState::default())
//!     .when_action(FormAction::SetFirstName("Amy".into()))
//!     .then_state(|state| assert_eq!(state.fields.first_name, "Amy"))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use regform_core::environment::Clock;

mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests.
    ///
    /// Always returns the same time, making tests reproducible.
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which should never
    /// happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }
}
