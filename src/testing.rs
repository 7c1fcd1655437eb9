//! Testing utilities and helpers
//!
//! Assertion macros for [`ValidationOutcome`](crate::ValidationOutcome) and a
//! [`Spy`] predicate that counts how often it runs, for checking that the
//! engine skips predicates it should not reach.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::{assert_invalid, assert_valid, predicates, Validator};
//! use fieldcheck::predicate::*;
//! use fieldcheck::testing::Spy;
//! use serde_json::json;
//!
//! let spy = Spy::passing("unused");
//! let mut validator = Validator::new();
//! validator.add("age", true, predicates![is_number(), spy.clone()])?;
//!
//! assert_valid!(validator.validate(&json!({"age": 30})));
//! assert_invalid!(validator.validate(&json!({"age": "x"})), "age", "Not a valid number");
//! assert_eq!(spy.calls(), 1);
//! # Ok::<(), fieldcheck::RuleError>(())
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::predicate::{Predicate, PredicateResult};

/// A predicate that returns a fixed result and counts its invocations.
///
/// Clones share the counter, so keep one clone and hand the other to a
/// validator.
#[derive(Debug, Clone)]
pub struct Spy {
    result: PredicateResult,
    calls: Arc<AtomicUsize>,
}

impl Spy {
    /// A spy that always returns `result`.
    pub fn returning(result: PredicateResult) -> Self {
        Self {
            result,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A spy that always succeeds.
    pub fn passing(message: impl Into<String>) -> Self {
        Self::returning(PredicateResult::pass(message))
    }

    /// A spy that always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::returning(PredicateResult::fail(message))
    }

    /// How many times any clone of this spy has been evaluated.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Predicate for Spy {
    fn evaluate(&self, _value: &Value) -> PredicateResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Assert that an outcome is valid.
///
/// This macro will panic if the outcome is `Invalid`.
#[macro_export]
macro_rules! assert_valid {
    ($outcome:expr) => {
        match $outcome {
            $crate::ValidationOutcome::Valid => {}
            $crate::ValidationOutcome::Invalid(failure) => {
                panic!("Expected Valid, got Invalid: {:?}", failure);
            }
        }
    };
}

/// Assert that an outcome failed on `field`, optionally with `message`.
///
/// This macro will panic if the outcome is `Valid` or names another field.
#[macro_export]
macro_rules! assert_invalid {
    ($outcome:expr, $field:expr) => {
        match $outcome {
            $crate::ValidationOutcome::Invalid(failure) => {
                assert_eq!(failure.failed_property, $field);
            }
            $crate::ValidationOutcome::Valid => {
                panic!("Expected Invalid on {:?}, got Valid", $field);
            }
        }
    };
    ($outcome:expr, $field:expr, $message:expr) => {
        match $outcome {
            $crate::ValidationOutcome::Invalid(failure) => {
                assert_eq!(failure.failed_property, $field);
                assert_eq!(failure.message, $message);
            }
            $crate::ValidationOutcome::Valid => {
                panic!("Expected Invalid on {:?}, got Valid", $field);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationOutcome;
    use serde_json::json;

    #[test]
    fn spy_counts_calls_across_clones() {
        let spy = Spy::passing("ok");
        let copy = spy.clone();
        assert!(copy.evaluate(&json!(1)).is_success());
        assert!(copy.evaluate(&json!(2)).is_success());
        assert_eq!(spy.calls(), 2);
    }

    #[test]
    fn spy_returns_configured_result() {
        let spy = Spy::failing("boom");
        assert_eq!(spy.evaluate(&Value::Null), PredicateResult::fail("boom"));
    }

    #[test]
    fn assert_valid_macro() {
        assert_valid!(ValidationOutcome::Valid);
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(ValidationOutcome::invalid("a", "b"), "a");
        assert_invalid!(ValidationOutcome::invalid("a", "b"), "a", "b");
    }

    #[test]
    #[should_panic(expected = "Expected Valid, got Invalid")]
    fn assert_valid_panics_on_invalid() {
        assert_valid!(ValidationOutcome::invalid("a", "b"));
    }

    #[test]
    #[should_panic(expected = "Expected Invalid")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(ValidationOutcome::Valid, "a");
    }

    #[test]
    #[should_panic]
    fn assert_invalid_panics_on_other_field() {
        assert_invalid!(ValidationOutcome::invalid("a", "b"), "c");
    }
}
