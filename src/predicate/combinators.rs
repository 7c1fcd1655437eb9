//! Core predicate trait and combinators
//!
//! This module provides the foundational [`Predicate`] trait, the shared
//! handle stored in rule lists, and the two combinators that build new
//! predicates from existing ones: negation ([`not`]) and element-wise
//! application over a collection ([`all`]).

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::result::PredicateResult;

/// Default message of [`not`].
pub const NOT_MESSAGE: &str = "Predicate did not match";

/// Default message of [`all`].
pub const ALL_MESSAGE: &str = "Invalid item in collection";

/// A reusable check over a single field value.
///
/// Predicates are pure: evaluating one never mutates it, so a single
/// predicate can back any number of fields and validators at once.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// let p = is_string();
/// assert!(p.evaluate(&json!("hello")).is_success());
/// assert!(!p.evaluate(&json!(42)).is_success());
/// ```
pub trait Predicate: Send + Sync {
    /// Evaluate the predicate against `value`.
    fn evaluate(&self, value: &Value) -> PredicateResult;
}

// Blanket impl for closures
impl<F> Predicate for F
where
    F: Fn(&Value) -> PredicateResult + Send + Sync,
{
    #[inline]
    fn evaluate(&self, value: &Value) -> PredicateResult {
        self(value)
    }
}

/// A reference-counted, type-erased predicate.
///
/// This is the form a [`Validator`](crate::Validator) keeps in each field's
/// rule list. Cloning is cheap and clones evaluate the same predicate.
#[derive(Clone)]
pub struct SharedPredicate(Arc<dyn Predicate>);

impl SharedPredicate {
    /// Erase and share `predicate`.
    pub fn new<P: Predicate + 'static>(predicate: P) -> Self {
        SharedPredicate(Arc::new(predicate))
    }
}

impl Predicate for SharedPredicate {
    #[inline]
    fn evaluate(&self, value: &Value) -> PredicateResult {
        self.0.evaluate(value)
    }
}

impl fmt::Debug for SharedPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedPredicate(..)")
    }
}

/// Extension trait for predicate combinators.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// let no_strings = is_string().not();
/// assert!(no_strings.evaluate(&json!(1)).is_success());
///
/// let ids = is_uuid().all();
/// assert!(ids.evaluate(&json!([])).is_success());
/// ```
pub trait PredicateExt: Predicate + Sized {
    /// Invert the predicate. See [`not`].
    fn not(self) -> Not<Self> {
        not(self)
    }

    /// Apply the predicate to every element of a collection. See [`all`].
    fn all(self) -> All<Self> {
        all(self)
    }

    /// Erase the concrete type so the predicate can go into a rule list.
    fn shared(self) -> SharedPredicate
    where
        Self: 'static,
    {
        SharedPredicate::new(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

/// NOT combinator - inverts the wrapped predicate's success.
///
/// The wrapped predicate's message is discarded; the result always carries
/// this combinator's own message.
#[derive(Clone, Debug)]
pub struct Not<P> {
    inner: P,
    message: String,
}

impl<P> Not<P> {
    /// Replace the default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn evaluate(&self, value: &Value) -> PredicateResult {
        let inner = self.inner.evaluate(value);
        PredicateResult::from_bool(!inner.is_success(), self.message.as_str())
    }
}

/// Create a predicate that succeeds exactly when `predicate` fails.
///
/// Default message: `"Predicate did not match"`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// let p = not(is_not_empty_string()).with_message("must be blank");
/// assert!(p.evaluate(&json!("")).is_success());
///
/// let r = p.evaluate(&json!("x"));
/// assert!(!r.is_success());
/// assert_eq!(r.message(), "must be blank");
/// ```
pub fn not<P: Predicate>(predicate: P) -> Not<P> {
    Not {
        inner: predicate,
        message: NOT_MESSAGE.to_string(),
    }
}

/// ALL combinator - applies a predicate to every element of a collection.
#[derive(Clone, Debug)]
pub struct All<P> {
    inner: P,
    message: String,
}

impl<P> All<P> {
    /// Replace the default message.
    ///
    /// The message is reported when the field is not a collection and is
    /// carried by the successful result. A failing element reports its own
    /// result unchanged.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl<P: Predicate> Predicate for All<P> {
    fn evaluate(&self, value: &Value) -> PredicateResult {
        let first_failure = match value {
            Value::Array(items) => items
                .iter()
                .map(|item| self.inner.evaluate(item))
                .find(|r| !r.is_success()),
            Value::Object(entries) => entries
                .values()
                .map(|item| self.inner.evaluate(item))
                .find(|r| !r.is_success()),
            _ => return PredicateResult::fail(self.message.as_str()),
        };

        first_failure.unwrap_or_else(|| PredicateResult::pass(self.message.as_str()))
    }
}

/// Create a predicate that checks every element of a collection-valued field.
///
/// Arrays are walked in index order, objects in key order. Evaluation stops
/// at the first element whose result is unsuccessful and that result is
/// returned verbatim. Empty collections succeed. Any value that is neither an
/// array nor an object fails with this combinator's message.
///
/// Default message: `"Invalid item in collection"`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// let p = all(is_number());
/// assert!(p.evaluate(&json!([1, 2, 3])).is_success());
///
/// let r = p.evaluate(&json!([1, "two", 3]));
/// assert!(!r.is_success());
/// assert_eq!(r.message(), "Not a valid number");
/// ```
pub fn all<P: Predicate>(predicate: P) -> All<P> {
    All {
        inner: predicate,
        message: ALL_MESSAGE.to_string(),
    }
}

/// Predicate built from a plain boolean check and a message.
pub struct FromFn<F> {
    check: F,
    message: String,
}

impl<F> FromFn<F> {
    /// Replace the message given at construction.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl<F> Predicate for FromFn<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    #[inline]
    fn evaluate(&self, value: &Value) -> PredicateResult {
        PredicateResult::from_bool((self.check)(value), self.message.as_str())
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Lift a boolean check into a predicate that reports `message`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// let longer_than_five = from_fn(
///     |v| v.as_str().is_some_and(|s| s.len() > 5),
///     "length less than 5",
/// );
/// assert!(longer_than_five.evaluate(&json!("Dexter")).is_success());
/// assert!(!longer_than_five.evaluate(&json!("Dex")).is_success());
/// ```
pub fn from_fn<F>(check: F, message: impl Into<String>) -> FromFn<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    FromFn {
        check,
        message: message.into(),
    }
}
