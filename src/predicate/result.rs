//! The uniform result type produced by every predicate
//!
//! Every predicate and combinator in this crate returns a [`PredicateResult`],
//! so composing predicates never needs to inspect what kind of value a
//! wrapped predicate handed back.

/// Outcome of evaluating a single predicate against a single value.
///
/// The message is always present, even on success. The engine only reads it
/// when `success` is `false`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::PredicateResult;
///
/// let ok = PredicateResult::pass("Not a valid string");
/// assert!(ok.is_success());
///
/// let bad = PredicateResult::from_bool(false, "Empty String");
/// assert!(!bad.is_success());
/// assert_eq!(bad.message(), "Empty String");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredicateResult {
    /// Whether the value satisfied the predicate.
    pub success: bool,
    /// Diagnostic describing the predicate; consumed on failure.
    pub message: String,
}

impl PredicateResult {
    /// A successful result carrying `message`.
    #[inline]
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed result carrying `message`.
    #[inline]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Lift a plain boolean check into a result.
    #[inline]
    pub fn from_bool(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }

    /// Returns `true` if the value satisfied the predicate.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The message attached to this result.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for PredicateResult {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (any::<bool>(), "[a-zA-Z ]{0,24}")
            .prop_map(|(success, message)| PredicateResult::from_bool(success, message))
            .boxed()
    }
}
