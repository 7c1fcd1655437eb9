//! Results of running a [`Validator`](crate::Validator) over a record
//!
//! Validation failures are values, not errors raised from `validate`. A
//! failed outcome names the field that failed and carries the message of the
//! rule that rejected it. [`ValidationOutcome::into_result`] converts an
//! outcome into a `Result` for callers that want to use `?`.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{FieldFailure, ValidationOutcome};
//!
//! let outcome = ValidationOutcome::invalid("name", "name is not present");
//! assert!(!outcome.is_success());
//! assert_eq!(outcome.failed_property(), Some("name"));
//!
//! let err: FieldFailure = outcome.into_result().unwrap_err();
//! assert_eq!(err.to_string(), "name: name is not present");
//! ```

use crate::predicate::PredicateResult;

/// The field that failed validation and why.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{failed_property}: {message}")]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FieldFailure {
    /// Name of the field whose rule failed.
    pub failed_property: String,
    /// Message of the failing rule.
    pub message: String,
}

impl FieldFailure {
    /// Create a failure for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            failed_property: field.into(),
            message: message.into(),
        }
    }

    /// The failure reported when a required field has no value.
    pub fn missing(field: &str) -> Self {
        Self::new(field, format!("{field} is not present"))
    }

    /// Attach `field` to a failed predicate result.
    pub fn from_result(field: &str, result: PredicateResult) -> Self {
        Self::new(field, result.message)
    }
}

/// Overall result of validating one record.
///
/// # Examples
///
/// ```
/// use fieldcheck::ValidationOutcome;
///
/// let ok = ValidationOutcome::Valid;
/// assert!(ok.is_success());
/// assert_eq!(ok.message(), None);
/// assert_eq!(ok.failed_property(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every rule passed.
    Valid,
    /// The first field whose rule failed.
    Invalid(FieldFailure),
}

impl ValidationOutcome {
    /// Shorthand for an `Invalid` outcome.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationOutcome::Invalid(FieldFailure::new(field, message))
    }

    /// Returns `true` if every rule passed.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Message of the failing rule, if any.
    pub fn message(&self) -> Option<&str> {
        self.failure().map(|f| f.message.as_str())
    }

    /// Name of the failing field, if any.
    pub fn failed_property(&self) -> Option<&str> {
        self.failure().map(|f| f.failed_property.as_str())
    }

    /// The failure, if any.
    pub fn failure(&self) -> Option<&FieldFailure> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(failure) => Some(failure),
        }
    }

    /// Convert into a `Result`.
    pub fn into_result(self) -> Result<(), FieldFailure> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(failure) => Err(failure),
        }
    }
}

impl From<FieldFailure> for ValidationOutcome {
    fn from(failure: FieldFailure) -> Self {
        ValidationOutcome::Invalid(failure)
    }
}

impl From<Result<(), FieldFailure>> for ValidationOutcome {
    fn from(result: Result<(), FieldFailure>) -> Self {
        match result {
            Ok(()) => ValidationOutcome::Valid,
            Err(failure) => ValidationOutcome::Invalid(failure),
        }
    }
}

// {"success": true} or {"success": false, "message": .., "failedProperty": ..}
#[cfg(feature = "serde")]
impl serde::Serialize for ValidationOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        match self {
            ValidationOutcome::Valid => {
                let mut state = serializer.serialize_struct("ValidationOutcome", 1)?;
                state.serialize_field("success", &true)?;
                state.end()
            }
            ValidationOutcome::Invalid(failure) => serde::Serialize::serialize(failure, serializer),
        }
    }
}

// {"success": false, "message": .., "failedProperty": ..}
#[cfg(feature = "serde")]
impl serde::Serialize for FieldFailure {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FieldFailure", 3)?;
        state.serialize_field("success", &false)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("failedProperty", &self.failed_property)?;
        state.end()
    }
}

/// Errors raised while registering rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Field names must be non-empty.
    #[error("field name must not be empty")]
    EmptyFieldName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message() {
        let f = FieldFailure::missing("email");
        assert_eq!(f.failed_property, "email");
        assert_eq!(f.message, "email is not present");
    }

    #[test]
    fn test_from_result_keeps_message() {
        let f = FieldFailure::from_result("id", PredicateResult::fail("Not a valid UUID(v4)"));
        assert_eq!(f, FieldFailure::new("id", "Not a valid UUID(v4)"));
    }

    #[test]
    fn test_outcome_accessors() {
        let bad = ValidationOutcome::invalid("age", "Not a valid number");
        assert!(!bad.is_success());
        assert_eq!(bad.message(), Some("Not a valid number"));
        assert_eq!(bad.failed_property(), Some("age"));
        assert!(ValidationOutcome::Valid.failure().is_none());
    }

    #[test]
    fn test_result_round_trip() {
        assert_eq!(ValidationOutcome::Valid.into_result(), Ok(()));
        let failure = FieldFailure::new("a", "b");
        let outcome: ValidationOutcome = Err(failure.clone()).into();
        assert_eq!(outcome, ValidationOutcome::Invalid(failure));
    }

    #[test]
    fn test_rule_error_display() {
        assert_eq!(
            RuleError::EmptyFieldName.to_string(),
            "field name must not be empty"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_outcome_wire_shape() {
        let ok = serde_json::to_value(ValidationOutcome::Valid).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true}));

        let bad = serde_json::to_value(ValidationOutcome::invalid("id", "nope")).unwrap();
        assert_eq!(
            bad,
            serde_json::json!({"success": false, "message": "nope", "failedProperty": "id"})
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_failure_wire_shape() {
        let failure = FieldFailure::missing("email");
        let wire = serde_json::to_value(&failure).unwrap();
        assert_eq!(
            wire,
            serde_json::json!({
                "success": false,
                "message": "email is not present",
                "failedProperty": "email"
            })
        );

        let back: FieldFailure = serde_json::from_value(wire).unwrap();
        assert_eq!(back, failure);
    }
}
