//! The validation engine
//!
//! A [`Validator`] accumulates one [`FieldRule`] per field name and then
//! checks any number of records against them. Fields are checked in the
//! order they were first registered, and a field's predicates run in the
//! order they were given. The first failure ends the check.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{predicates, Validator};
//! use fieldcheck::predicate::*;
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! validator
//!     .add("id", true, predicates![is_uuid()])?
//!     .add("homepage", false, predicates![is_string(), is_url()])?;
//!
//! let outcome = validator.validate(&json!({"id": "not-a-uuid"}));
//! assert_eq!(outcome.failed_property(), Some("id"));
//! assert_eq!(outcome.message(), Some("Not a valid UUID(v4)"));
//!
//! let outcome = validator.validate(&json!({"homepage": "https://example.com"}));
//! assert_eq!(outcome.message(), Some("id is not present"));
//! # Ok::<(), fieldcheck::RuleError>(())
//! ```

use indexmap::IndexMap;
use serde_json::Value;

use crate::options::ValidatorOptions;
use crate::outcome::{FieldFailure, RuleError, ValidationOutcome};
use crate::predicate::{Predicate, PredicateResult, SharedPredicate};
use crate::record::Record;

/// Build the ordered predicate list taken by [`Validator::add`].
///
/// Each expression must be a [`Predicate`](crate::predicate::Predicate); it
/// is wrapped in a [`SharedPredicate`].
///
/// # Example
///
/// ```
/// use fieldcheck::predicates;
/// use fieldcheck::predicate::*;
///
/// let list = predicates![is_string(), is_not_empty_string()];
/// assert_eq!(list.len(), 2);
/// ```
#[macro_export]
macro_rules! predicates {
    ($($predicate:expr),* $(,)?) => {
        ::std::vec![$($crate::predicate::SharedPredicate::new($predicate)),*]
    };
}

/// Whether a field must be present, and the predicates its value must pass.
#[derive(Clone, Debug, Default)]
pub struct FieldRule {
    required: bool,
    predicates: Vec<SharedPredicate>,
}

impl FieldRule {
    /// Create a rule from a presence flag and an ordered predicate list.
    pub fn new(required: bool, predicates: Vec<SharedPredicate>) -> Self {
        Self {
            required,
            predicates,
        }
    }

    /// A rule for a field that must be present.
    pub fn required() -> Self {
        Self::new(true, Vec::new())
    }

    /// A rule for a field that may be absent.
    pub fn optional() -> Self {
        Self::new(false, Vec::new())
    }

    /// Append a predicate; it runs after those already added.
    pub fn with<P: Predicate + 'static>(mut self, predicate: P) -> Self {
        self.predicates.push(SharedPredicate::new(predicate));
        self
    }

    /// Whether the field must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The predicates, in evaluation order.
    pub fn predicates(&self) -> &[SharedPredicate] {
        &self.predicates
    }

    /// Run the predicates over `value`, stopping at the first failure.
    pub fn check(&self, value: &Value) -> Result<(), PredicateResult> {
        self.predicates
            .iter()
            .map(|p| p.evaluate(value))
            .find(|r| !r.is_success())
            .map_or(Ok(()), Err)
    }
}

/// A per-instance set of field rules.
///
/// Registration (`add`, `add_rule`) takes `&mut self`; validation takes
/// `&self` and mutates nothing, so a fully built validator can be shared
/// across threads and used for any number of records.
#[derive(Clone, Debug, Default)]
pub struct Validator {
    rules: IndexMap<String, FieldRule>,
    options: ValidatorOptions,
}

impl Validator {
    /// Create an empty validator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty validator with `options`.
    pub fn with_options(options: ValidatorOptions) -> Self {
        Self {
            rules: IndexMap::new(),
            options,
        }
    }

    /// The options this validator was created with.
    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Register the rule for `field`.
    ///
    /// `predicates` run in the given order. An empty list accepts any present
    /// value. Registering a field a second time replaces its rule outright;
    /// the field keeps its original place in the check order.
    ///
    /// # Errors
    ///
    /// [`RuleError::EmptyFieldName`] if `field` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{predicates, Validator};
    /// use fieldcheck::predicate::*;
    /// use serde_json::json;
    ///
    /// let mut validator = Validator::new();
    /// validator.add("name", true, predicates![is_number()])?;
    /// validator.add("name", true, predicates![is_string()])?;
    ///
    /// assert!(validator.validate(&json!({"name": "Dexter"})).is_success());
    /// # Ok::<(), fieldcheck::RuleError>(())
    /// ```
    pub fn add(
        &mut self,
        field: impl Into<String>,
        required: bool,
        predicates: Vec<SharedPredicate>,
    ) -> Result<&mut Self, RuleError> {
        self.add_rule(field, FieldRule::new(required, predicates))
    }

    /// Register a prebuilt [`FieldRule`] for `field`. Same semantics as
    /// [`add`](Self::add).
    pub fn add_rule(
        &mut self,
        field: impl Into<String>,
        rule: FieldRule,
    ) -> Result<&mut Self, RuleError> {
        let field = field.into();
        if field.is_empty() {
            return Err(RuleError::EmptyFieldName);
        }

        #[cfg(feature = "tracing")]
        {
            let replaced = self.rules.get_index_of(&field).is_some();
            tracing::trace!(field = %field, replaced, "registered field rule");
        }
        self.rules.insert(field, rule);

        Ok(self)
    }

    /// The rule registered for `field`.
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    /// Registered field names, in check order.
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.keys().map(String::as_str)
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no field has been registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check `record`, stopping at the first field that fails.
    ///
    /// For each field in registration order: a missing required field fails
    /// with `"<field> is not present"`; a missing optional field is skipped
    /// without running its predicates; a present value runs the predicates in
    /// order and the first failing result is reported for that field.
    pub fn validate<R: Record + ?Sized>(&self, record: &R) -> ValidationOutcome {
        let checked = self
            .rules
            .iter()
            .try_for_each(|(field, rule)| self.check_field(record, field, rule));

        match checked {
            Ok(()) => ValidationOutcome::Valid,
            Err(failure) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    field = %failure.failed_property,
                    message = %failure.message,
                    "record failed validation"
                );
                ValidationOutcome::Invalid(failure)
            }
        }
    }

    /// Check every field of `record` and collect each failing field.
    ///
    /// Each field still stops at its own first failing predicate. An empty
    /// vector means the record is valid.
    pub fn validate_all<R: Record + ?Sized>(&self, record: &R) -> Vec<FieldFailure> {
        self.rules
            .iter()
            .filter_map(|(field, rule)| self.check_field(record, field, rule).err())
            .collect()
    }

    fn lookup<'r, R: Record + ?Sized>(&self, record: &'r R, field: &str) -> Option<&'r Value> {
        record
            .field(field)
            .filter(|value| !(self.options.null_is_absent && value.is_null()))
    }

    fn check_field<R: Record + ?Sized>(
        &self,
        record: &R,
        field: &str,
        rule: &FieldRule,
    ) -> Result<(), FieldFailure> {
        match self.lookup(record, field) {
            None if rule.required => Err(FieldFailure::missing(field)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(field, "optional field absent, skipping");
                Ok(())
            }
            Some(value) => rule
                .check(value)
                .map_err(|result| FieldFailure::from_result(field, result)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{is_number, is_string, is_uuid, PredicateExt};
    use crate::testing::Spy;
    use serde_json::json;

    fn min_len(n: usize, message: &'static str) -> impl Predicate + Clone {
        move |v: &Value| {
            PredicateResult::from_bool(v.as_str().is_some_and(|s| s.len() > n), message)
        }
    }

    fn max_len(n: usize, message: &'static str) -> impl Predicate + Clone {
        move |v: &Value| {
            PredicateResult::from_bool(v.as_str().is_some_and(|s| s.len() < n), message)
        }
    }

    #[test]
    fn test_validate_passes_all_predicates() {
        let mut v = Validator::new();
        v.add(
            "name",
            true,
            predicates![
                min_len(5, "length less than 5"),
                max_len(10, "length greater than 10")
            ],
        )
        .unwrap();

        assert!(v.validate(&json!({"name": "Dexter"})).is_success());
    }

    #[test]
    fn test_first_failing_predicate_reported() {
        let mut v = Validator::new();
        v.add(
            "name",
            true,
            predicates![
                min_len(5, "length less than 5"),
                max_len(10, "length greater than 10")
            ],
        )
        .unwrap();

        let outcome = v.validate(&json!({"name": "Dex"}));
        assert_eq!(outcome, ValidationOutcome::invalid("name", "length less than 5"));

        let outcome = v.validate(&json!({"name": "Dexter Morgan"}));
        assert_eq!(outcome.message(), Some("length greater than 10"));
    }

    #[test]
    fn test_required_without_predicates() {
        let mut v = Validator::new();
        v.add("name", true, predicates![]).unwrap();

        assert!(v.validate(&json!({"name": "Dexter"})).is_success());

        let outcome = v.validate(&json!({}));
        assert!(!outcome.is_success());
        assert_eq!(outcome.failed_property(), Some("name"));
        assert_eq!(outcome.message(), Some("name is not present"));
    }

    #[test]
    fn test_optional_absent_skips_predicates() {
        let spy = Spy::failing("should not run");
        let mut v = Validator::new();
        v.add("name", false, predicates![spy.clone()]).unwrap();

        assert!(v.validate(&json!({})).is_success());
        assert_eq!(spy.calls(), 0);
    }

    #[test]
    fn test_optional_present_is_checked() {
        let mut v = Validator::new();
        v.add("age", false, predicates![is_number()]).unwrap();
        assert_eq!(
            v.validate(&json!({"age": "ten"})),
            ValidationOutcome::invalid("age", "Not a valid number")
        );
    }

    #[test]
    fn test_predicates_after_failure_not_called() {
        let later = Spy::passing("later");
        let mut v = Validator::new();
        v.add("id", true, predicates![is_uuid(), later.clone()])
            .unwrap();

        assert!(!v.validate(&json!({"id": "nope"})).is_success());
        assert_eq!(later.calls(), 0);
    }

    #[test]
    fn test_fields_checked_in_registration_order() {
        let later = Spy::passing("later");
        let mut v = Validator::new();
        v.add("b", true, predicates![is_number()])
            .unwrap()
            .add("a", true, predicates![later.clone()])
            .unwrap();

        let outcome = v.validate(&json!({"a": 1, "b": "x"}));
        assert_eq!(outcome.failed_property(), Some("b"));
        assert_eq!(later.calls(), 0);
        assert_eq!(v.fields().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_missing_required_wins_over_later_fields() {
        let mut v = Validator::new();
        v.add("first", true, predicates![]).unwrap();
        v.add("second", true, predicates![is_number()]).unwrap();

        let outcome = v.validate(&json!({"second": "not a number"}));
        assert_eq!(outcome.failed_property(), Some("first"));
    }

    #[test]
    fn test_re_add_replaces_rule_and_keeps_position() {
        let mut v = Validator::new();
        v.add("x", true, predicates![is_number()]).unwrap();
        v.add("y", true, predicates![]).unwrap();
        v.add("x", false, predicates![is_string()]).unwrap();

        assert_eq!(v.len(), 2);
        assert_eq!(v.rule("x").map(|r| r.predicates().len()), Some(1));
        assert_eq!(v.rule("x").map(FieldRule::is_required), Some(false));
        assert_eq!(v.fields().collect::<Vec<_>>(), vec!["x", "y"]);

        assert!(v.validate(&json!({"x": "text", "y": 0})).is_success());
        assert!(v.validate(&json!({"y": 0})).is_success());
    }

    #[test]
    fn test_empty_field_name_rejected() {
        let mut v = Validator::new();
        assert_eq!(
            v.add("", true, predicates![]).err(),
            Some(RuleError::EmptyFieldName)
        );
        assert!(v.is_empty());
    }

    #[test]
    fn test_null_is_present_by_default() {
        let mut v = Validator::new();
        v.add("name", true, predicates![is_string()]).unwrap();
        assert_eq!(
            v.validate(&json!({"name": null})),
            ValidationOutcome::invalid("name", "Not a valid string")
        );
    }

    #[test]
    fn test_null_is_absent_option() {
        let mut v = Validator::with_options(ValidatorOptions::new().null_is_absent(true));
        v.add("name", true, predicates![is_string()]).unwrap();
        v.add("nick", false, predicates![is_string()]).unwrap();

        assert_eq!(
            v.validate(&json!({"name": null})).message(),
            Some("name is not present")
        );
        assert!(v.validate(&json!({"name": "a", "nick": null})).is_success());
    }

    #[test]
    fn test_add_rule_builder() {
        let mut v = Validator::new();
        v.add_rule("tags", FieldRule::required().with(is_string().all()))
            .unwrap();

        assert!(v.validate(&json!({"tags": ["a", "b"]})).is_success());
        assert_eq!(
            v.validate(&json!({"tags": ["a", 2]})),
            ValidationOutcome::invalid("tags", "Not a valid string")
        );
    }

    #[test]
    fn test_validate_all_collects_each_field() {
        let mut v = Validator::new();
        v.add("a", true, predicates![]).unwrap();
        v.add("b", true, predicates![is_number()]).unwrap();
        v.add("c", false, predicates![is_string()]).unwrap();

        let failures = v.validate_all(&json!({"b": "x", "c": "ok"}));
        assert_eq!(
            failures,
            vec![
                FieldFailure::missing("a"),
                FieldFailure::new("b", "Not a valid number"),
            ]
        );
        assert!(v.validate_all(&json!({"a": 1, "b": 2})).is_empty());
    }

    #[test]
    fn test_shared_predicate_across_validators() {
        let shared = is_uuid().shared();
        let mut users = Validator::new();
        let mut orders = Validator::new();
        users.add("id", true, vec![shared.clone()]).unwrap();
        orders.add("user_id", true, vec![shared]).unwrap();

        assert!(!users.validate(&json!({"id": 1})).is_success());
        assert!(!orders.validate(&json!({"user_id": 1})).is_success());
    }

    #[test]
    fn test_validator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
    }
}
