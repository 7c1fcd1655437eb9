//! JSON type predicates
//!
//! Predicates that check which kind of JSON value a field holds.

use serde_json::Value;

use super::combinators::Predicate;
use super::result::PredicateResult;

/// The JSON kind a [`TypeCheck`] accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// A JSON string.
    String,
    /// A JSON number, integer or float.
    Number,
    /// A JSON object or array.
    Object,
    /// A JSON boolean.
    Boolean,
    /// A JSON array.
    Array,
}

impl Kind {
    fn matches(self, value: &Value) -> bool {
        match self {
            Kind::String => value.is_string(),
            Kind::Number => value.is_number(),
            Kind::Object => value.is_object() || value.is_array(),
            Kind::Boolean => value.is_boolean(),
            Kind::Array => value.is_array(),
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            Kind::String => "Not a valid string",
            Kind::Number => "Not a valid number",
            Kind::Object => "Not a valid object",
            Kind::Boolean => "Not a valid boolean",
            Kind::Array => "Not a valid array",
        }
    }
}

/// Predicate that checks the JSON kind of a value.
#[derive(Clone, Debug)]
pub struct TypeCheck {
    kind: Kind,
    message: String,
}

impl TypeCheck {
    fn new(kind: Kind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
        }
    }

    /// Replace the default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// The kind this predicate accepts.
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl Predicate for TypeCheck {
    #[inline]
    fn evaluate(&self, value: &Value) -> PredicateResult {
        PredicateResult::from_bool(self.kind.matches(value), self.message.as_str())
    }
}

/// Create a predicate that accepts JSON strings.
///
/// Default message: `"Not a valid string"`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// assert!(is_string().evaluate(&json!("")).is_success());
/// assert!(!is_string().evaluate(&json!(123)).is_success());
/// ```
pub fn is_string() -> TypeCheck {
    TypeCheck::new(Kind::String)
}

/// Create a predicate that accepts JSON numbers.
///
/// Default message: `"Not a valid number"`.
pub fn is_number() -> TypeCheck {
    TypeCheck::new(Kind::Number)
}

/// Create a predicate that accepts JSON objects and arrays.
///
/// Default message: `"Not a valid object"`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// assert!(is_object().evaluate(&json!({"a": 1})).is_success());
/// assert!(is_object().evaluate(&json!([1])).is_success());
/// assert!(!is_object().evaluate(&json!(null)).is_success());
/// ```
pub fn is_object() -> TypeCheck {
    TypeCheck::new(Kind::Object)
}

/// Create a predicate that accepts JSON booleans.
///
/// Default message: `"Not a valid boolean"`.
pub fn is_boolean() -> TypeCheck {
    TypeCheck::new(Kind::Boolean)
}

/// Create a predicate that accepts JSON arrays.
///
/// Default message: `"Not a valid array"`.
pub fn is_array() -> TypeCheck {
    TypeCheck::new(Kind::Array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_string() {
        assert!(is_string().evaluate(&json!("abc")).is_success());
        let r = is_string().evaluate(&json!(123));
        assert!(!r.is_success());
        assert_eq!(r.message(), "Not a valid string");
    }

    #[test]
    fn test_is_number() {
        assert!(is_number().evaluate(&json!(1)).is_success());
        assert!(is_number().evaluate(&json!(-1.5)).is_success());
        assert!(!is_number().evaluate(&json!("1")).is_success());
    }

    #[test]
    fn test_is_object_accepts_arrays() {
        assert!(is_object().evaluate(&json!({})).is_success());
        assert!(is_object().evaluate(&json!([])).is_success());
        assert!(!is_object().evaluate(&json!("{}")).is_success());
        assert!(!is_object().evaluate(&Value::Null).is_success());
    }

    #[test]
    fn test_is_boolean_and_array() {
        assert!(is_boolean().evaluate(&json!(false)).is_success());
        assert!(!is_boolean().evaluate(&json!(0)).is_success());
        assert!(is_array().evaluate(&json!([1])).is_success());
        assert!(!is_array().evaluate(&json!({})).is_success());
    }

    #[test]
    fn test_custom_message() {
        let r = is_number().with_message("age must be numeric").evaluate(&json!("x"));
        assert_eq!(r.message(), "age must be numeric");
        assert_eq!(is_number().kind(), Kind::Number);
    }
}
