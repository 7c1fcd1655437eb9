//! Validator configuration

/// Options fixed when a [`Validator`](crate::Validator) is created.
///
/// # Examples
///
/// ```
/// use fieldcheck::{Validator, ValidatorOptions};
///
/// let validator = Validator::with_options(ValidatorOptions {
///     null_is_absent: true,
/// });
/// assert!(validator.options().null_is_absent);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidatorOptions {
    /// Treat a JSON `null` exactly like a missing field.
    ///
    /// Off by default: `null` is a present value and runs the field's
    /// predicates.
    pub null_is_absent: bool,
}

impl ValidatorOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`null_is_absent`](Self::null_is_absent).
    pub fn null_is_absent(mut self, yes: bool) -> Self {
        self.null_is_absent = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert!(!ValidatorOptions::new().null_is_absent);
        assert!(ValidatorOptions::new().null_is_absent(true).null_is_absent);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_with_defaults() {
        let opts: ValidatorOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ValidatorOptions::default());

        let opts: ValidatorOptions = serde_json::from_str(r#"{"null_is_absent": true}"#).unwrap();
        assert!(opts.null_is_absent);
    }
}
