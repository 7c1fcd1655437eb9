//! # Fieldcheck
//!
//! Small, composable validation for flat records.
//!
//! A record is any mapping from field name to JSON value. Validation is
//! declared per field: whether the field is required, plus an ordered list
//! of predicates built by the factories in [`predicate`]. A [`Validator`]
//! checks fields in registration order and reports the first failure.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldcheck::{predicates, Validator};
//! use fieldcheck::predicate::*;
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! validator
//!     .add("id", true, predicates![is_uuid()])?
//!     .add("name", true, predicates![is_string(), is_not_empty_string()])?
//!     .add("published", false, predicates![is_date(), is_date_before("2030-01-01")])?
//!     .add("tags", false, predicates![all(is_not_empty_string())])?;
//!
//! let outcome = validator.validate(&json!({
//!     "id": "9b2f5a7e-1c3d-4e5f-8a9b-0c1d2e3f4a5b",
//!     "name": "",
//! }));
//!
//! assert!(!outcome.is_success());
//! assert_eq!(outcome.failed_property(), Some("name"));
//! assert_eq!(outcome.message(), Some("Empty String"));
//! # Ok::<(), fieldcheck::RuleError>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod options;
pub mod outcome;
pub mod predicate;
pub mod record;
pub mod testing;
pub mod validator;

// Re-exports
pub use options::ValidatorOptions;
pub use outcome::{FieldFailure, RuleError, ValidationOutcome};
pub use predicate::{Predicate, PredicateResult, SharedPredicate};
pub use record::Record;
pub use validator::{FieldRule, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::options::ValidatorOptions;
    pub use crate::outcome::{FieldFailure, RuleError, ValidationOutcome};
    pub use crate::predicate::prelude::*;
    pub use crate::record::Record;
    pub use crate::validator::{FieldRule, Validator};
    pub use crate::predicates;
}
