//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::predicate::prelude::*;
//! use serde_json::json;
//!
//! assert!(is_number().not().evaluate(&json!("1")).is_success());
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt, SharedPredicate};
pub use super::result::PredicateResult;

// Combinators
pub use super::combinators::{all, from_fn, not};

// Factories
pub use super::date::{is_date, is_date_after, is_date_before, is_date_with_format, DateFormat};
pub use super::string::{is_not_empty_string, is_url, is_uuid};
pub use super::types::{is_array, is_boolean, is_number, is_object, is_string};
