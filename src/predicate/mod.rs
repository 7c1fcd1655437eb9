//! Predicate factories and combinators
//!
//! Every factory in this module returns a predicate: a pure check over a
//! single JSON value that reports a [`PredicateResult`]. Predicates carry a
//! default message which `with_message` replaces, and compose through the
//! [`not`] and [`all`] combinators.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::predicate::*;
//! use serde_json::json;
//!
//! let ids = all(is_uuid());
//! assert!(ids
//!     .evaluate(&json!(["0b9b4c52-7f2c-4f3e-8d5e-4a1b2c3d4e5f"]))
//!     .is_success());
//!
//! let r = not(is_string()).with_message("must not be text").evaluate(&json!("x"));
//! assert!(!r.is_success());
//! assert_eq!(r.message(), "must not be text");
//! ```

mod combinators;
mod date;
mod result;
mod string;
mod types;

pub mod prelude;

// Re-export core trait and result
pub use combinators::{Predicate, PredicateExt, SharedPredicate};
pub use result::PredicateResult;

// Re-export combinators
pub use combinators::{all, from_fn, not, All, FromFn, Not, ALL_MESSAGE, NOT_MESSAGE};

// Re-export type predicates
pub use types::{is_array, is_boolean, is_number, is_object, is_string, Kind, TypeCheck};

// Re-export string predicates
pub use string::{is_not_empty_string, is_url, is_uuid, IsUrl, IsUuid, NotEmptyString};

// Re-export date predicates
pub use date::{
    is_date, is_date_after, is_date_before, is_date_with_format, parse_iso8601, parse_lenient,
    DateBound, DateFormat, IsDate,
};
