//! String predicates
//!
//! This module provides predicates for string-valued fields: non-emptiness,
//! version-4 UUIDs and URLs. Every predicate here fails on non-string values.

use serde_json::Value;
use url::{Host, Url};
use uuid::{Uuid, Variant};

use super::combinators::Predicate;
use super::result::PredicateResult;

/// Predicate that checks a value is a non-empty string.
#[derive(Clone, Debug)]
pub struct NotEmptyString {
    message: String,
}

impl NotEmptyString {
    /// Replace the default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Predicate for NotEmptyString {
    #[inline]
    fn evaluate(&self, value: &Value) -> PredicateResult {
        let ok = value.as_str().is_some_and(|s| !s.is_empty());
        PredicateResult::from_bool(ok, self.message.as_str())
    }
}

/// Create a predicate that checks a value is a string other than `""`.
///
/// Default message: `"Empty String"`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// assert!(is_not_empty_string().evaluate(&json!("hello")).is_success());
/// assert!(!is_not_empty_string().evaluate(&json!("")).is_success());
/// ```
pub fn is_not_empty_string() -> NotEmptyString {
    NotEmptyString {
        message: "Empty String".to_string(),
    }
}

/// Predicate that checks a value is a hyphenated version-4 UUID.
#[derive(Clone, Debug)]
pub struct IsUuid {
    message: String,
}

impl IsUuid {
    /// Replace the default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Predicate for IsUuid {
    #[inline]
    fn evaluate(&self, value: &Value) -> PredicateResult {
        let ok = value.as_str().is_some_and(is_uuid_v4);
        PredicateResult::from_bool(ok, self.message.as_str())
    }
}

// Only the 8-4-4-4-12 form is 36 characters long.
fn is_uuid_v4(s: &str) -> bool {
    if s.len() != 36 {
        return false;
    }
    match Uuid::try_parse(s) {
        Ok(id) => id.get_version_num() == 4 && id.get_variant() == Variant::RFC4122,
        Err(_) => false,
    }
}

/// Create a predicate that checks a value is a version-4 UUID string.
///
/// Case-insensitive. Braced, URN and unhyphenated forms are rejected.
///
/// Default message: `"Not a valid UUID(v4)"`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// let p = is_uuid();
/// assert!(p.evaluate(&json!("6f1c2a0e-3b7d-4c8e-9a1f-2d3e4f5a6b7c")).is_success());
/// assert!(!p.evaluate(&json!("Not A Valid UUID")).is_success());
/// ```
pub fn is_uuid() -> IsUuid {
    IsUuid {
        message: "Not a valid UUID(v4)".to_string(),
    }
}

/// Predicate that checks a value is an http, https or ftp URL.
#[derive(Clone, Debug)]
pub struct IsUrl {
    message: String,
}

impl IsUrl {
    /// Replace the default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Predicate for IsUrl {
    #[inline]
    fn evaluate(&self, value: &Value) -> PredicateResult {
        let ok = value.as_str().is_some_and(is_web_url);
        PredicateResult::from_bool(ok, self.message.as_str())
    }
}

fn is_web_url(s: &str) -> bool {
    if s.is_empty() || s.contains(char::is_whitespace) {
        return false;
    }

    // without `://` a leading `host:port` or `user:pass@` would parse as a scheme
    let parsed = if s.contains("://") {
        Url::parse(s)
    } else {
        Url::parse(&format!("http://{s}"))
    };
    let Ok(url) = parsed else {
        return false;
    };

    if !matches!(url.scheme(), "http" | "https" | "ftp") {
        return false;
    }

    match url.host() {
        Some(Host::Domain(domain)) => has_top_level_domain(domain),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

fn has_top_level_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return false;
    }
    let tld = labels[labels.len() - 1];
    tld.starts_with("xn--") || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

/// Create a predicate that checks a value is a URL.
///
/// The scheme may be omitted, in which case `http` is assumed. The host must
/// be an IP address or a domain ending in a top-level label.
///
/// Default message: `"Not a valid URL"`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::predicate::*;
/// use serde_json::json;
///
/// assert!(is_url().evaluate(&json!("https://example.com/a?b=c")).is_success());
/// assert!(is_url().evaluate(&json!("example.com")).is_success());
/// assert!(!is_url().evaluate(&json!("not a url")).is_success());
/// ```
pub fn is_url() -> IsUrl {
    IsUrl {
        message: "Not a valid URL".to_string(),
    }
}
