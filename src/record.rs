//! Field lookup over the data being validated
//!
//! A [`Validator`](crate::Validator) never owns the data it checks. It only
//! asks a [`Record`] for the value stored under each registered field name.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Read-only access to named field values.
///
/// `None` means the field is absent. A present JSON `null` is returned as
/// `Some(&Value::Null)`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::Record;
/// use serde_json::json;
///
/// let data = json!({"name": "Dexter", "nickname": null});
/// assert_eq!(data.field("name"), Some(&json!("Dexter")));
/// assert_eq!(data.field("nickname"), Some(&json!(null)));
/// assert_eq!(data.field("age"), None);
/// ```
pub trait Record {
    /// The value stored under `name`, if any.
    fn field(&self, name: &str) -> Option<&Value>;
}

impl Record for Map<String, Value> {
    #[inline]
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Objects expose their entries; every other JSON value has no fields.
impl Record for Value {
    #[inline]
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(name))
    }
}

impl<S: BuildHasher> Record for HashMap<String, Value, S> {
    #[inline]
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Record for BTreeMap<String, Value> {
    #[inline]
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<S: BuildHasher> Record for IndexMap<String, Value, S> {
    #[inline]
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<R: Record + ?Sized> Record for &R {
    #[inline]
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_object_lookup() {
        let v = json!({"a": 1});
        assert_eq!(v.field("a"), Some(&json!(1)));
        assert_eq!(v.field("b"), None);
    }

    #[test]
    fn test_non_object_value_has_no_fields() {
        assert_eq!(json!([1, 2]).field("0"), None);
        assert_eq!(json!("a").field("a"), None);
        assert_eq!(Value::Null.field("a"), None);
    }

    #[test]
    fn test_map_impls_agree() {
        let mut hash = HashMap::new();
        hash.insert("k".to_string(), json!("v"));
        let btree: BTreeMap<_, _> = hash.clone().into_iter().collect();
        let index: IndexMap<_, _> = hash.clone().into_iter().collect();
        let map: Map<String, Value> = hash.clone().into_iter().collect();

        assert_eq!(hash.field("k"), Some(&json!("v")));
        assert_eq!(btree.field("k"), Some(&json!("v")));
        assert_eq!(index.field("k"), Some(&json!("v")));
        assert_eq!(map.field("k"), Some(&json!("v")));
    }

    #[test]
    fn test_null_is_present() {
        let v = json!({"a": null});
        assert_eq!(v.field("a"), Some(&Value::Null));
    }
}
