use crate::{
    traits::{FieldValue, TranslatedAttributes},
    value::Value,
};
use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "json")]
use thiserror::Error as ThisError;

///
/// ConditionMap
///
/// Attribute → value filter specification passed into filter-building
/// calls. Shaped identically to the host's native filter argument: each
/// entry is a scalar, a sequence of scalars, or the absent-marker.
///
/// Predicate construction consumes translated keys destructively: after a
/// successful build the map retains exactly the entries the core did not
/// recognize as translated. Callers must not reuse the original map
/// expecting it to remain intact, and must not share one map across
/// concurrent constructions.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Deserialize, Eq, PartialEq, Serialize)]
pub struct ConditionMap(BTreeMap<String, Value>);

impl ConditionMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a condition, converting the value at the call site.
    pub fn insert(&mut self, attribute: impl Into<String>, value: impl FieldValue) {
        self.0.insert(attribute.into(), value.to_value());
    }

    /// Builder-style insert for literal map construction.
    #[must_use]
    pub fn with(mut self, attribute: impl Into<String>, value: impl FieldValue) -> Self {
        self.insert(attribute, value);
        self
    }

    /// Intersection of this map's keys with the resolver's translated set.
    ///
    /// Returns `None` when no key is translated. That `None` short-circuits
    /// every downstream step: the map must then reach the ordinary filter
    /// path completely unmodified, including that path's own handling of
    /// input it owns.
    #[must_use]
    pub fn extract_attributes(
        &self,
        resolver: &impl TranslatedAttributes,
    ) -> Option<BTreeSet<String>> {
        let keys: BTreeSet<String> = self
            .0
            .keys()
            .filter(|key| resolver.is_translated(key))
            .cloned()
            .collect();

        if keys.is_empty() { None } else { Some(keys) }
    }
}

impl<K: Into<String>, V: FieldValue> FromIterator<(K, V)> for ConditionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.to_value()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: FieldValue, const N: usize> From<[(K, V); N]> for ConditionMap {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

///
/// ConditionError
///
/// Rejections raised while converting host-native JSON filter input into a
/// condition map. Raised at the boundary, before any predicate exists.
///

#[cfg(feature = "json")]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConditionError {
    #[error("filter input must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("unsupported filter value for '{key}': {found}")]
    UnsupportedValue { key: String, found: &'static str },
}

#[cfg(feature = "json")]
impl TryFrom<serde_json::Value> for ConditionMap {
    type Error = ConditionError;

    fn try_from(input: serde_json::Value) -> Result<Self, Self::Error> {
        let serde_json::Value::Object(entries) = input else {
            return Err(ConditionError::NotAnObject {
                found: json_kind(&input),
            });
        };

        let mut map = Self::new();
        for (key, value) in entries {
            let converted = convert_json(&key, value)?;
            map.0.insert(key, converted);
        }

        Ok(map)
    }
}

#[cfg(feature = "json")]
fn convert_json(key: &str, value: serde_json::Value) -> Result<Value, ConditionError> {
    match value {
        serde_json::Value::Null => Ok(Value::None),
        serde_json::Value::Bool(v) => Ok(Value::Bool(v)),
        serde_json::Value::Number(n) => {
            // i64 first: keeps negative and small positive integers in one
            // representation.
            if let Some(v) = n.as_i64() {
                Ok(Value::Int(v))
            } else if let Some(v) = n.as_u64() {
                Ok(Value::Uint(v))
            } else {
                Err(ConditionError::UnsupportedValue {
                    key: key.to_string(),
                    found: "float",
                })
            }
        }
        serde_json::Value::String(v) => Ok(Value::Text(v)),
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| convert_json(key, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        serde_json::Value::Object(_) => Err(ConditionError::UnsupportedValue {
            key: key.to_string(),
            found: "object",
        }),
    }
}

#[cfg(feature = "json")]
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_only() -> BTreeSet<String> {
        BTreeSet::from(["title".to_string()])
    }

    #[test]
    fn extract_returns_intersection() {
        let map = ConditionMap::from([("title", "Hello"), ("author_id", "5")]);
        let keys = map.extract_attributes(&title_only()).unwrap();
        assert_eq!(keys, BTreeSet::from(["title".to_string()]));
    }

    #[test]
    fn extract_signals_no_match_on_disjoint_keys() {
        let map = ConditionMap::from([("author_id", 5_i64)]);
        assert_eq!(map.extract_attributes(&title_only()), None);
    }

    #[test]
    fn extract_signals_no_match_on_empty_map() {
        assert_eq!(ConditionMap::new().extract_attributes(&title_only()), None);
    }

    #[test]
    fn extract_accepts_slice_resolvers() {
        let map = ConditionMap::from([("title", "Hello")]);
        assert!(map.extract_attributes(&["title", "body"]).is_some());
    }

    #[test]
    fn insert_converts_at_the_call_site() {
        let mut map = ConditionMap::new();
        map.insert("count", 3_i64);
        map.insert("tags", vec!["a", "b"]);
        map.insert("draft", Option::<&str>::None);

        assert_eq!(map.get("count"), Some(&Value::Int(3)));
        assert_eq!(
            map.get("tags"),
            Some(&Value::List(vec![
                Value::Text("a".to_string()),
                Value::Text("b".to_string()),
            ]))
        );
        assert_eq!(map.get("draft"), Some(&Value::None));
    }

    #[cfg(feature = "json")]
    mod json {
        use super::*;

        #[test]
        fn accepts_object_input() {
            let input = serde_json::json!({
                "title": "Hello",
                "author_id": 5,
                "tags": ["a", "b"],
                "subtitle": null,
            });

            let map = ConditionMap::try_from(input).unwrap();
            assert_eq!(map.get("title"), Some(&Value::Text("Hello".to_string())));
            assert_eq!(map.get("author_id"), Some(&Value::Int(5)));
            assert_eq!(map.get("subtitle"), Some(&Value::None));
        }

        #[test]
        fn rejects_non_object_input() {
            let err = ConditionMap::try_from(serde_json::json!([1, 2])).unwrap_err();
            assert_eq!(err, ConditionError::NotAnObject { found: "array" });
        }

        #[test]
        fn rejects_nested_objects() {
            let err =
                ConditionMap::try_from(serde_json::json!({"meta": {"a": 1}})).unwrap_err();
            assert_eq!(
                err,
                ConditionError::UnsupportedValue {
                    key: "meta".to_string(),
                    found: "object",
                }
            );
        }
    }
}
