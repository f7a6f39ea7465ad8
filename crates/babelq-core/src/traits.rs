use crate::value::Value;
use std::collections::BTreeSet;

///
/// FieldValue
///
/// Call-site conversion into a dynamic [`Value`], so condition maps and
/// predicate constructors accept plain Rust scalars, options, and vectors
/// without ceremony.
///

pub trait FieldValue {
    fn to_value(self) -> Value;
}

impl FieldValue for Value {
    fn to_value(self) -> Value {
        self
    }
}

impl FieldValue for &Value {
    fn to_value(self) -> Value {
        self.clone()
    }
}

impl FieldValue for () {
    fn to_value(self) -> Value {
        Value::None
    }
}

impl FieldValue for bool {
    fn to_value(self) -> Value {
        Value::Bool(self)
    }
}

impl FieldValue for i32 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl FieldValue for i64 {
    fn to_value(self) -> Value {
        Value::Int(self)
    }
}

impl FieldValue for u32 {
    fn to_value(self) -> Value {
        Value::Uint(u64::from(self))
    }
}

impl FieldValue for u64 {
    fn to_value(self) -> Value {
        Value::Uint(self)
    }
}

impl FieldValue for &str {
    fn to_value(self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FieldValue for String {
    fn to_value(self) -> Value {
        Value::Text(self)
    }
}

/// `Option` maps `None` onto the absent-marker.
impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::None,
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(self) -> Value {
        Value::List(self.into_iter().map(FieldValue::to_value).collect())
    }
}

///
/// FilterNode
///
/// Combinator surface the predicate algebra requires from a host filter
/// expression. The host owns leaf construction and the expression's
/// meaning; the algebra only ever combines nodes it was handed, so the
/// built tree stays opaque to this crate's core.
///

pub trait FilterNode: Sized {
    /// Conjunction of the given nodes.
    #[must_use]
    fn all(nodes: Vec<Self>) -> Self;

    /// Disjunction of the given nodes.
    #[must_use]
    fn any(nodes: Vec<Self>) -> Self;

    /// Logical negation.
    #[must_use]
    fn negate(self) -> Self;
}

///
/// TranslatedAttributes
///
/// Resolver answering whether an attribute is translated for the target
/// entity. The registry itself is host-owned; the core only consults it
/// when splitting an incoming condition map.
///

pub trait TranslatedAttributes {
    fn is_translated(&self, attribute: &str) -> bool;
}

impl TranslatedAttributes for BTreeSet<String> {
    fn is_translated(&self, attribute: &str) -> bool {
        self.contains(attribute)
    }
}

impl TranslatedAttributes for [&str] {
    fn is_translated(&self, attribute: &str) -> bool {
        self.contains(&attribute)
    }
}

impl<const N: usize> TranslatedAttributes for [&str; N] {
    fn is_translated(&self, attribute: &str) -> bool {
        self.as_slice().is_translated(attribute)
    }
}

impl<T: TranslatedAttributes + ?Sized> TranslatedAttributes for &T {
    fn is_translated(&self, attribute: &str) -> bool {
        (**self).is_translated(attribute)
    }
}
