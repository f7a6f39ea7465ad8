use crate::{
    traits::{FieldValue, FilterNode},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr};

///
/// Predicate AST
///
/// Pure representation of host filter expressions. This layer carries no
/// storage semantics: translation backends emit `Compare` leaves over
/// whatever column paths their storage shape requires, and the combination
/// algebra never looks inside the nodes it is handed.
///

///
/// Cmp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Cmp {
    Eq,
    Ne,
    In,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ComparePredicate {
    pub field: String,
    pub op: Cmp,
    pub value: Value,
}

impl ComparePredicate {
    fn new(field: impl Into<String>, op: Cmp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, Cmp::Eq, value)
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, Cmp::Ne, value)
    }

    #[must_use]
    pub fn in_(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::new(field, Cmp::In, Value::List(values))
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Predicate {
    #[default]
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
    IsNull { field: String },
    IsMissing { field: String },
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::Compare(ComparePredicate::eq(field, value.to_value()))
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::Compare(ComparePredicate::ne(field, value.to_value()))
    }

    #[must_use]
    pub fn in_(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::Compare(ComparePredicate::in_(field, values))
    }

    #[must_use]
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::IsNull {
            field: field.into(),
        }
    }

    #[must_use]
    pub fn is_missing(field: impl Into<String>) -> Self {
        Self::IsMissing {
            field: field.into(),
        }
    }
}

impl FilterNode for Predicate {
    fn all(nodes: Vec<Self>) -> Self {
        Self::And(nodes)
    }

    fn any(nodes: Vec<Self>) -> Self {
        Self::Or(nodes)
    }

    fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitAnd for &Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Self) -> Self::Output {
        Predicate::And(vec![self.clone(), rhs.clone()])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl BitOr for &Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Self) -> Self::Output {
        Predicate::Or(vec![self.clone(), rhs.clone()])
    }
}
