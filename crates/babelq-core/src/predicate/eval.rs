use crate::{
    predicate::ast::{Cmp, ComparePredicate, Predicate},
    value::Value,
};
use std::collections::BTreeMap;

///
/// FieldPresence
///
/// Result of reading a field from a row during evaluation. Distinguishes a
/// missing field from a present field whose value is the absent-marker.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    /// Field exists and has a value (including `Value::None`).
    Present(Value),
    /// Field is not present on the row.
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value exposing fields by name, decoupling
/// predicate evaluation from concrete record types.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}

/// Evaluate a predicate against a single row.
///
/// Pure runtime evaluation: no schema access, no planning. Missing fields
/// never satisfy a comparison, and `IsNull` matches only a present
/// absent-marker.
#[must_use]
pub fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,

        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child)),
        Predicate::Not(inner) => !eval(row, inner),

        Predicate::Compare(cmp) => eval_compare(row, cmp),

        Predicate::IsNull { field } => {
            matches!(row.field(field), FieldPresence::Present(Value::None))
        }
        Predicate::IsMissing { field } => matches!(row.field(field), FieldPresence::Missing),
    }
}

fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &ComparePredicate) -> bool {
    let FieldPresence::Present(actual) = row.field(&cmp.field) else {
        return false;
    };

    match cmp.op {
        Cmp::Eq => actual == cmp.value,
        Cmp::Ne => actual != cmp.value,
        Cmp::In => match &cmp.value {
            Value::List(items) => items.contains(&actual),
            _ => false,
        },
    }
}
