#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Value
///
/// Dynamic filter value accepted by condition maps.
///
/// `None` is the absent-marker: "no value recorded for this attribute".
/// Lists carry the multi-value form of a condition; everything else is a
/// scalar. The representation is deliberately small: filter input is
/// wire-shaped data, not the host's full type system.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Text(String),
    List(Vec<Self>),
}

impl Value {
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Normalize a value into a sequence of elements.
    ///
    /// Wrapping rules used by predicate construction: the absent-marker
    /// yields the empty sequence, lists yield their elements, scalars yield
    /// a singleton.
    #[must_use]
    pub fn into_sequence(self) -> Vec<Self> {
        match self {
            Self::None => Vec::new(),
            Self::List(items) => items,
            scalar => vec![scalar],
        }
    }

    /// Text rendering under the string-coercion comparison contract:
    /// stored and target values compare as text, and the absent-marker
    /// renders as the empty string.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
