use crate::{locale::Locale, traits::FilterNode, value::Value};
use serde::{Deserialize, Serialize};

///
/// TranslationBackend
///
/// Two-operation capability a storage shape must implement for translated
/// attributes. The combination algebra invokes these but never defines
/// them; comparison semantics live entirely behind the returned nodes, so
/// the same algebra serves every column shape.
///
/// Contract:
/// - `matches`: node that holds iff the stored translation of `attribute`
///   for `locale` equals `value`. Both sides compare as text; use
///   [`Value::to_text`] when encoding the target.
/// - `has_locale`: node that holds iff any value (the empty string
///   included) is recorded for `attribute` at `locale`.
///
/// Both operations are required. An adapter that cannot express one does
/// not implement the trait, so the gap surfaces where the adapter is
/// wired up rather than on first invocation.
///

pub trait TranslationBackend {
    /// Host filter expression this backend emits leaves for.
    type Node: FilterNode;

    fn matches(&self, attribute: &str, value: &Value, locale: &Locale) -> Self::Node;

    fn has_locale(&self, attribute: &str, locale: &Locale) -> Self::Node;
}

///
/// ColumnAffix
///
/// Prefix/suffix pair a storage adapter applies to derive the physical
/// column backing a translated attribute.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ColumnAffix {
    pub prefix: String,
    pub suffix: String,
}

impl ColumnAffix {
    #[must_use]
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Physical column name for a translated attribute.
    #[must_use]
    pub fn column_name(&self, attribute: &str) -> String {
        format!("{}{attribute}{}", self.prefix, self.suffix)
    }
}
