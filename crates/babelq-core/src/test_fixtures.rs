//! Shared test fixtures: a json-column storage shape plus locale and row
//! helpers used across module tests.

use crate::{
    locale::Locale,
    predicate::Predicate,
    translate::{ColumnAffix, TranslationBackend},
    value::Value,
};
use std::collections::{BTreeMap, BTreeSet};

///
/// JsonShape
///
/// Json-column test shape: translations live in a `<attribute>_i18n`
/// column keyed by locale, addressed here as flattened
/// `<column>.<locale>` paths.
///

pub(crate) struct JsonShape {
    affix: ColumnAffix,
}

impl JsonShape {
    pub(crate) fn new() -> Self {
        Self {
            affix: ColumnAffix::new("", "_i18n"),
        }
    }

    pub(crate) fn path(&self, attribute: &str, locale: &Locale) -> String {
        format!("{}.{locale}", self.affix.column_name(attribute))
    }
}

impl TranslationBackend for JsonShape {
    type Node = Predicate;

    fn matches(&self, attribute: &str, value: &Value, locale: &Locale) -> Predicate {
        Predicate::eq(self.path(attribute, locale), value.to_text())
    }

    fn has_locale(&self, attribute: &str, locale: &Locale) -> Predicate {
        let path = self.path(attribute, locale);
        Predicate::not(Predicate::Or(vec![
            Predicate::is_missing(path.clone()),
            Predicate::is_null(path),
        ]))
    }
}

pub(crate) fn locale(tag: &str) -> Locale {
    Locale::new(tag).unwrap()
}

pub(crate) fn keys(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(ToString::to_string).collect()
}

pub(crate) fn row(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}
