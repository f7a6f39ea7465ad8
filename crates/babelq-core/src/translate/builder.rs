use crate::{
    conditions::ConditionMap,
    locale::Locale,
    traits::FilterNode,
    translate::TranslationBackend,
    value::Value,
};
use std::collections::BTreeSet;

///
/// Locale predicate construction.
///
/// Shared across storage shapes: the backend contributes the two leaf
/// operations, this module contributes the AND/OR/NOT combination rules
/// for the positive ("where") and negative ("not") query forms.
///

/// Build the positive-form predicate for the matched translated keys.
///
/// Per key, in key-set order: the absent-marker asserts "no value recorded
/// for this locale"; otherwise every element of the value sequence
/// contributes a match (or, for an absent element, the same no-value
/// assertion), folded with OR. Keys fold with AND.
///
/// Destructive: each matched key's value is removed from `conditions`,
/// leaving only non-translated entries behind for the ordinary path.
///
/// Returns `None` for an empty key set; callers treat `None` as "no
/// additional filtering", never as "match nothing".
pub fn build_where<B: TranslationBackend>(
    conditions: &mut ConditionMap,
    keys: &BTreeSet<String>,
    locale: &Locale,
    backend: &B,
) -> Option<B::Node> {
    let nodes = keys
        .iter()
        .filter_map(|key| {
            let value = conditions.remove(key.as_str()).unwrap_or(Value::None);

            if value.is_none() {
                return Some(backend.has_locale(key, locale).negate());
            }

            let elements: Vec<B::Node> = value
                .into_sequence()
                .into_iter()
                .map(|element| match element {
                    Value::None => backend.has_locale(key, locale).negate(),
                    element => backend.matches(key, &element, locale),
                })
                .collect();

            fold_any(elements)
        })
        .collect();

    fold_all(nodes)
}

/// Build the negative-form predicate for the matched translated keys.
///
/// Per key: every element contributes a negated match, folded into one AND
/// chain seeded with `has_locale`. The seed is deliberate: a negated match
/// is only meaningful alongside "a value exists for this locale";
/// without it, rows with no recorded translation would satisfy the
/// negation. The absent-marker yields an empty element sequence, so its
/// chain is the bare seed. Keys fold with AND.
///
/// Destructive contract as [`build_where`].
pub fn build_not<B: TranslationBackend>(
    conditions: &mut ConditionMap,
    keys: &BTreeSet<String>,
    locale: &Locale,
    backend: &B,
) -> Option<B::Node> {
    let nodes = keys
        .iter()
        .map(|key| {
            let value = conditions.remove(key.as_str()).unwrap_or(Value::None);

            let negated: Vec<B::Node> = value
                .into_sequence()
                .into_iter()
                .map(|element| backend.matches(key, &element, locale).negate())
                .collect();

            let seed = backend.has_locale(key, locale);
            if negated.is_empty() {
                seed
            } else {
                let mut chain = Vec::with_capacity(negated.len() + 1);
                chain.push(seed);
                chain.extend(negated);
                B::Node::all(chain)
            }
        })
        .collect();

    fold_all(nodes)
}

/// AND-fold: zero nodes mean "no filtering", a single node stands alone
/// without a wrapper.
fn fold_all<N: FilterNode>(mut nodes: Vec<N>) -> Option<N> {
    match nodes.len() {
        0 => None,
        1 => nodes.pop(),
        _ => Some(N::all(nodes)),
    }
}

/// OR-fold with the same wrapping rules as [`fold_all`].
fn fold_any<N: FilterNode>(mut nodes: Vec<N>) -> Option<N> {
    match nodes.len() {
        0 => None,
        1 => nodes.pop(),
        _ => Some(N::any(nodes)),
    }
}
