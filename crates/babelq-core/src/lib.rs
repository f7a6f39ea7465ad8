//! Core runtime for BabelQ: dynamic filter values, locales, condition
//! maps, the locale predicate algebra for translated attributes, and the
//! relation surface with its filter interception point. The ergonomics are
//! exported via the `prelude`.

#![warn(unreachable_pub)]

pub mod conditions;
pub mod error;
pub mod locale;
pub mod obs;
pub mod predicate;
pub mod relation;
pub mod traits;
pub mod translate;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        conditions::ConditionMap,
        locale::Locale,
        predicate::Predicate,
        relation::{FilterSpec, Relation, TranslatedFilter},
        traits::{FieldValue, TranslatedAttributes},
        translate::TranslationBackend,
        value::Value,
    };
}
