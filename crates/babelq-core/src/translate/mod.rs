//! Module: translate
//! Responsibility: the shape-agnostic locale predicate algebra and the
//! capability contract storage adapters implement.
//! Does not own: concrete comparison semantics, the translated-attribute
//! registry, or the host's filter-combination machinery.

mod backend;
mod builder;


pub use backend::{ColumnAffix, TranslationBackend};
pub use builder::{build_not, build_where};
