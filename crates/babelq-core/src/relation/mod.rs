//! Module: relation
//! Responsibility: the host-side filter surface and its interception
//! extension point.
//! Does not own: predicate semantics or storage-shape comparisons.

mod intercept;
mod relation;
mod translated;


pub use intercept::{FilterForm, FilterInterceptor, Next};
pub use relation::{FilterSpec, Relation};
pub use translated::TranslatedFilter;
