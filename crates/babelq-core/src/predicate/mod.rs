//! Module: predicate
//! Responsibility: host filter AST, canonicalization, and row evaluation.
//! Does not own: translation semantics or storage-shape comparisons.

mod ast;
mod eval;
mod normalize;

#[cfg(test)]
mod tests;

pub use ast::{Cmp, ComparePredicate, Predicate};
pub use eval::{FieldPresence, Row, eval};
pub use normalize::normalize;
