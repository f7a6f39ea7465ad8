//! ## Crate layout
//! - `core`: filter values, locales, condition maps, the locale predicate
//!   algebra, and the relation surface with its interception point.
//!
//! The `prelude` module mirrors the runtime surface used by host query
//! code; storage-shape adapters implement `TranslationBackend` and hosts
//! register a `TranslatedFilter` against their relation.

pub use babelq_core as core;

pub use babelq_core::error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use babelq_core::prelude::*;
    pub use babelq_core::translate::{ColumnAffix, build_not, build_where};
}
