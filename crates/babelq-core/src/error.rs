#[cfg(feature = "json")]
use crate::conditions::ConditionError;
use crate::locale::LocaleError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error surface aggregating boundary validation failures.
///
/// Everything here is a caller-side configuration or input error raised
/// synchronously before any predicate exists; there is nothing to retry.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("{0}")]
    Locale(#[from] LocaleError),

    #[cfg(feature = "json")]
    #[error("{0}")]
    Condition(#[from] ConditionError),
}
