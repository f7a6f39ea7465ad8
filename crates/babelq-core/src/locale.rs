use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// Locale
///
/// Opaque, validated locale identifier.
///
/// A locale is captured once by the caller at the query boundary and
/// threaded explicitly through every predicate-construction call; there is
/// no ambient current-locale state anywhere in this crate. Two concurrent
/// constructions can therefore never observe each other's locale.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Validate and wrap a locale tag.
    ///
    /// Tags are opaque to the filter algebra; validation only rejects input
    /// that could not name a locale at all (empty, or characters outside
    /// `[A-Za-z0-9_-]`). Fallback policy belongs to the host.
    pub fn new(tag: impl Into<String>) -> Result<Self, LocaleError> {
        let tag = tag.into();

        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }
        if !tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(LocaleError::InvalidTag { tag });
        }

        Ok(Self(tag))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Self::new(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

///
/// LocaleError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum LocaleError {
    #[error("locale tag must be non-empty")]
    Empty,

    #[error("locale tag contains unsupported characters: '{tag}'")]
    InvalidTag { tag: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_tags() {
        for tag in ["en", "pt-BR", "zh_Hant", "x-klingon-1"] {
            assert_eq!(Locale::new(tag).unwrap().as_str(), tag);
        }
    }

    #[test]
    fn rejects_empty_tag() {
        assert_eq!(Locale::new(""), Err(LocaleError::Empty));
    }

    #[test]
    fn rejects_unsupported_characters() {
        let err = Locale::new("en US").unwrap_err();
        assert_eq!(
            err,
            LocaleError::InvalidTag {
                tag: "en US".to_string()
            }
        );
    }

    #[test]
    fn serde_rejects_invalid_tags_on_deserialize() {
        let result: Result<Locale, _> = serde_json::from_str("\"no/pe\"");
        assert!(result.is_err());
    }
}
