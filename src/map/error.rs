//! Error types for map operations.
//!
//! Every fallible operation on [`ListMap`](super::ListMap) and
//! [`Entry`](super::Entry) reports failure through [`MapError`]. A failed
//! operation never leaves the map partially modified.

use std::fmt;

use thiserror::Error;

/// Represents the ways a map operation can be rejected.
///
/// # Examples
///
/// ```rust
/// use listmap::map::{ListMap, MapError};
///
/// let mut map = ListMap::new();
/// map.add("a", 1).unwrap();
///
/// let error = map.add("a", 2).unwrap_err();
/// assert_eq!(error, MapError::DuplicateKey { key: "\"a\"".to_string() });
/// assert_eq!(
///     error.to_string(),
///     "the map already contains an entry with key \"a\""
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A required argument was absent.
    #[error("argument `{parameter}` must not be absent")]
    InvalidArgument {
        /// The name of the absent parameter (`"key"`, `"value"` or `"entry"`).
        parameter: &'static str,
    },
    /// An entry with an equal key is already stored.
    #[error("the map already contains an entry with key {key}")]
    DuplicateKey {
        /// The offending key, rendered with its `Debug` form.
        key: String,
    },
    /// No entry with the requested key is stored.
    #[error("the map does not contain an entry with key {key}")]
    KeyNotFound {
        /// The requested key, rendered with its `Debug` form.
        key: String,
    },
}

impl MapError {
    #[inline]
    pub(crate) const fn invalid_argument(parameter: &'static str) -> Self {
        Self::InvalidArgument { parameter }
    }

    #[inline]
    pub(crate) fn duplicate_key<Q: fmt::Debug + ?Sized>(key: &Q) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
        }
    }

    #[inline]
    pub(crate) fn key_not_found<Q: fmt::Debug + ?Sized>(key: &Q) -> Self {
        Self::KeyNotFound {
            key: format!("{key:?}"),
        }
    }

    /// Returns `true` for [`MapError::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` for [`MapError::DuplicateKey`].
    #[must_use]
    pub const fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Returns `true` for [`MapError::KeyNotFound`].
    #[must_use]
    pub const fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_argument_display() {
        let error = MapError::invalid_argument("key");
        assert_eq!(format!("{error}"), "argument `key` must not be absent");
    }

    #[rstest]
    #[case(MapError::duplicate_key(&4), "the map already contains an entry with key 4")]
    #[case(
        MapError::duplicate_key("four"),
        "the map already contains an entry with key \"four\""
    )]
    #[case(MapError::key_not_found(&7), "the map does not contain an entry with key 7")]
    fn test_key_errors_render_key_with_debug(#[case] error: MapError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_predicates_match_variants() {
        assert!(MapError::invalid_argument("value").is_invalid_argument());
        assert!(MapError::duplicate_key(&1).is_duplicate_key());
        assert!(MapError::key_not_found(&1).is_key_not_found());
        assert!(!MapError::key_not_found(&1).is_duplicate_key());
    }

    #[rstest]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&MapError::invalid_argument("entry"));
    }
}
