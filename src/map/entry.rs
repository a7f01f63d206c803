//! Validated key/value pairs.

use std::fmt;

use super::MapError;

/// A single key/value pair stored in a [`ListMap`](super::ListMap).
///
/// An `Entry` can only be created through [`Entry::new`], [`Entry::try_new`]
/// or the conversions built on them, so both halves are always present. The
/// key cannot be changed afterwards; the value is replaced only through the
/// owning map's [`update`](super::ListMap::update).
///
/// The `Display` form is the value alone:
///
/// ```rust
/// use listmap::map::Entry;
///
/// let entry = Entry::new(3, "Hey");
/// assert_eq!(entry.to_string(), "Hey");
/// ```
///
/// Fields are private, so struct literal construction does not compile:
///
/// ```compile_fail
/// use listmap::map::Entry;
///
/// let entry = Entry { key: 3, value: "Hey" };
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry from a key and a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::map::Entry;
    ///
    /// let entry = Entry::new("answer", 42);
    /// assert_eq!(entry.key(), &"answer");
    /// assert_eq!(entry.value(), &42);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Creates an entry from possibly absent parts.
    ///
    /// The key is checked before the value.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidArgument`] naming `"key"` or `"value"` when
    /// that part is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::map::{Entry, MapError};
    ///
    /// assert_eq!(Entry::try_new(Some(1), Some("one")), Ok(Entry::new(1, "one")));
    /// assert_eq!(
    ///     Entry::<i32, &str>::try_new(Some(1), None),
    ///     Err(MapError::InvalidArgument { parameter: "value" })
    /// );
    /// ```
    pub fn try_new(key: Option<K>, value: Option<V>) -> Result<Self, MapError> {
        let key = key.ok_or(MapError::invalid_argument("key"))?;
        let value = value.ok_or(MapError::invalid_argument("value"))?;
        Ok(Self::new(key, value))
    }

    /// Returns a reference to the key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry, returning its key and value.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    #[inline]
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub(crate) const fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> TryFrom<(Option<K>, Option<V>)> for Entry<K, V> {
    type Error = MapError;

    fn try_from((key, value): (Option<K>, Option<V>)) -> Result<Self, Self::Error> {
        Self::try_new(key, value)
    }
}

impl<K, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.value)
    }
}
