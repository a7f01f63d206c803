//! Operations that accept possibly absent arguments.
//!
//! The core [`ListMap`] API takes keys and values by value, so absence cannot
//! be expressed there. Callers holding `Option`s (deserialized input, values
//! read from a form, a lookup that may have produced nothing) use the
//! `*_nullable` variants below: a `None` argument fails with
//! [`MapError::InvalidArgument`] naming the parameter, and the map is left
//! unchanged. Otherwise each method behaves exactly like its counterpart.

use std::borrow::Borrow;
use std::fmt;

use super::{Entry, ListMap, MapError};

impl<K, V> ListMap<K, V> {
    /// Nullable form of [`ListMap::add_entry`].
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidArgument`] for `"entry"` when `entry` is
    /// `None`, or [`MapError::DuplicateKey`] if its key is already present.
    pub fn add_entry_nullable(&mut self, entry: Option<Entry<K, V>>) -> Result<(), MapError>
    where
        K: PartialEq + fmt::Debug,
    {
        let entry = entry.ok_or(MapError::invalid_argument("entry"))?;
        self.add_entry(entry)
    }

    /// Nullable form of [`ListMap::add`].
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidArgument`] for `"key"` or `"value"` when
    /// either is `None`, or [`MapError::DuplicateKey`] if `key` is already
    /// present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::map::{ListMap, MapError};
    ///
    /// let mut map: ListMap<i32, &str> = ListMap::new();
    /// assert_eq!(
    ///     map.add_nullable(Some(1), None),
    ///     Err(MapError::InvalidArgument { parameter: "value" })
    /// );
    /// assert!(map.is_empty());
    ///
    /// map.add_nullable(Some(1), Some("one")).unwrap();
    /// assert_eq!(map.get(&1), Ok(&"one"));
    /// ```
    pub fn add_nullable(&mut self, key: Option<K>, value: Option<V>) -> Result<(), MapError>
    where
        K: PartialEq + fmt::Debug,
    {
        self.add_entry(Entry::try_new(key, value)?)
    }

    /// Nullable form of [`ListMap::remove`].
    ///
    /// A key that is not stored is a no-op returning `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidArgument`] for `"key"` when `key` is `None`.
    pub fn remove_nullable<Q>(&mut self, key: Option<&Q>) -> Result<Option<V>, MapError>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let key = key.ok_or(MapError::invalid_argument("key"))?;
        Ok(self.remove(key))
    }

    /// Nullable form of [`ListMap::update`].
    ///
    /// The key is checked before the value.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidArgument`] for `"key"` or `"value"` when
    /// either is `None`, or [`MapError::KeyNotFound`] if `key` is not present.
    pub fn update_nullable<Q>(&mut self, key: Option<&Q>, new_value: Option<V>) -> Result<V, MapError>
    where
        K: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let key = key.ok_or(MapError::invalid_argument("key"))?;
        let new_value = new_value.ok_or(MapError::invalid_argument("value"))?;
        self.update(key, new_value)
    }

    /// Nullable form of [`ListMap::get`].
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidArgument`] for `"key"` when `key` is `None`,
    /// or [`MapError::KeyNotFound`] if `key` is not present.
    pub fn get_nullable<Q>(&self, key: Option<&Q>) -> Result<&V, MapError>
    where
        K: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let key = key.ok_or(MapError::invalid_argument("key"))?;
        self.get(key)
    }
}
