//! Insertion-ordered map backed by a linear sequence.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `add`          | O(n)       |
//! | `add_entry`    | O(n)       |
//! | `remove`       | O(n)       |
//! | `update`       | O(n)       |
//! | `get`          | O(n)       |
//! | `contains_key` | O(n)       |
//! | `len`          | O(1)       |
//! | `keys`         | O(n)       |
//! | `iter`         | O(n)       |
//!
//! Every lookup is a scan comparing keys with `PartialEq`. The first
//! [`INLINE_CAPACITY`] entries live inline in the map itself; larger maps
//! spill to the heap.

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;

use super::{Entry, MapError};

/// Number of entries stored inline before the backing sequence spills to the heap.
pub const INLINE_CAPACITY: usize = 8;

type Entries<K, V> = SmallVec<[Entry<K, V>; INLINE_CAPACITY]>;

/// An associative container that keeps its entries in insertion order.
///
/// Keys are unique under `PartialEq`. Adding an existing key fails with
/// [`MapError::DuplicateKey`]; updating or reading a missing key fails with
/// [`MapError::KeyNotFound`]; removing a missing key does nothing.
///
/// Two maps are equal when they hold equal entries in the same order.
///
/// # Type Parameters
///
/// * `K` - The key type. Lookups require `PartialEq`; operations that can
///   fail also require `Debug` so the key can be reported.
/// * `V` - The value type.
///
/// # Examples
///
/// ```rust
/// use listmap::map::{Entry, ListMap};
///
/// let mut map = ListMap::new();
/// map.add(1, "Hello".to_string())?;
/// map.add(2, "world".to_string())?;
/// map.add_entry(Entry::new(3, "Hey".to_string()))?;
///
/// map.update(&2, "Beautiful World".to_string())?;
/// map.remove(&3);
///
/// assert_eq!(map.keys(), vec![1, 2]);
/// assert_eq!(map.get(&2)?, "Beautiful World");
/// # Ok::<(), listmap::map::MapError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ListMap<K, V> {
    entries: Entries<K, V>,
}

impl<K, V> ListMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::map::ListMap;
    ///
    /// let map: ListMap<i32, String> = ListMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Creates an empty map with room for at least `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: SmallVec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of entries in the map.
    ///
    /// Alias of [`ListMap::len`].
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the stored entries as a slice, in insertion order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry<K, V>] {
        &self.entries
    }

    /// Returns an iterator over `(&K, &V)` pairs in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::map::ListMap;
    ///
    /// let map: ListMap<_, _> = vec![(2, 'b'), (1, 'a')].try_into().unwrap();
    /// let pairs: Vec<_> = map.iter().collect();
    /// assert_eq!(pairs, vec![(&2, &'b'), (&1, &'a')]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            entries: self.entries.iter(),
        }
    }

    /// Returns an iterator over the keys in insertion order.
    ///
    /// Unlike [`ListMap::keys`], this borrows the map instead of copying.
    #[inline]
    pub fn iter_keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.entries.iter().map(Entry::key)
    }

    /// Returns an iterator over the values in insertion order.
    #[inline]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.entries.iter().map(Entry::value)
    }

    /// Returns a point-in-time copy of the keys in insertion order.
    ///
    /// Later changes to the map are not reflected in the returned vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::map::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.add("x", 1).unwrap();
    /// let keys = map.keys();
    ///
    /// map.add("y", 2).unwrap();
    /// assert_eq!(keys, vec!["x"]);
    /// assert_eq!(map.keys(), vec!["x", "y"]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter_keys().cloned().collect()
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .position(|entry| entry.key().borrow() == key)
    }

    /// Returns `true` if the map contains an entry with the given key.
    ///
    /// Supports borrowed forms of the key: with `ListMap<String, _>` you can
    /// search with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::map::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.add("hello".to_string(), 1).unwrap();
    /// assert!(map.contains_key("hello"));
    /// assert!(!map.contains_key("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Appends an entry to the end of the map.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::DuplicateKey`] if an entry with an equal key is
    /// already stored. The map is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::map::{Entry, ListMap};
    ///
    /// let mut map = ListMap::new();
    /// map.add_entry(Entry::new(3, "Hey")).unwrap();
    /// assert!(map.add_entry(Entry::new(3, "Ho")).unwrap_err().is_duplicate_key());
    /// assert_eq!(map.get(&3), Ok(&"Hey"));
    /// ```
    pub fn add_entry(&mut self, entry: Entry<K, V>) -> Result<(), MapError>
    where
        K: PartialEq + fmt::Debug,
    {
        if self.contains_key(entry.key()) {
            return Err(MapError::duplicate_key(entry.key()));
        }
        self.entries.push(entry);
        trace_mutation!(entries = self.entries.len(), "entry added");
        Ok(())
    }

    /// Adds `value` under `key` at the end of the map.
    ///
    /// Equivalent to `add_entry(Entry::new(key, value))`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::DuplicateKey`] if `key` is already present.
    pub fn add(&mut self, key: K, value: V) -> Result<(), MapError>
    where
        K: PartialEq + fmt::Debug,
    {
        self.add_entry(Entry::new(key, value))
    }

    /// Removes the entry with the given key and returns its value.
    ///
    /// A missing key is not an error: the map is left unchanged and `None`
    /// is returned. The remaining entries keep their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::map::ListMap;
    ///
    /// let mut map: ListMap<_, _> = vec![(1, "a"), (2, "b"), (3, "c")].try_into().unwrap();
    /// assert_eq!(map.remove(&2), Some("b"));
    /// assert_eq!(map.remove(&2), None);
    /// assert_eq!(map.keys(), vec![1, 3]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.position(key)?;
        let (_, value) = self.entries.remove(index).into_parts();
        trace_mutation!(entries = self.entries.len(), "entry removed");
        Some(value)
    }

    /// Replaces the value stored under `key`, returning the previous value.
    ///
    /// The entry keeps its key and its position.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if `key` is not present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::map::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.add(2, "world").unwrap();
    /// assert_eq!(map.update(&2, "Beautiful World"), Ok("world"));
    /// assert!(map.update(&5, "nope").unwrap_err().is_key_not_found());
    /// ```
    pub fn update<Q>(&mut self, key: &Q, new_value: V) -> Result<V, MapError>
    where
        K: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let index = self
            .position(key)
            .ok_or_else(|| MapError::key_not_found(key))?;
        let previous = self.entries[index].replace_value(new_value);
        trace_mutation!(entries = self.entries.len(), "entry updated");
        Ok(previous)
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if `key` is not present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::map::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.add("one".to_string(), 1).unwrap();
    /// assert_eq!(map.get("one"), Ok(&1));
    /// assert!(map.get("two").is_err());
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&V, MapError>
    where
        K: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.position(key)
            .map(|index| self.entries[index].value())
            .ok_or_else(|| MapError::key_not_found(key))
    }
}

impl<K, V> Default for ListMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq + fmt::Debug, V> TryFrom<Vec<(K, V)>> for ListMap<K, V> {
    type Error = MapError;

    /// Builds a map from pairs in order, failing on the first repeated key.
    fn try_from(pairs: Vec<(K, V)>) -> Result<Self, Self::Error> {
        let mut map = Self::with_capacity(pairs.len());
        for (key, value) in pairs {
            map.add(key, value)?;
        }
        Ok(map)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over the entries of a [`ListMap`], created by [`ListMap::iter`].
pub struct Iter<'a, K, V> {
    entries: std::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Entry::as_pair)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back().map(Entry::as_pair)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Owning iterator over the entries of a [`ListMap`].
pub struct IntoIter<K, V> {
    entries: smallvec::IntoIter<[Entry<K, V>; INLINE_CAPACITY]>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Entry::into_parts)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back().map(Entry::into_parts)
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> IntoIterator for ListMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            entries: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ListMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ListMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for ListMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for ListMap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct ListMapVisitor<K, V> {
    marker: std::marker::PhantomData<fn() -> ListMap<K, V>>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for ListMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + PartialEq + fmt::Debug,
    V: serde::Deserialize<'de>,
{
    type Value = ListMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with unique keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = ListMap::new();
        while let Some((key, value)) = access.next_entry::<K, V>()? {
            map.add(key, value).map_err(serde::de::Error::custom)?;
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for ListMap<K, V>
where
    K: serde::Deserialize<'de> + PartialEq + fmt::Debug,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ListMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
