//! # listmap
//!
//! An associative container that keeps its entries in a linear sequence
//! instead of a hash table.
//!
//! ## Overview
//!
//! [`ListMap`](map::ListMap) stores key/value pairs in insertion order and
//! finds keys by scanning. For the small maps it is meant for, a scan over a
//! contiguous (and, up to eight entries, inline) buffer is cheap, and the
//! order in which keys were added is always observable.
//!
//! - **Entries**: [`Entry`](map::Entry) pairs that can only be built through
//!   validating constructors
//! - **Strict CRUD**: adding an existing key or updating a missing one is an
//!   error, not a silent overwrite
//! - **Nullable boundary**: `*_nullable` operations accept `Option` arguments
//!   for data that may be absent
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `ListMap` and `Entry`
//! - `tracing`: trace events for successful mutations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use listmap::prelude::*;
//!
//! let mut map = ListMap::new();
//! map.add(1, "Hello").unwrap();
//! map.add(2, "world").unwrap();
//!
//! assert_eq!(map.get(&2), Ok(&"world"));
//! assert_eq!(map.keys(), vec![1, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use listmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::map::*;
}

pub mod map;
