//! Provide hash containers, re-exports *hashbrown* and *foldhash*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] as the default hashing provider.
///
/// # Examples
///
/// ```
/// use sa_utils::hash::{FixedHashState, HashMap};
///
/// let mut ids: HashMap<&str, usize> = HashMap::with_hasher(FixedHashState);
/// ids.insert("Pick/1", 0);
///
/// assert_eq!(ids.get("Pick/1"), Some(&0));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] as the default hashing provider.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

/// Entry API of [`HashMap`].
pub use hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;

// -----------------------------------------------------------------------------
// Tests
