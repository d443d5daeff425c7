//! Keyed catalog entries.
//!
//! Anything a character can own by catalog key (traits, skills, potions,
//! equipment, mounts, elementals) implements `Keyed`. Keys are small `Copy`
//! enums, so lookups and comparisons never allocate.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A value identified by a catalog key.
pub trait Keyed {
    /// The key type (usually a fieldless enum).
    type Key: Copy + Eq + Hash + Debug + Display;

    /// The key identifying this value.
    fn key(&self) -> Self::Key;
}

/// Position of the first item in `items` whose key is `key`.
pub fn position_of<'a, T, I>(items: I, key: T::Key) -> Option<usize>
where
    T: Keyed + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().position(|item| item.key() == key)
}

/// Keys from `required` that no item in `present` carries, in `required` order.
pub fn missing_keys<'a, T, I>(required: &[T::Key], present: I) -> Vec<T::Key>
where
    T: Keyed + 'a,
    I: IntoIterator<Item = &'a T> + Clone,
{
    required
        .iter()
        .copied()
        .filter(|key| position_of(present.clone(), *key).is_none())
        .collect()
}
