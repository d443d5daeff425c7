//! Enum-keyed catalog registry.
//!
//! A `Catalog` stores the definitions of one kind of catalog entry
//! (traits, skills, properties, ...). It provides O(1) lookup by key and
//! iterates in registration order, which is the order builders present
//! options to players.

use rustc_hash::FxHashMap;

use crate::core::Keyed;

/// Registry of definitions keyed by `D::Key`.
///
/// ## Example
///
/// ```
/// use rust_warband::catalog::{Catalog, Potion, PotionKey};
///
/// let mut catalog = Catalog::new();
/// catalog.register(Potion::new(PotionKey::Healing, 2));
///
/// assert_eq!(catalog.get(PotionKey::Healing).unwrap().points_cost(), 2);
/// assert!(catalog.get(PotionKey::Strength).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Catalog<D: Keyed> {
    entries: FxHashMap<D::Key, D>,
    order: Vec<D::Key>,
}

impl<D: Keyed> Default for Catalog<D> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
            order: Vec::new(),
        }
    }
}

impl<D: Keyed> Catalog<D> {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition.
    ///
    /// Panics if a definition with the same key already exists. Catalogs
    /// are authored, not user input, so a duplicate is a programming error.
    pub fn register(&mut self, definition: D) {
        let key = definition.key();
        if self.entries.contains_key(&key) {
            panic!("Catalog entry {key:?} already registered");
        }
        self.order.push(key);
        self.entries.insert(key, definition);
    }

    /// Get a definition by key.
    #[must_use]
    pub fn get(&self, key: D::Key) -> Option<&D> {
        self.entries.get(&key)
    }

    /// Check if a key is registered.
    #[must_use]
    pub fn contains(&self, key: D::Key) -> bool {
        self.entries.contains_key(&key)
    }

    /// Get the number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    /// Iterate over keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = D::Key> + '_ {
        self.order.iter().copied()
    }

    /// Find definitions matching a predicate, in registration order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &D>
    where
        F: Fn(&D) -> bool,
    {
        self.iter().filter(move |d| predicate(d))
    }
}

impl<D: Keyed> FromIterator<D> for Catalog<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for definition in iter {
            catalog.register(definition);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Potion, PotionKey};

    #[test]
    fn test_register_and_get() {
        let mut catalog = Catalog::new();
        catalog.register(Potion::new(PotionKey::Healing, 2));

        let found = catalog.get(PotionKey::Healing);
        assert!(found.is_some());
        assert_eq!(found.unwrap().points_cost(), 2);

        assert!(catalog.get(PotionKey::Antidote).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_key_panics() {
        let mut catalog = Catalog::new();
        catalog.register(Potion::new(PotionKey::Healing, 2));
        catalog.register(Potion::new(PotionKey::Healing, 5)); // Should panic
    }

    #[test]
    fn test_iteration_follows_registration_order() {
        let catalog: Catalog<Potion> = [
            Potion::new(PotionKey::Swiftness, 2),
            Potion::new(PotionKey::Healing, 2),
            Potion::new(PotionKey::Antidote, 1),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = catalog.keys().collect();
        assert_eq!(keys, [PotionKey::Swiftness, PotionKey::Healing, PotionKey::Antidote]);
        assert_eq!(catalog.iter().count(), 3);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_find_with_predicate() {
        let catalog: Catalog<Potion> = [
            Potion::new(PotionKey::Antidote, 1),
            Potion::new(PotionKey::Invisibility, 4),
        ]
        .into_iter()
        .collect();

        let cheap: Vec<_> = catalog.find(|p| p.points_cost() <= 2).collect();
        assert_eq!(cheap.len(), 1);
        assert_eq!(cheap[0].key(), PotionKey::Antidote);
    }

    #[test]
    fn test_contains() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        catalog.register(Potion::new(PotionKey::Strength, 3));

        assert!(catalog.contains(PotionKey::Strength));
        assert!(!catalog.contains(PotionKey::Healing));
    }
}
