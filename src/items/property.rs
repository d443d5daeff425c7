//! Property instances - properties as attached to a specific item.
//!
//! Attaching a property instantiates its definition. The instance copies
//! what it needs out of the template and may carry state of its own (how
//! much ammo, which melee profile), so two daggers with the same property
//! never share anything with each other or with the catalog.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{PropertyDefinition, PropertyKey, WeaponStat};
use crate::core::keyed::{missing_keys, Keyed};

/// Per-instance argument supplied when attaching a property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyArg {
    /// No instance state.
    #[default]
    None,
    /// Shot count for a limited-ammo weapon.
    Ammo(u8),
    /// A secondary stat profile; its table cost is added to the instance delta.
    Profile(WeaponStat),
}

/// A property attached to one item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInstance {
    key: PropertyKey,
    points_delta: i32,
    ammo: Option<u8>,
    profile: Option<WeaponStat>,
}

impl PropertyInstance {
    /// Instantiate a definition with an instance argument.
    #[must_use]
    pub fn instantiate(definition: &PropertyDefinition, arg: PropertyArg) -> Self {
        let mut instance = Self {
            key: definition.key(),
            points_delta: definition.points_delta(),
            ammo: None,
            profile: None,
        };
        match arg {
            PropertyArg::None => {}
            PropertyArg::Ammo(count) => instance.ammo = Some(count),
            PropertyArg::Profile(stat) => {
                instance.points_delta += stat.points_cost;
                instance.profile = Some(stat);
            }
        }
        instance
    }

    /// Points this instance adds to its item (may be negative).
    #[must_use]
    pub fn points_delta(&self) -> i32 {
        self.points_delta
    }

    #[must_use]
    pub fn ammo(&self) -> Option<u8> {
        self.ammo
    }

    #[must_use]
    pub fn profile(&self) -> Option<WeaponStat> {
        self.profile
    }
}

impl Keyed for PropertyInstance {
    type Key = PropertyKey;

    fn key(&self) -> PropertyKey {
        self.key
    }
}

/// Ordered properties attached to one item.
///
/// Read access is public. Mutation is crate-private and only happens
/// through `EquippableItem::attach_property` / `detach_property`, which
/// keep prerequisites and effects consistent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyList(SmallVec<[PropertyInstance; 4]>);

impl PropertyList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate in attach order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyInstance> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PropertyInstance] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether at least one instance with `key` is attached.
    #[must_use]
    pub fn contains(&self, key: PropertyKey) -> bool {
        self.0.iter().any(|p| p.key == key)
    }

    /// How many instances with `key` are attached.
    #[must_use]
    pub fn count(&self, key: PropertyKey) -> usize {
        self.0.iter().filter(|p| p.key == key).count()
    }

    /// First instance with `key`.
    #[must_use]
    pub fn find(&self, key: PropertyKey) -> Option<&PropertyInstance> {
        self.0.iter().find(|p| p.key == key)
    }

    /// Keys in attach order (repeats included).
    pub fn keys(&self) -> impl Iterator<Item = PropertyKey> + '_ {
        self.0.iter().map(|p| p.key)
    }

    /// Keys from `required` that are not attached.
    #[must_use]
    pub fn missing(&self, required: &[PropertyKey]) -> Vec<PropertyKey> {
        missing_keys(required, self.0.iter())
    }

    /// Sum of every instance's delta.
    #[must_use]
    pub fn total_points_delta(&self) -> i32 {
        self.0.iter().map(|p| p.points_delta).sum()
    }

    pub(crate) fn push(&mut self, instance: PropertyInstance) {
        self.0.push(instance);
    }

    /// Remove every instance with `key`, returning how many were removed.
    pub(crate) fn remove_all(&mut self, key: PropertyKey) -> usize {
        let before = self.0.len();
        self.0.retain(|p| p.key != key);
        before - self.0.len()
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a PropertyInstance;
    type IntoIter = std::slice::Iter<'a, PropertyInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(key: PropertyKey) -> PropertyInstance {
        PropertyInstance::instantiate(&PropertyDefinition::standard(key), PropertyArg::None)
    }

    #[test]
    fn test_instantiate_copies_delta() {
        let reach = instance(PropertyKey::Reach);
        assert_eq!(reach.key(), PropertyKey::Reach);
        assert_eq!(reach.points_delta(), 3);
        assert_eq!(reach.ammo(), None);
        assert_eq!(reach.profile(), None);
    }

    #[test]
    fn test_instantiate_with_ammo() {
        let low_ammo = PropertyInstance::instantiate(
            &PropertyDefinition::standard(PropertyKey::LowAmmo),
            PropertyArg::Ammo(4),
        );
        assert_eq!(low_ammo.ammo(), Some(4));
        assert_eq!(low_ammo.points_delta(), -1);
    }

    #[test]
    fn test_instantiate_with_profile_adds_cost() {
        let stat = WeaponStat::new(2, 4, 2);
        let melee = PropertyInstance::instantiate(
            &PropertyDefinition::standard(PropertyKey::Melee),
            PropertyArg::Profile(stat),
        );
        assert_eq!(melee.points_delta(), 2);
        assert_eq!(melee.profile(), Some(stat));
    }

    #[test]
    fn test_list_queries() {
        let mut list = PropertyList::new();
        list.push(instance(PropertyKey::Ranged));
        list.push(instance(PropertyKey::Ranged));
        list.push(instance(PropertyKey::SlowToLoad));

        assert_eq!(list.len(), 3);
        assert!(list.contains(PropertyKey::Ranged));
        assert_eq!(list.count(PropertyKey::Ranged), 2);
        assert_eq!(list.total_points_delta(), 2);
        assert_eq!(
            list.missing(&[PropertyKey::Light, PropertyKey::Ranged, PropertyKey::Reach]),
            [PropertyKey::Light, PropertyKey::Reach]
        );
        let keys: Vec<_> = list.keys().collect();
        assert_eq!(keys, [PropertyKey::Ranged, PropertyKey::Ranged, PropertyKey::SlowToLoad]);
    }

    #[test]
    fn test_remove_all() {
        let mut list = PropertyList::new();
        list.push(instance(PropertyKey::Reach));
        list.push(instance(PropertyKey::Light));
        list.push(instance(PropertyKey::Reach));

        assert_eq!(list.remove_all(PropertyKey::Reach), 2);
        assert_eq!(list.keys().collect::<Vec<_>>(), [PropertyKey::Light]);
        assert_eq!(list.remove_all(PropertyKey::Reach), 0);
    }
}
