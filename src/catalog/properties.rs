//! Property definitions - the modifiers weapons and equipment can carry.
//!
//! A `PropertyDefinition` is an immutable template: a points delta, the
//! properties that must already be attached before it, whether it may be
//! attached more than once, and the effect it has on its owner.
//!
//! Items never hold definitions directly. Attaching instantiates the
//! definition into a `PropertyInstance` with its own storage, see
//! `crate::items::PropertyInstance`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use super::registry::Catalog;
use crate::core::Keyed;
use crate::effects::PropertyEffect;

/// Identifier of a property definition.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
pub enum PropertyKey {
    /// Secondary melee profile on a ranged weapon.
    Melee,
    #[strum(serialize = "Two Handed")]
    TwoHanded,
    /// A ranged weapon usable in one hand.
    #[strum(serialize = "One Handed")]
    OneHanded,
    #[strum(serialize = "High Crit")]
    HighCrit,
    /// +1" melee reach per instance.
    Reach,
    /// +3" range per instance.
    Ranged,
    #[strum(serialize = "Slow to Load")]
    SlowToLoad,
    Light,
    /// Limited shots; the instance records how many.
    #[strum(serialize = "Low Ammo")]
    LowAmmo,
    #[strum(serialize = "Morale Boosting")]
    MoraleBoosting,
    #[strum(serialize = "Dual Wield")]
    DualWield,
    Magic,
}

/// Immutable template for a property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    key: PropertyKey,
    points_delta: i32,
    prerequisites: SmallVec<[PropertyKey; 2]>,
    multiple_allowed: bool,
    effect: PropertyEffect,
}

static PROPERTIES: Lazy<Catalog<PropertyDefinition>> =
    Lazy::new(|| PropertyKey::iter().map(PropertyDefinition::standard).collect());

impl PropertyDefinition {
    /// Create a definition with no prerequisites and no effect.
    #[must_use]
    pub fn new(key: PropertyKey, points_delta: i32) -> Self {
        Self {
            key,
            points_delta,
            prerequisites: SmallVec::new(),
            multiple_allowed: false,
            effect: PropertyEffect::None,
        }
    }

    /// Require another property to be attached first (builder pattern).
    ///
    /// Panics if `prerequisite` is this definition's own key.
    #[must_use]
    pub fn with_prerequisite(mut self, prerequisite: PropertyKey) -> Self {
        assert_ne!(
            prerequisite, self.key,
            "Property {} cannot be its own prerequisite",
            self.key
        );
        if !self.prerequisites.contains(&prerequisite) {
            self.prerequisites.push(prerequisite);
        }
        self
    }

    /// Allow several instances on one item (builder pattern).
    #[must_use]
    pub fn multiple(mut self) -> Self {
        self.multiple_allowed = true;
        self
    }

    /// Set the attach/detach effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: PropertyEffect) -> Self {
        self.effect = effect;
        self
    }

    /// The standard definition for a key.
    #[must_use]
    pub fn standard(key: PropertyKey) -> Self {
        use PropertyKey::*;

        match key {
            Melee => Self::new(Melee, 0).with_prerequisite(Ranged),
            TwoHanded => Self::new(TwoHanded, -1),
            OneHanded => Self::new(OneHanded, 3).with_prerequisite(Ranged),
            HighCrit => Self::new(HighCrit, 1),
            Reach => Self::new(Reach, 3)
                .multiple()
                .with_effect(PropertyEffect::RefreshRange),
            Ranged => Self::new(Ranged, 2)
                .multiple()
                .with_effect(PropertyEffect::RefreshRange),
            SlowToLoad => Self::new(SlowToLoad, -2).with_prerequisite(Ranged),
            Light => Self::new(Light, 2),
            LowAmmo => Self::new(LowAmmo, -1).with_prerequisite(Ranged),
            MoraleBoosting => Self::new(MoraleBoosting, 3),
            DualWield => Self::new(DualWield, 3).with_prerequisite(Light),
            Magic => Self::new(Magic, 2).with_effect(PropertyEffect::Enchant),
        }
    }

    /// The standard property catalog.
    #[must_use]
    pub fn catalog() -> &'static Catalog<Self> {
        &PROPERTIES
    }

    /// Look up a standard definition.
    #[must_use]
    pub fn get(key: PropertyKey) -> Option<&'static Self> {
        PROPERTIES.get(key)
    }

    #[must_use]
    pub fn points_delta(&self) -> i32 {
        self.points_delta
    }

    /// Keys that must already be attached.
    #[must_use]
    pub fn prerequisites(&self) -> &[PropertyKey] {
        &self.prerequisites
    }

    #[must_use]
    pub fn multiple_allowed(&self) -> bool {
        self.multiple_allowed
    }

    #[must_use]
    pub fn effect(&self) -> PropertyEffect {
        self.effect
    }
}

impl Keyed for PropertyDefinition {
    type Key = PropertyKey;

    fn key(&self) -> PropertyKey {
        self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_key() {
        let catalog = PropertyDefinition::catalog();
        assert_eq!(catalog.len(), PropertyKey::iter().count());
        for key in PropertyKey::iter() {
            assert_eq!(PropertyDefinition::get(key).map(Keyed::key), Some(key));
        }
    }

    #[test]
    fn test_no_standard_definition_requires_itself() {
        for definition in PropertyDefinition::catalog().iter() {
            assert!(!definition.prerequisites().contains(&definition.key()));
        }
    }

    #[test]
    fn test_repeatable_properties() {
        let repeatable: Vec<_> = PropertyDefinition::catalog()
            .find(|d| d.multiple_allowed())
            .map(Keyed::key)
            .collect();
        assert_eq!(repeatable, [PropertyKey::Reach, PropertyKey::Ranged]);
    }

    #[test]
    fn test_builder() {
        let definition = PropertyDefinition::new(PropertyKey::Light, 5)
            .with_prerequisite(PropertyKey::Ranged)
            .with_prerequisite(PropertyKey::Ranged)
            .multiple();

        assert_eq!(definition.points_delta(), 5);
        assert_eq!(definition.prerequisites(), [PropertyKey::Ranged]);
        assert!(definition.multiple_allowed());
        assert_eq!(definition.effect(), PropertyEffect::None);
    }

    #[test]
    #[should_panic(expected = "cannot be its own prerequisite")]
    fn test_self_prerequisite_panics() {
        let _ = PropertyDefinition::new(PropertyKey::Reach, 1).with_prerequisite(PropertyKey::Reach);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PropertyKey::SlowToLoad.to_string(), "Slow to Load");
        assert_eq!(PropertyKey::TwoHanded.as_ref(), "Two Handed");
    }
}
