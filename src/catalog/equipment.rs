//! Miscellaneous equipment definitions.
//!
//! Equipment has a fixed base cost and can carry properties (a Trinket can
//! be made Magic or Morale Boosting). Some pieces depend on other equipment
//! already being carried, or on a trait. Equipment effects are narrative
//! and resolved at the table, so definitions carry none.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use super::registry::Catalog;
use super::traits::TraitKey;
use crate::core::Keyed;

/// Identifier of a piece of equipment.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter, AsRefStr,
    IntoStaticStr,
)]
pub enum EquipmentKey {
    #[strum(serialize = "Spellcasting Implement")]
    SpellcastingImplement,
    #[strum(serialize = "Spellbook / Scrolls")]
    Spellbook,
    #[strum(serialize = "Torch / Lantern")]
    Torch,
    Familiar,
    Horn,
    Bells,
    Drums,
    #[strum(serialize = "Portable Barricade")]
    PortableBarricade,
    #[strum(serialize = "Medical Supplies")]
    MedicalSupplies,
    #[strum(serialize = "Ladders / Ropes")]
    LaddersRopes,
    Trinket,
}

/// Catalog definition of a piece of equipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentDefinition {
    key: EquipmentKey,
    points_cost: i32,
    equipment_prerequisites: SmallVec<[EquipmentKey; 1]>,
    trait_prerequisites: SmallVec<[TraitKey; 1]>,
}

static EQUIPMENT: Lazy<Catalog<EquipmentDefinition>> =
    Lazy::new(|| EquipmentKey::iter().map(EquipmentDefinition::standard).collect());

impl EquipmentDefinition {
    #[must_use]
    pub fn new(key: EquipmentKey, points_cost: i32) -> Self {
        Self {
            key,
            points_cost,
            equipment_prerequisites: SmallVec::new(),
            trait_prerequisites: SmallVec::new(),
        }
    }

    /// Require other equipment to be carried first (builder pattern).
    ///
    /// Panics if `key` is this definition's own key.
    #[must_use]
    pub fn requires_equipment(mut self, key: EquipmentKey) -> Self {
        assert_ne!(key, self.key, "Equipment {} cannot be its own prerequisite", self.key);
        self.equipment_prerequisites.push(key);
        self
    }

    /// Require a trait (builder pattern).
    #[must_use]
    pub fn requires_trait(mut self, key: TraitKey) -> Self {
        self.trait_prerequisites.push(key);
        self
    }

    /// The standard definition for a key.
    #[must_use]
    pub fn standard(key: EquipmentKey) -> Self {
        use EquipmentKey::*;

        match key {
            SpellcastingImplement => Self::new(key, 2).requires_trait(TraitKey::Spellcaster),
            Spellbook => Self::new(key, 2)
                .requires_trait(TraitKey::Spellcaster)
                .requires_equipment(SpellcastingImplement),
            Torch => Self::new(key, 1),
            Familiar => Self::new(key, 3),
            Horn | Bells | Drums => Self::new(key, 2),
            PortableBarricade => Self::new(key, 4),
            MedicalSupplies => Self::new(key, 2),
            LaddersRopes => Self::new(key, 3),
            Trinket => Self::new(key, 1),
        }
    }

    /// The standard equipment catalog.
    #[must_use]
    pub fn catalog() -> &'static Catalog<Self> {
        &EQUIPMENT
    }

    /// Look up a standard definition.
    #[must_use]
    pub fn get(key: EquipmentKey) -> Option<&'static Self> {
        EQUIPMENT.get(key)
    }

    /// Every standard piece of equipment, in presentation order.
    pub fn options() -> impl Iterator<Item = &'static Self> {
        EQUIPMENT.iter()
    }

    #[must_use]
    pub fn points_cost(&self) -> i32 {
        self.points_cost
    }

    /// Equipment that must already be carried.
    #[must_use]
    pub fn equipment_prerequisites(&self) -> &[EquipmentKey] {
        &self.equipment_prerequisites
    }

    /// Traits the carrier must have.
    #[must_use]
    pub fn trait_prerequisites(&self) -> &[TraitKey] {
        &self.trait_prerequisites
    }
}

impl Keyed for EquipmentDefinition {
    type Key = EquipmentKey;

    fn key(&self) -> EquipmentKey {
        self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_key() {
        assert_eq!(EquipmentDefinition::catalog().len(), EquipmentKey::iter().count());
    }

    #[test]
    fn test_spellbook_requires_implement() {
        let book = EquipmentDefinition::get(EquipmentKey::Spellbook).unwrap();
        assert_eq!(book.equipment_prerequisites(), [EquipmentKey::SpellcastingImplement]);
        assert_eq!(book.trait_prerequisites(), [TraitKey::Spellcaster]);
    }

    #[test]
    fn test_costs() {
        let cost = |key| EquipmentDefinition::get(key).unwrap().points_cost();
        assert_eq!(cost(EquipmentKey::Torch), 1);
        assert_eq!(cost(EquipmentKey::PortableBarricade), 4);
        assert_eq!(cost(EquipmentKey::Drums), 2);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(EquipmentKey::LaddersRopes.to_string(), "Ladders / Ropes");
    }
}
