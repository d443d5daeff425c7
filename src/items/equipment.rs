//! Miscellaneous equipment instances.

use serde::{Deserialize, Serialize};

use super::equippable::EquippableItem;
use super::property::{PropertyArg, PropertyList};
use crate::catalog::{EquipmentDefinition, EquipmentKey, PropertyKey};
use crate::core::Keyed;
use crate::error::{Result, RulesError};

/// A piece of equipment carried by a character.
///
/// The instance keeps its own copy of the definition it was built from,
/// so custom definitions carry their prerequisites with them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiscellaneousEquipment {
    definition: EquipmentDefinition,
    magical: bool,
    properties: PropertyList,
}

impl MiscellaneousEquipment {
    /// Build standard equipment by key.
    pub fn new(key: EquipmentKey) -> Result<Self> {
        EquipmentDefinition::get(key)
            .map(Self::from_definition)
            .ok_or_else(|| RulesError::not_in_catalog("equipment", key))
    }

    #[must_use]
    pub fn from_definition(definition: &EquipmentDefinition) -> Self {
        Self {
            definition: definition.clone(),
            magical: false,
            properties: PropertyList::new(),
        }
    }

    /// Attach a standard property (builder pattern).
    pub fn with_property(self, key: PropertyKey) -> Result<Self> {
        self.with_property_arg(key, PropertyArg::None)
    }

    /// Attach a standard property with an instance argument (builder pattern).
    pub fn with_property_arg(mut self, key: PropertyKey, arg: PropertyArg) -> Result<Self> {
        self.attach_with(key, arg)?;
        Ok(self)
    }

    #[must_use]
    pub fn definition(&self) -> &EquipmentDefinition {
        &self.definition
    }

    #[must_use]
    pub fn is_magical(&self) -> bool {
        self.magical
    }

    pub(crate) fn refresh_enchantment(&mut self) {
        self.magical = self.properties.contains(PropertyKey::Magic);
    }
}

impl Keyed for MiscellaneousEquipment {
    type Key = EquipmentKey;

    fn key(&self) -> EquipmentKey {
        self.definition.key()
    }
}

impl EquippableItem for MiscellaneousEquipment {
    fn name(&self) -> &str {
        let name: &'static str = self.definition.key().into();
        name
    }

    fn base_points_cost(&self) -> i32 {
        self.definition.points_cost()
    }

    fn properties(&self) -> &PropertyList {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyList {
        &mut self.properties
    }
}

/// Equipment to add to a character: a catalog key or a concrete instance.
#[derive(Clone, Debug)]
pub enum EquipmentSource {
    Catalog(EquipmentKey),
    Custom(MiscellaneousEquipment),
}

impl EquipmentSource {
    pub fn into_equipment(self) -> Result<MiscellaneousEquipment> {
        match self {
            EquipmentSource::Catalog(key) => MiscellaneousEquipment::new(key),
            EquipmentSource::Custom(equipment) => Ok(equipment),
        }
    }
}

impl From<EquipmentKey> for EquipmentSource {
    fn from(key: EquipmentKey) -> Self {
        EquipmentSource::Catalog(key)
    }
}

impl From<MiscellaneousEquipment> for EquipmentSource {
    fn from(equipment: MiscellaneousEquipment) -> Self {
        EquipmentSource::Custom(equipment)
    }
}
