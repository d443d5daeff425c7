//! The property attach/detach engine shared by weapons and equipment.
//!
//! ## Attach
//!
//! 1. A non-repeatable property that is already attached is skipped
//!    (idempotent, not an error).
//! 2. Every prerequisite must already be attached, otherwise
//!    `MissingPrerequisite` is returned and the item is untouched.
//! 3. The definition is instantiated, appended, and its effect applied.
//!
//! ## Detach
//!
//! Every instance with the key is removed, then the effect is reverted once.
//! Properties that listed the detached one as a prerequisite stay attached;
//! callers that care must detach them too.

use tracing::{debug, trace};

use super::property::{PropertyArg, PropertyInstance, PropertyList};
use crate::catalog::{PropertyDefinition, PropertyKey};
use crate::core::Keyed;
use crate::effects::{Effect, PropertyEffect};
use crate::error::{Result, RulesError};

/// An item that carries properties and has a points cost.
///
/// Implementors supply storage; the attach/detach rules and the cost
/// rollup are provided.
pub trait EquippableItem: Sized {
    /// Display name / identity of the item.
    fn name(&self) -> &str;

    /// Cost before properties.
    fn base_points_cost(&self) -> i32;

    /// Attached properties in attach order.
    fn properties(&self) -> &PropertyList;

    /// Mutable access to the property storage.
    ///
    /// `PropertyList` only exposes mutation inside this crate, so this
    /// cannot be used to bypass the attach rules.
    fn properties_mut(&mut self) -> &mut PropertyList;

    /// Base cost plus every attached property's delta.
    fn points_cost(&self) -> i32 {
        self.base_points_cost() + self.properties().total_points_delta()
    }

    /// Whether a property is attached.
    fn has_property(&self, key: PropertyKey) -> bool {
        self.properties().contains(key)
    }

    /// Attach a property from any definition.
    fn attach_property(&mut self, definition: &PropertyDefinition, arg: PropertyArg) -> Result<&mut Self>
    where
        PropertyEffect: Effect<Self>,
    {
        let key = definition.key();
        if !definition.multiple_allowed() && self.has_property(key) {
            trace!(item = self.name(), property = %key, "property already attached, skipping");
            return Ok(self);
        }

        let missing = self.properties().missing(definition.prerequisites());
        if !missing.is_empty() {
            debug!(item = self.name(), property = %key, ?missing, "missing property prerequisites");
            return Err(RulesError::MissingPrerequisite {
                property: key,
                missing,
            });
        }

        self.properties_mut()
            .push(PropertyInstance::instantiate(definition, arg));
        definition.effect().apply(self);
        trace!(item = self.name(), property = %key, points = self.points_cost(), "attached property");
        Ok(self)
    }

    /// Detach every instance of a property.
    fn detach_property(&mut self, definition: &PropertyDefinition) -> &mut Self
    where
        PropertyEffect: Effect<Self>,
    {
        let removed = self.properties_mut().remove_all(definition.key());
        definition.effect().revert(self);
        trace!(item = self.name(), property = %definition.key(), removed, "detached property");
        self
    }

    /// Attach a standard property with no instance argument.
    fn attach(&mut self, key: PropertyKey) -> Result<&mut Self>
    where
        PropertyEffect: Effect<Self>,
    {
        self.attach_with(key, PropertyArg::None)
    }

    /// Attach a standard property with an instance argument.
    fn attach_with(&mut self, key: PropertyKey, arg: PropertyArg) -> Result<&mut Self>
    where
        PropertyEffect: Effect<Self>,
    {
        let definition =
            PropertyDefinition::get(key).ok_or_else(|| RulesError::not_in_catalog("property", key))?;
        self.attach_property(definition, arg)
    }

    /// Detach a standard property.
    fn detach(&mut self, key: PropertyKey) -> &mut Self
    where
        PropertyEffect: Effect<Self>,
    {
        match PropertyDefinition::get(key) {
            Some(definition) => self.detach_property(definition),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Weapon;

    #[test]
    fn test_custom_definition_with_prerequisite() {
        let serrated = PropertyDefinition::new(PropertyKey::HighCrit, 4)
            .with_prerequisite(PropertyKey::Light)
            .multiple();
        let mut knife = Weapon::knife().unwrap();

        let err = knife.attach_property(&serrated, PropertyArg::None).unwrap_err();
        assert_eq!(
            err,
            RulesError::MissingPrerequisite {
                property: PropertyKey::HighCrit,
                missing: vec![PropertyKey::Light],
            }
        );
        assert_eq!(knife.points_cost(), 3);

        knife.attach(PropertyKey::Light).unwrap();
        knife.attach_property(&serrated, PropertyArg::None).unwrap();
        knife.attach_property(&serrated, PropertyArg::None).unwrap();
        assert_eq!(knife.properties().count(PropertyKey::HighCrit), 2);
        assert_eq!(knife.points_cost(), 3 + 2 + 4 + 4);

        knife.detach_property(&serrated);
        assert!(!knife.has_property(PropertyKey::HighCrit));
        assert_eq!(knife.points_cost(), 5);
    }

    #[test]
    fn test_detach_absent_changes_nothing() {
        let mut dagger = Weapon::dagger().unwrap();
        let before = dagger.clone();

        dagger.detach(PropertyKey::Reach);
        dagger.detach(PropertyKey::Magic);

        assert_eq!(dagger, before);
        assert_eq!(dagger.points_cost(), 5);
        assert_eq!(dagger.range(), "Melee");
    }
}
