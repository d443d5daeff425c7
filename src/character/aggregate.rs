//! The character aggregate.
//!
//! `Character` owns everything a miniature is built from and is the only
//! place composition rules are enforced. Every operation validates first
//! and mutates second, so an `Err` leaves the character untouched.
//!
//! ## Weapons
//!
//! A character always holds at least one weapon. With nothing else equipped
//! it holds exactly Unarmed; equipping a real weapon replaces it and
//! dropping the last weapon brings it back.
//!
//! ## Cost
//!
//! `points_cost` is recomputed from the owned parts on every call:
//! attributes, class, armour, shield, mount, traits, potions, weapons and
//! equipment. Skills and elementals are free.
//!
//! Collections are persistent vectors, so `clone()` snapshots a loadout
//! without copying it; the clone and the original diverge on write.

use im::Vector;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use super::attributes::Attributes;
use super::spellcasting::Spellcasting;
use crate::catalog::{
    Armour, CharacterClass, CharacterTrait, Elemental, EquipmentKey, Mount, MountKey, Potion,
    PotionKey, Shield, Skill, SkillKey, TraitKey,
};
use crate::core::keyed::{missing_keys, position_of};
use crate::core::{AttributeKind, Keyed, RulesConfig};
use crate::effects::Effect;
use crate::error::{PrerequisiteViolation, Result, RulesError};
use crate::items::{
    EquipmentSource, EquippableItem, MiscellaneousEquipment, Weapon, WeaponSource,
};

static UNARMED: Lazy<Weapon> = Lazy::new(|| {
    Weapon::unarmed().expect("the standard stat table has an entry for the unarmed profile")
});

/// A character under construction.
#[derive(Clone, Debug, Serialize)]
pub struct Character {
    name: Option<String>,
    is_commander: bool,
    character_class: CharacterClass,
    attributes: Attributes,
    armour: Armour,
    shield: Shield,
    mount: Option<Mount>,
    spellcasting: Spellcasting,
    traits: Vector<CharacterTrait>,
    skills: Vector<Skill>,
    equipment: Vector<MiscellaneousEquipment>,
    potions: Vector<Potion>,
    weapons: Vector<Weapon>,
    elementals: Vector<Elemental>,
}

impl Character {
    /// A regular follower under the standard ruleset.
    #[must_use]
    pub fn regular() -> Self {
        Self::build(&RulesConfig::default(), CharacterClass::Regular, false)
    }

    /// A commander under the standard ruleset.
    #[must_use]
    pub fn leader() -> Self {
        Self::build(&RulesConfig::default(), CharacterClass::Regular, true)
    }

    /// An instinct-driven follower under the standard ruleset.
    #[must_use]
    pub fn instinct() -> Self {
        Self::build(&RulesConfig::default(), CharacterClass::Instinct, false)
    }

    /// A character under a custom ruleset.
    pub fn with_config(config: &RulesConfig, class: CharacterClass, is_commander: bool) -> Result<Self> {
        config.validate()?;
        if is_commander && class == CharacterClass::Instinct {
            return Err(RulesError::InvalidCommanderClass);
        }
        Ok(Self::build(config, class, is_commander))
    }

    fn build(config: &RulesConfig, class: CharacterClass, is_commander: bool) -> Self {
        Self {
            name: None,
            is_commander,
            character_class: class,
            attributes: Attributes::from_config(config),
            armour: Armour::None,
            shield: Shield::None,
            mount: None,
            spellcasting: Spellcasting::default(),
            traits: Vector::new(),
            skills: Vector::new(),
            equipment: Vector::new(),
            potions: Vector::new(),
            weapons: Vector::unit(UNARMED.clone()),
            elementals: Vector::new(),
        }
    }

    // === Identity ===

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    #[must_use]
    pub fn is_commander(&self) -> bool {
        self.is_commander
    }

    #[must_use]
    pub fn is_regular(&self) -> bool {
        self.character_class == CharacterClass::Regular
    }

    #[must_use]
    pub fn character_class(&self) -> CharacterClass {
        self.character_class
    }

    /// Change class. Commanders can never become Instinct.
    pub fn set_character_class(&mut self, class: CharacterClass) -> Result<()> {
        if self.is_commander && class == CharacterClass::Instinct {
            debug!(?class, "rejected class change for commander");
            return Err(RulesError::InvalidCommanderClass);
        }
        self.character_class = class;
        debug!(%class, "set character class");
        Ok(())
    }

    // === Attributes ===

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Buy an attribute to `base` under this character's ruleset.
    pub fn set_attribute(&mut self, kind: AttributeKind, base: i32) -> Result<()> {
        self.attributes.set_base(kind, base)?;
        debug!(attribute = %kind, base, "set attribute");
        Ok(())
    }

    // === Spellcasting ===

    #[must_use]
    pub fn spellcasting(&self) -> &Spellcasting {
        &self.spellcasting
    }

    pub(crate) fn spellcasting_mut(&mut self) -> &mut Spellcasting {
        &mut self.spellcasting
    }

    /// Spell pool: extra pool plus MND plus one.
    #[must_use]
    pub fn spell_pool_limit(&self) -> i32 {
        self.spellcasting.pool + self.attributes.value(AttributeKind::Mind) + 1
    }

    #[must_use]
    pub fn spellcasting_slots_limit(&self) -> i32 {
        self.spellcasting.slots
    }

    #[must_use]
    pub fn spellcasting_schools_limit(&self) -> i32 {
        self.spellcasting.schools
    }

    /// Overwrite the extra spell pool, including anything effects added.
    pub fn set_spell_pool_limit(&mut self, pool: i32) {
        self.spellcasting.pool = pool;
    }

    pub fn set_spellcasting_slots_limit(&mut self, slots: i32) {
        self.spellcasting.slots = slots;
    }

    pub fn set_spellcasting_schools_limit(&mut self, schools: i32) {
        self.spellcasting.schools = schools;
    }

    // === Traits ===

    #[must_use]
    pub fn traits(&self) -> &Vector<CharacterTrait> {
        &self.traits
    }

    #[must_use]
    pub fn has_trait(&self, key: TraitKey) -> bool {
        position_of(&self.traits, key).is_some()
    }

    /// Add a standard trait and apply its effect.
    pub fn add_trait(&mut self, key: TraitKey) -> Result<()> {
        let definition = CharacterTrait::get(key).ok_or_else(|| RulesError::not_in_catalog("trait", key))?;
        self.add_trait_definition(definition.clone());
        Ok(())
    }

    /// Add any trait definition and apply its effect.
    pub fn add_trait_definition(&mut self, definition: CharacterTrait) {
        let effect = definition.effect().clone();
        debug!(trait_key = %definition.key(), "added trait");
        self.traits.push_back(definition);
        effect.apply(self);
    }

    /// Remove the first trait with `key` and revert its effect.
    pub fn remove_trait(&mut self, key: TraitKey) {
        if let Some(index) = position_of(&self.traits, key) {
            let removed = self.traits.remove(index);
            removed.effect().revert(self);
            debug!(trait_key = %key, "removed trait");
        }
    }

    // === Skills ===

    #[must_use]
    pub fn skills(&self) -> &Vector<Skill> {
        &self.skills
    }

    #[must_use]
    pub fn has_skill(&self, key: SkillKey) -> bool {
        position_of(&self.skills, key).is_some()
    }

    /// Add a standard skill if the character qualifies, then apply its effect.
    pub fn add_skill(&mut self, key: SkillKey) -> Result<()> {
        let definition = Skill::get(key).ok_or_else(|| RulesError::not_in_catalog("skill", key))?;
        self.add_skill_definition(definition.clone())
    }

    /// Add any skill definition if the character qualifies.
    ///
    /// Checked in order: traits, skills, class, commander. The first
    /// failure is reported.
    pub fn add_skill_definition(&mut self, skill: Skill) -> Result<()> {
        if let Err(violation) = self.check_skill(&skill) {
            debug!(skill = %skill.key(), %violation, "rejected skill");
            return Err(RulesError::violation(skill.key(), violation));
        }

        let effect = skill.effect().clone();
        debug!(skill = %skill.key(), "added skill");
        self.skills.push_back(skill);
        effect.apply(self);
        Ok(())
    }

    fn check_skill(&self, skill: &Skill) -> std::result::Result<(), PrerequisiteViolation> {
        let missing = missing_keys(skill.trait_prerequisites(), &self.traits);
        if !missing.is_empty() {
            return Err(PrerequisiteViolation::MissingTraits(missing));
        }

        let missing = missing_keys(skill.skill_prerequisites(), &self.skills);
        if !missing.is_empty() {
            return Err(PrerequisiteViolation::MissingSkills(missing));
        }

        if skill.disallowed_classes().contains(&self.character_class) {
            return Err(PrerequisiteViolation::DisallowedClass(self.character_class));
        }

        if skill.is_commander_only() && !self.is_commander {
            return Err(PrerequisiteViolation::CommanderOnly);
        }

        Ok(())
    }

    /// Remove the first skill with `key` and revert its effect.
    pub fn remove_skill(&mut self, key: SkillKey) {
        if let Some(index) = position_of(&self.skills, key) {
            let removed = self.skills.remove(index);
            removed.effect().revert(self);
            debug!(skill = %key, "removed skill");
        }
    }

    // === Equipment ===

    #[must_use]
    pub fn equipment(&self) -> &Vector<MiscellaneousEquipment> {
        &self.equipment
    }

    #[must_use]
    pub fn has_equipment(&self, key: EquipmentKey) -> bool {
        position_of(&self.equipment, key).is_some()
    }

    /// Add equipment if its trait and equipment prerequisites are met.
    pub fn add_equipment(&mut self, source: impl Into<EquipmentSource>) -> Result<()> {
        let equipment = source.into().into_equipment()?;
        let key = equipment.key();
        let definition = equipment.definition();

        let missing = missing_keys(definition.trait_prerequisites(), &self.traits);
        if !missing.is_empty() {
            debug!(equipment = %key, ?missing, "rejected equipment");
            return Err(RulesError::violation(key, PrerequisiteViolation::MissingTraits(missing)));
        }

        let missing = missing_keys(definition.equipment_prerequisites(), &self.equipment);
        if !missing.is_empty() {
            debug!(equipment = %key, ?missing, "rejected equipment");
            return Err(RulesError::violation(
                key,
                PrerequisiteViolation::MissingEquipment(missing),
            ));
        }

        debug!(equipment = %key, points = equipment.points_cost(), "added equipment");
        self.equipment.push_back(equipment);
        Ok(())
    }

    /// Remove the first piece of equipment with `key`.
    pub fn remove_equipment(&mut self, key: EquipmentKey) {
        if let Some(index) = position_of(&self.equipment, key) {
            self.equipment.remove(index);
            debug!(equipment = %key, "removed equipment");
        }
    }

    // === Weapons ===

    /// Weapons in the order they were added. Never empty.
    #[must_use]
    pub fn weapons(&self) -> &Vector<Weapon> {
        &self.weapons
    }

    fn holds_only_placeholder(&self) -> bool {
        self.weapons.len() == 1 && self.weapons[0] == *UNARMED
    }

    /// Equip a weapon. The plain Unarmed placeholder is dropped when the
    /// first other weapon arrives.
    ///
    /// Adding a plain Unarmed changes nothing. A customised Unarmed (extra
    /// properties, say) is a weapon like any other and is kept.
    pub fn add_weapon(&mut self, source: impl Into<WeaponSource>) -> Result<()> {
        let weapon = source.into().into_weapon()?;
        if weapon == *UNARMED {
            return Ok(());
        }

        if self.holds_only_placeholder() {
            self.weapons.clear();
        }
        debug!(weapon = weapon.key(), points = weapon.points_cost(), "added weapon");
        self.weapons.push_back(weapon);
        Ok(())
    }

    /// Remove the first weapon named `key`. Unarmed returns if none are left.
    pub fn remove_weapon(&mut self, key: &str) {
        let Some(index) = self.weapons.iter().position(|w| w.key() == key) else {
            return;
        };

        self.weapons.remove(index);
        if self.weapons.is_empty() {
            self.weapons.push_back(UNARMED.clone());
        }
        debug!(weapon = key, "removed weapon");
    }

    // === Mount, armour, shield ===

    #[must_use]
    pub fn mount(&self) -> Option<&Mount> {
        self.mount.as_ref()
    }

    /// Ride a standard mount, replacing any current one.
    pub fn add_mount(&mut self, key: MountKey) -> Result<()> {
        let mount = Mount::get(key).ok_or_else(|| RulesError::not_in_catalog("mount", key))?;
        self.mount = Some(*mount);
        debug!(mount = %key, "added mount");
        Ok(())
    }

    pub fn remove_mount(&mut self) {
        self.mount = None;
    }

    #[must_use]
    pub fn armour(&self) -> Armour {
        self.armour
    }

    pub fn add_armour(&mut self, armour: Armour) {
        self.armour = armour;
        debug!(%armour, "set armour");
    }

    pub fn remove_armour(&mut self) {
        self.armour = Armour::None;
    }

    #[must_use]
    pub fn shield(&self) -> Shield {
        self.shield
    }

    pub fn add_shield(&mut self, shield: Shield) {
        self.shield = shield;
        debug!(%shield, "set shield");
    }

    pub fn remove_shield(&mut self) {
        self.shield = Shield::None;
    }

    // === Potions and elementals ===

    #[must_use]
    pub fn potions(&self) -> &Vector<Potion> {
        &self.potions
    }

    pub fn add_potion(&mut self, key: PotionKey) -> Result<()> {
        let potion = Potion::get(key).ok_or_else(|| RulesError::not_in_catalog("potion", key))?;
        self.potions.push_back(*potion);
        debug!(potion = %key, "added potion");
        Ok(())
    }

    pub fn remove_potion(&mut self, key: PotionKey) {
        if let Some(index) = position_of(&self.potions, key) {
            self.potions.remove(index);
        }
    }

    #[must_use]
    pub fn elementals(&self) -> &Vector<Elemental> {
        &self.elementals
    }

    pub fn add_elemental(&mut self, elemental: Elemental) {
        self.elementals.push_back(elemental);
    }

    pub fn remove_elemental(&mut self, elemental: Elemental) {
        if let Some(index) = position_of(&self.elementals, elemental) {
            self.elementals.remove(index);
        }
    }

    // === Cost ===

    /// Total points cost of the current loadout.
    #[must_use]
    pub fn points_cost(&self) -> i32 {
        self.attributes.points_cost()
            + self.character_class.points_cost()
            + self.armour.points_cost()
            + self.shield.points_cost()
            + self.mount.map_or(0, |m| m.points_cost())
            + self.traits.iter().map(CharacterTrait::points_cost).sum::<i32>()
            + self.potions.iter().map(Potion::points_cost).sum::<i32>()
            + self.weapons.iter().map(EquippableItem::points_cost).sum::<i32>()
            + self.equipment.iter().map(EquippableItem::points_cost).sum::<i32>()
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::regular()
    }
}
