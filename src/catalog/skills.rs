//! Skills.
//!
//! Skills carry no points cost but are gated:
//! - trait prerequisites (e.g. Arcane Study needs Spellcaster)
//! - skill prerequisites (e.g. Field Surgeon needs Medic)
//! - classes that may not take them
//! - commander-only skills
//!
//! The checks themselves live in `Character::add_skill`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use super::classes::CharacterClass;
use super::registry::Catalog;
use super::traits::TraitKey;
use crate::core::{AttributeKind, Keyed};
use crate::effects::CharacterEffect;

/// Identifier of a skill.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
pub enum SkillKey {
    Medic,
    #[strum(serialize = "Field Surgeon")]
    FieldSurgeon,
    #[strum(serialize = "Arcane Study")]
    ArcaneStudy,
    #[strum(serialize = "Spell Mastery")]
    SpellMastery,
    Marksman,
    Sniper,
    Feral,
    Sprinter,
    #[strum(serialize = "Inspiring Presence")]
    InspiringPresence,
    Tactician,
}

/// A skill definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    key: SkillKey,
    trait_prerequisites: SmallVec<[TraitKey; 1]>,
    skill_prerequisites: SmallVec<[SkillKey; 1]>,
    disallowed_classes: SmallVec<[CharacterClass; 1]>,
    commander_only: bool,
    effect: CharacterEffect,
}

static SKILLS: Lazy<Catalog<Skill>> = Lazy::new(|| SkillKey::iter().map(Skill::standard).collect());

impl Skill {
    /// Create an ungated skill with no effect.
    #[must_use]
    pub fn new(key: SkillKey) -> Self {
        Self {
            key,
            trait_prerequisites: SmallVec::new(),
            skill_prerequisites: SmallVec::new(),
            disallowed_classes: SmallVec::new(),
            commander_only: false,
            effect: CharacterEffect::None,
        }
    }

    /// Require a trait (builder pattern).
    #[must_use]
    pub fn requires_trait(mut self, key: TraitKey) -> Self {
        self.trait_prerequisites.push(key);
        self
    }

    /// Require another skill (builder pattern).
    ///
    /// Panics if `key` is this skill's own key.
    #[must_use]
    pub fn requires_skill(mut self, key: SkillKey) -> Self {
        assert_ne!(key, self.key, "Skill {} cannot be its own prerequisite", self.key);
        self.skill_prerequisites.push(key);
        self
    }

    /// Forbid a class (builder pattern).
    #[must_use]
    pub fn disallow(mut self, class: CharacterClass) -> Self {
        self.disallowed_classes.push(class);
        self
    }

    /// Restrict to commanders (builder pattern).
    #[must_use]
    pub fn commander_only(mut self) -> Self {
        self.commander_only = true;
        self
    }

    /// Set the effect run when the skill is added (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: CharacterEffect) -> Self {
        self.effect = effect;
        self
    }

    /// The standard definition for a key.
    #[must_use]
    pub fn standard(key: SkillKey) -> Self {
        use SkillKey::*;

        match key {
            Medic => Self::new(Medic),
            FieldSurgeon => Self::new(FieldSurgeon).requires_skill(Medic),
            ArcaneStudy => Self::new(ArcaneStudy)
                .requires_trait(TraitKey::Spellcaster)
                .with_effect(CharacterEffect::ModifySpellcastingSchools(1)),
            SpellMastery => Self::new(SpellMastery)
                .requires_trait(TraitKey::Spellcaster)
                .requires_skill(ArcaneStudy)
                .with_effect(CharacterEffect::ModifySpellPool(2)),
            Marksman => Self::new(Marksman),
            Sniper => Self::new(Sniper)
                .requires_skill(Marksman)
                .disallow(CharacterClass::Instinct),
            Feral => Self::new(Feral)
                .disallow(CharacterClass::Regular)
                .with_effect(CharacterEffect::raise(AttributeKind::Physicality, 1)),
            Sprinter => Self::new(Sprinter)
                .requires_trait(TraitKey::Fleet)
                .with_effect(CharacterEffect::raise(AttributeKind::Move, 1)),
            InspiringPresence => Self::new(InspiringPresence).commander_only(),
            Tactician => Self::new(Tactician)
                .commander_only()
                .disallow(CharacterClass::Instinct),
        }
    }

    /// The standard skill catalog.
    #[must_use]
    pub fn catalog() -> &'static Catalog<Self> {
        &SKILLS
    }

    /// Look up a standard definition.
    #[must_use]
    pub fn get(key: SkillKey) -> Option<&'static Self> {
        SKILLS.get(key)
    }

    /// Every standard skill, in presentation order.
    pub fn options() -> impl Iterator<Item = &'static Self> {
        SKILLS.iter()
    }

    #[must_use]
    pub fn trait_prerequisites(&self) -> &[TraitKey] {
        &self.trait_prerequisites
    }

    #[must_use]
    pub fn skill_prerequisites(&self) -> &[SkillKey] {
        &self.skill_prerequisites
    }

    #[must_use]
    pub fn disallowed_classes(&self) -> &[CharacterClass] {
        &self.disallowed_classes
    }

    #[must_use]
    pub fn is_commander_only(&self) -> bool {
        self.commander_only
    }

    #[must_use]
    pub fn effect(&self) -> &CharacterEffect {
        &self.effect
    }
}

impl Keyed for Skill {
    type Key = SkillKey;

    fn key(&self) -> SkillKey {
        self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_key() {
        assert_eq!(Skill::catalog().len(), SkillKey::iter().count());
        for key in SkillKey::iter() {
            assert!(Skill::get(key).is_some());
        }
    }

    #[test]
    fn test_prerequisites_only_reference_other_skills() {
        for skill in Skill::options() {
            assert!(!skill.skill_prerequisites().contains(&skill.key()));
        }
    }

    #[test]
    fn test_spell_mastery_gates() {
        let mastery = Skill::get(SkillKey::SpellMastery).unwrap();
        assert_eq!(mastery.trait_prerequisites(), [TraitKey::Spellcaster]);
        assert_eq!(mastery.skill_prerequisites(), [SkillKey::ArcaneStudy]);
        assert!(!mastery.is_commander_only());
    }

    #[test]
    fn test_commander_skills() {
        let commander: Vec<_> = Skill::catalog()
            .find(|s| s.is_commander_only())
            .map(Keyed::key)
            .collect();
        assert_eq!(commander, [SkillKey::InspiringPresence, SkillKey::Tactician]);
    }

    #[test]
    #[should_panic(expected = "cannot be its own prerequisite")]
    fn test_self_prerequisite_panics() {
        let _ = Skill::new(SkillKey::Medic).requires_skill(SkillKey::Medic);
    }
}
