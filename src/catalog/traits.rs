//! Character traits.
//!
//! Traits are bought for points and may adjust the character when added,
//! e.g. Fleet raises MOV by one. They have no prerequisites of their own,
//! but skills and equipment can require them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use super::registry::Catalog;
use crate::core::{AttributeKind, Keyed};
use crate::effects::CharacterEffect;

/// Identifier of a trait.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
pub enum TraitKey {
    Spellcaster,
    Fleet,
    Brawny,
    Deft,
    Hardy,
    Cunning,
    Stealthy,
    Resolute,
}

/// A trait definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTrait {
    key: TraitKey,
    points_cost: i32,
    effect: CharacterEffect,
}

static TRAITS: Lazy<Catalog<CharacterTrait>> =
    Lazy::new(|| TraitKey::iter().map(CharacterTrait::standard).collect());

impl CharacterTrait {
    #[must_use]
    pub fn new(key: TraitKey, points_cost: i32) -> Self {
        Self {
            key,
            points_cost,
            effect: CharacterEffect::None,
        }
    }

    /// Set the effect run when the trait is added (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: CharacterEffect) -> Self {
        self.effect = effect;
        self
    }

    /// The standard definition for a key.
    #[must_use]
    pub fn standard(key: TraitKey) -> Self {
        match key {
            TraitKey::Spellcaster => Self::new(key, 4).with_effect(CharacterEffect::batch([
                CharacterEffect::ModifySpellcastingSlots(2),
                CharacterEffect::ModifySpellcastingSchools(1),
            ])),
            TraitKey::Fleet => Self::new(key, 3).with_effect(CharacterEffect::raise(AttributeKind::Move, 1)),
            TraitKey::Brawny => {
                Self::new(key, 3).with_effect(CharacterEffect::raise(AttributeKind::Physicality, 1))
            }
            TraitKey::Deft => Self::new(key, 3).with_effect(CharacterEffect::raise(AttributeKind::Dexterity, 1)),
            TraitKey::Hardy => {
                Self::new(key, 4).with_effect(CharacterEffect::raise(AttributeKind::Constitution, 1))
            }
            TraitKey::Cunning => Self::new(key, 3).with_effect(CharacterEffect::raise(AttributeKind::Mind, 1)),
            TraitKey::Stealthy => Self::new(key, 2),
            TraitKey::Resolute => Self::new(key, 2),
        }
    }

    /// The standard trait catalog.
    #[must_use]
    pub fn catalog() -> &'static Catalog<Self> {
        &TRAITS
    }

    /// Look up a standard definition.
    #[must_use]
    pub fn get(key: TraitKey) -> Option<&'static Self> {
        TRAITS.get(key)
    }

    /// Every standard trait, in presentation order.
    pub fn options() -> impl Iterator<Item = &'static Self> {
        TRAITS.iter()
    }

    #[must_use]
    pub fn points_cost(&self) -> i32 {
        self.points_cost
    }

    #[must_use]
    pub fn effect(&self) -> &CharacterEffect {
        &self.effect
    }
}

impl Keyed for CharacterTrait {
    type Key = TraitKey;

    fn key(&self) -> TraitKey {
        self.key
    }
}
