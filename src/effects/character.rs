//! Trait and skill effects on characters.

use serde::{Deserialize, Serialize};

use super::effect::Effect;
use crate::character::Character;
use crate::core::AttributeKind;

/// What adding or removing a trait or skill does to its character.
///
/// Every variant is a delta, so `revert` is `apply` with the sign flipped.
/// Attribute deltas land on the attribute's bonus, never on its purchased
/// base, so they change the value but not the attribute's points cost.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterEffect {
    /// No mechanical effect.
    #[default]
    None,
    /// Add `delta` to an attribute's bonus.
    ModifyAttribute { attribute: AttributeKind, delta: i32 },
    /// Add to the spell pool limit.
    ModifySpellPool(i32),
    /// Add to the spellcasting slots limit.
    ModifySpellcastingSlots(i32),
    /// Add to the spellcasting schools limit.
    ModifySpellcastingSchools(i32),
    /// Several effects, applied in order and reverted in reverse.
    Batch(Vec<CharacterEffect>),
}

impl CharacterEffect {
    /// Shorthand for `ModifyAttribute`.
    #[must_use]
    pub const fn raise(attribute: AttributeKind, delta: i32) -> Self {
        Self::ModifyAttribute { attribute, delta }
    }

    /// Combine effects into one.
    #[must_use]
    pub fn batch(effects: impl IntoIterator<Item = CharacterEffect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }

    fn run(&self, character: &mut Character, sign: i32) {
        match self {
            CharacterEffect::None => {}
            CharacterEffect::ModifyAttribute { attribute, delta } => {
                character.attributes_mut().adjust_bonus(*attribute, sign * delta);
            }
            CharacterEffect::ModifySpellPool(delta) => {
                character.spellcasting_mut().pool += sign * delta;
            }
            CharacterEffect::ModifySpellcastingSlots(delta) => {
                character.spellcasting_mut().slots += sign * delta;
            }
            CharacterEffect::ModifySpellcastingSchools(delta) => {
                character.spellcasting_mut().schools += sign * delta;
            }
            CharacterEffect::Batch(effects) => {
                if sign > 0 {
                    for effect in effects {
                        effect.run(character, sign);
                    }
                } else {
                    for effect in effects.iter().rev() {
                        effect.run(character, sign);
                    }
                }
            }
        }
    }
}

impl Effect<Character> for CharacterEffect {
    fn apply(&self, character: &mut Character) {
        self.run(character, 1);
    }

    fn revert(&self, character: &mut Character) {
        self.run(character, -1);
    }
}
