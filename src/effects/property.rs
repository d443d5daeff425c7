//! Property effects on weapons and equipment.

use serde::{Deserialize, Serialize};

use super::effect::Effect;
use crate::items::{MiscellaneousEquipment, Weapon};

/// What attaching or detaching a property does to its item.
///
/// Effects recompute derived item state from the properties currently
/// attached, so `apply` and `revert` are the same operation and a
/// detach-then-attach always lands back on the original state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyEffect {
    /// Pure cost modifier.
    #[default]
    None,
    /// Recompute range text (Reach, Ranged).
    RefreshRange,
    /// Recompute the magical flag (Magic).
    Enchant,
}

impl Effect<Weapon> for PropertyEffect {
    fn apply(&self, weapon: &mut Weapon) {
        match self {
            PropertyEffect::None => {}
            PropertyEffect::RefreshRange => weapon.refresh_range(),
            PropertyEffect::Enchant => weapon.refresh_enchantment(),
        }
    }

    fn revert(&self, weapon: &mut Weapon) {
        self.apply(weapon);
    }
}

impl Effect<MiscellaneousEquipment> for PropertyEffect {
    fn apply(&self, equipment: &mut MiscellaneousEquipment) {
        match self {
            // Equipment has no range
            PropertyEffect::None | PropertyEffect::RefreshRange => {}
            PropertyEffect::Enchant => equipment.refresh_enchantment(),
        }
    }

    fn revert(&self, equipment: &mut MiscellaneousEquipment) {
        self.apply(equipment);
    }
}
