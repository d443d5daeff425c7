//! Equippable items: weapons and miscellaneous equipment, plus the
//! property engine they share.

mod equipment;
mod equippable;
mod property;
mod weapon;

pub use equipment::{EquipmentSource, MiscellaneousEquipment};
pub use equippable::EquippableItem;
pub use property::{PropertyArg, PropertyInstance, PropertyList};
pub use weapon::{
    Weapon, WeaponKey, WeaponSource, MELEE_RANGE, RANGED_INCREMENT_INCHES, REACH_INCREMENT_INCHES,
};
