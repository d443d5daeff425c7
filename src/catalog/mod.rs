//! Static rules catalogs.
//!
//! Every catalog is keyed by an enum, built once on first use, and shared
//! read-only for the life of the process. Lookups are O(1) and iteration
//! follows presentation order.

mod armour;
mod classes;
mod elementals;
mod equipment;
mod mounts;
mod potions;
mod properties;
mod registry;
mod skills;
mod stat_table;
mod traits;

pub use armour::{Armour, Shield};
pub use classes::CharacterClass;
pub use elementals::Elemental;
pub use equipment::{EquipmentDefinition, EquipmentKey};
pub use mounts::{Mount, MountKey};
pub use potions::{Potion, PotionKey};
pub use properties::{PropertyDefinition, PropertyKey};
pub use registry::Catalog;
pub use skills::{Skill, SkillKey};
pub use stat_table::{StatCostTable, WeaponStat};
pub use traits::{CharacterTrait, TraitKey};
