//! # rust-warband
//!
//! A rules engine for building point-costed characters for tabletop
//! skirmish games.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every operation checks legality first. An
//!    `Err` never leaves a half-applied change behind.
//!
//! 2. **Catalogs are data**: traits, skills, properties, equipment and the
//!    weapon stat table are immutable, enum-keyed registries built once.
//!    Characters own instances, never references into a catalog.
//!
//! 3. **Costs are derived**: nothing caches a points total. Every cost is
//!    recomputed from what is currently owned.
//!
//! ## Architecture
//!
//! - **Property engine**: weapons and equipment share the
//!   `EquippableItem` attach/detach rules (prerequisites, repeatability,
//!   effects).
//!
//! - **Effects**: properties, traits and skills carry plain-data effects
//!   applied on add and reverted on remove.
//!
//! - **Persistent collections**: a `Character` clones in O(1) via `im-rs`,
//!   so a builder can snapshot a loadout before trying a change.
//!
//! ## Modules
//!
//! - `core`: attribute rules, ruleset configuration, the `Keyed` trait
//! - `catalog`: stat table, properties, traits, skills, equipment, potions,
//!   mounts, armour, classes, elementals
//! - `items`: weapons, equipment and the property engine
//! - `effects`: property and character effects
//! - `character`: the character aggregate
//! - `error`: `RulesError`

pub mod core;
pub mod catalog;
pub mod items;
pub mod effects;
pub mod character;
pub mod error;

// Re-export commonly used types
pub use crate::core::{AttributeKind, AttributeRule, Keyed, RulesConfig};

pub use crate::catalog::{
    Armour, Catalog, CharacterClass, CharacterTrait, Elemental, EquipmentDefinition, EquipmentKey,
    Mount, MountKey, Potion, PotionKey, PropertyDefinition, PropertyKey, Shield, Skill, SkillKey,
    StatCostTable, TraitKey, WeaponStat,
};

pub use crate::items::{
    EquipmentSource, EquippableItem, MiscellaneousEquipment, PropertyArg, PropertyInstance,
    PropertyList, Weapon, WeaponKey, WeaponSource,
};

pub use crate::effects::{CharacterEffect, Effect, PropertyEffect};

pub use crate::character::{Attribute, Attributes, Character, Spellcasting};

pub use crate::error::{PrerequisiteViolation, Result, RulesError};
