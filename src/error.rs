//! Error types for loadout validation.
//!
//! Every failure in this crate is a legality violation: the caller asked for
//! a composition the rules do not allow. None of them are transient, so
//! nothing here is retried. Operations validate before they mutate, which
//! means an `Err` always leaves the receiver exactly as it was.

use std::fmt::Display;

use crate::catalog::{CharacterClass, EquipmentKey, PropertyKey, SkillKey, TraitKey};
use crate::core::AttributeKind;

/// Result alias used throughout the crate.
pub type Result<T, E = RulesError> = std::result::Result<T, E>;

/// Errors raised by catalog lookups, item construction and character building.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// No stat table entry matches the exact `(speed, strength)` pair.
    #[error("speed {speed} and strength {strength} are not a valid weapon stat combination")]
    InvalidStatCombination { speed: u8, strength: u8 },

    /// A property was attached before the properties it depends on.
    #[error("cannot attach {property}: the item must already have {}", join(.missing))]
    MissingPrerequisite {
        property: PropertyKey,
        missing: Vec<PropertyKey>,
    },

    /// A character-level add was rejected.
    #[error("cannot add {item}: {violation}")]
    PrerequisiteViolation {
        item: String,
        violation: PrerequisiteViolation,
    },

    /// Commanders can never use the Instinct class.
    #[error("a commander cannot be set to the Instinct character class")]
    InvalidCommanderClass,

    /// An attribute was bought outside the configured bounds.
    #[error("{attribute} value {value} is outside {min}..={max}")]
    AttributeOutOfRange {
        attribute: AttributeKind,
        value: i32,
        min: i32,
        max: i32,
    },

    /// A `RulesConfig` failed validation.
    #[error("invalid rules configuration: {0}")]
    InvalidConfig(String),

    /// A key has no entry in the catalog it was looked up in.
    #[error("{key} is not in the {catalog} catalog")]
    NotInCatalog { catalog: &'static str, key: String },
}

impl RulesError {
    /// Shorthand for a character-level prerequisite violation.
    pub fn violation(item: impl Display, violation: PrerequisiteViolation) -> Self {
        Self::PrerequisiteViolation {
            item: item.to_string(),
            violation,
        }
    }

    /// Shorthand for a failed catalog lookup.
    pub fn not_in_catalog(catalog: &'static str, key: impl Display) -> Self {
        Self::NotInCatalog {
            catalog,
            key: key.to_string(),
        }
    }

    /// True for the prerequisite family (property and character level).
    #[must_use]
    pub fn is_prerequisite_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingPrerequisite { .. } | Self::PrerequisiteViolation { .. }
        )
    }
}

/// The specific requirement a character failed to meet.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PrerequisiteViolation {
    #[error("the character must have {}", join(.0))]
    MissingTraits(Vec<TraitKey>),

    #[error("the character must have {}", join(.0))]
    MissingSkills(Vec<SkillKey>),

    #[error("the character must have {}", join(.0))]
    MissingEquipment(Vec<EquipmentKey>),

    #[error("it is not available to the {0} character class")]
    DisallowedClass(CharacterClass),

    #[error("this character is not a commander")]
    CommanderOnly,
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
