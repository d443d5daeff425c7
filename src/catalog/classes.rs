//! Character classes.
//!
//! A character is exactly one class at a time. Commanders are always
//! Regular; see `Character::set_character_class`.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// How a character takes orders.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
pub enum CharacterClass {
    /// Trained troops that follow orders.
    #[default]
    Regular,
    /// Beasts and berserkers acting on instinct.
    Instinct,
}

impl CharacterClass {
    #[must_use]
    pub const fn points_cost(self) -> i32 {
        match self {
            CharacterClass::Regular => 2,
            CharacterClass::Instinct => 0,
        }
    }

    /// Every class, in presentation order.
    pub fn options() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs() {
        assert_eq!(CharacterClass::Regular.points_cost(), 2);
        assert_eq!(CharacterClass::Instinct.points_cost(), 0);
    }

    #[test]
    fn test_default_is_regular() {
        assert_eq!(CharacterClass::default(), CharacterClass::Regular);
        assert_eq!(CharacterClass::options().count(), 2);
    }
}
