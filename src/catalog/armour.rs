//! Armour and shields.
//!
//! Both slots always hold a value. "Nothing worn" is the zero-cost `None`
//! variant, a plain `Copy` value, so no two characters can ever share or
//! mutate the same sentinel.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// Body armour.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
pub enum Armour {
    #[default]
    None,
    Light,
    Medium,
    Heavy,
}

impl Armour {
    #[must_use]
    pub const fn points_cost(self) -> i32 {
        match self {
            Armour::None => 0,
            Armour::Light => 2,
            Armour::Medium => 4,
            Armour::Heavy => 6,
        }
    }

    /// Armour value added to defence rolls.
    #[must_use]
    pub const fn armour_value(self) -> i32 {
        match self {
            Armour::None => 0,
            Armour::Light => 1,
            Armour::Medium => 2,
            Armour::Heavy => 3,
        }
    }

    pub fn options() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Shield carried in the off hand.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
pub enum Shield {
    #[default]
    None,
    Buckler,
    Standard,
    Tower,
}

impl Shield {
    #[must_use]
    pub const fn points_cost(self) -> i32 {
        match self {
            Shield::None => 0,
            Shield::Buckler => 1,
            Shield::Standard => 2,
            Shield::Tower => 3,
        }
    }

    #[must_use]
    pub const fn armour_value(self) -> i32 {
        match self {
            Shield::None | Shield::Buckler => 0,
            Shield::Standard => 1,
            Shield::Tower => 2,
        }
    }

    pub fn options() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}
