//! Potions. One-shot consumables bought for points.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use super::registry::Catalog;
use crate::core::Keyed;

/// Identifier of a potion.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
pub enum PotionKey {
    Healing,
    Strength,
    Swiftness,
    Invisibility,
    Antidote,
}

/// A potion definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    key: PotionKey,
    points_cost: i32,
}

static POTIONS: Lazy<Catalog<Potion>> = Lazy::new(|| PotionKey::iter().map(Potion::standard).collect());

impl Potion {
    #[must_use]
    pub const fn new(key: PotionKey, points_cost: i32) -> Self {
        Self { key, points_cost }
    }

    #[must_use]
    pub fn standard(key: PotionKey) -> Self {
        let points_cost = match key {
            PotionKey::Healing => 2,
            PotionKey::Strength => 3,
            PotionKey::Swiftness => 2,
            PotionKey::Invisibility => 4,
            PotionKey::Antidote => 1,
        };
        Self::new(key, points_cost)
    }

    #[must_use]
    pub fn catalog() -> &'static Catalog<Self> {
        &POTIONS
    }

    #[must_use]
    pub fn get(key: PotionKey) -> Option<&'static Self> {
        POTIONS.get(key)
    }

    pub fn options() -> impl Iterator<Item = &'static Self> {
        POTIONS.iter()
    }

    #[must_use]
    pub const fn points_cost(&self) -> i32 {
        self.points_cost
    }
}

impl Keyed for Potion {
    type Key = PotionKey;

    fn key(&self) -> PotionKey {
        self.key
    }
}
