//! Weapon stat cost table.
//!
//! Every weapon has a speed and a strength. Only certain pairs are legal,
//! and each legal pair has a fixed base points cost. The table is a finite
//! enumerated set: there is no partial matching and no interpolation.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// One legal `(speed, strength)` pair and its points cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeaponStat {
    pub speed: u8,
    pub strength: u8,
    pub points_cost: i32,
}

impl WeaponStat {
    #[must_use]
    pub const fn new(speed: u8, strength: u8, points_cost: i32) -> Self {
        Self {
            speed,
            strength,
            points_cost,
        }
    }
}

/// Lookup from `(speed, strength)` to base points cost.
#[derive(Clone, Debug, Default)]
pub struct StatCostTable {
    entries: FxHashMap<(u8, u8), WeaponStat>,
}

static STANDARD: Lazy<StatCostTable> = Lazy::new(|| {
    [
        WeaponStat::new(1, 2, -6),
        WeaponStat::new(1, 3, -3),
        WeaponStat::new(1, 4, 0),
        WeaponStat::new(1, 5, 1),
        WeaponStat::new(1, 6, 4),
        WeaponStat::new(1, 7, 7),
        WeaponStat::new(2, 2, -3),
        WeaponStat::new(2, 3, 0),
        WeaponStat::new(2, 4, 2),
        WeaponStat::new(2, 5, 5),
        WeaponStat::new(2, 6, 8),
        WeaponStat::new(3, 2, 0),
        WeaponStat::new(3, 3, 3),
        WeaponStat::new(3, 4, 5),
        WeaponStat::new(3, 5, 8),
    ]
    .into_iter()
    .collect()
});

impl StatCostTable {
    /// The standard table every catalog weapon is validated against.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Look up the entry for an exact `(speed, strength)` pair.
    pub fn lookup(&self, speed: u8, strength: u8) -> Result<WeaponStat> {
        self.entries
            .get(&(speed, strength))
            .copied()
            .ok_or(RulesError::InvalidStatCombination { speed, strength })
    }

    /// Check whether a pair has an entry.
    #[must_use]
    pub fn contains(&self, speed: u8, strength: u8) -> bool {
        self.entries.contains_key(&(speed, strength))
    }

    /// Iterate over all entries (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &WeaponStat> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<WeaponStat> for StatCostTable {
    fn from_iter<I: IntoIterator<Item = WeaponStat>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|stat| ((stat.speed, stat.strength), stat))
                .collect(),
        }
    }
}
