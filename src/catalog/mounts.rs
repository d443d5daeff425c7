//! Mounts. A character rides at most one.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use super::registry::Catalog;
use crate::core::Keyed;

/// Identifier of a mount.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
pub enum MountKey {
    Pony,
    Horse,
    Warhorse,
    #[strum(serialize = "Giant Wolf")]
    GiantWolf,
}

/// A mount definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mount {
    key: MountKey,
    points_cost: i32,
    /// MOV the mount moves at, replacing the rider's own.
    movement: i32,
}

static MOUNTS: Lazy<Catalog<Mount>> = Lazy::new(|| MountKey::iter().map(Mount::standard).collect());

impl Mount {
    #[must_use]
    pub const fn new(key: MountKey, points_cost: i32, movement: i32) -> Self {
        Self {
            key,
            points_cost,
            movement,
        }
    }

    #[must_use]
    pub fn standard(key: MountKey) -> Self {
        match key {
            MountKey::Pony => Self::new(key, 4, 6),
            MountKey::Horse => Self::new(key, 6, 8),
            MountKey::Warhorse => Self::new(key, 9, 8),
            MountKey::GiantWolf => Self::new(key, 7, 7),
        }
    }

    #[must_use]
    pub fn catalog() -> &'static Catalog<Self> {
        &MOUNTS
    }

    #[must_use]
    pub fn get(key: MountKey) -> Option<&'static Self> {
        MOUNTS.get(key)
    }

    pub fn options() -> impl Iterator<Item = &'static Self> {
        MOUNTS.iter()
    }

    #[must_use]
    pub const fn points_cost(&self) -> i32 {
        self.points_cost
    }

    #[must_use]
    pub const fn movement(&self) -> i32 {
        self.movement
    }
}

impl Keyed for Mount {
    type Key = MountKey;

    fn key(&self) -> MountKey {
        self.key
    }
}
