//! Bound elementals. They carry no points cost of their own.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::core::Keyed;

/// An elemental bound to a spellcaster.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
pub enum Elemental {
    Fire,
    Water,
    Earth,
    Air,
}

impl Elemental {
    pub fn options() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl Keyed for Elemental {
    type Key = Elemental;

    fn key(&self) -> Elemental {
        *self
    }
}
