//! Spellcasting limits.

use serde::{Deserialize, Serialize};

/// How much magic a character may carry.
///
/// All three start at zero. The Spellcaster trait and the arcane skills
/// raise them through their effects; builders may also set them directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spellcasting {
    /// Extra spell pool on top of `MND + 1`.
    pub pool: i32,
    /// Spells the character may know.
    pub slots: i32,
    /// Schools of magic the character may draw from.
    pub schools: i32,
}
