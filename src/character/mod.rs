//! The character aggregate and its parts.

mod aggregate;
mod attributes;
mod spellcasting;

pub use aggregate::Character;
pub use attributes::{Attribute, Attributes};
pub use spellcasting::Spellcasting;
