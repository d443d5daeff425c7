//! Effect system for properties, traits and skills.
//!
//! - `Effect<Owner>`: capability trait with symmetric `apply` / `revert`
//! - `PropertyEffect`: what a property does to its weapon or equipment
//! - `CharacterEffect`: what a trait or skill does to its character
//!
//! ## Design Philosophy
//!
//! Effects are plain data (enums) interpreted against an owner, not stored
//! closures. That keeps catalog definitions serialisable and comparable,
//! and makes every effect's inverse explicit.

mod character;
mod effect;
mod property;

pub use character::CharacterEffect;
pub use effect::Effect;
pub use property::PropertyEffect;
