//! The effect capability.
//!
//! An effect is a reversible mutation of whatever owns the thing that
//! carries it: a property mutates its weapon, a trait mutates its character.
//! Owners call `apply` after an add and `revert` after a remove, so every
//! effect must leave its owner as it found it when the two are paired.

/// A reversible side effect on an owner.
pub trait Effect<Owner: ?Sized> {
    /// Run after the carrier has been added to `owner`.
    fn apply(&self, owner: &mut Owner);

    /// Run after the carrier has been removed from `owner`.
    fn revert(&self, owner: &mut Owner);
}
