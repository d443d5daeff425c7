//! Core building blocks shared by catalogs and characters.
//!
//! - `keyed`: the `Keyed` trait every catalog entry implements
//! - `attribute`: the five character attributes and their purchase rules
//! - `config`: `RulesConfig`, the ruleset a character is built under

pub mod attribute;
pub mod config;
pub mod keyed;

pub use attribute::{AttributeKind, AttributeRule};
pub use config::RulesConfig;
pub use keyed::Keyed;
