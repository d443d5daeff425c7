//! Ruleset configuration.
//!
//! Builders provide a `RulesConfig` when creating a character:
//! - `AttributeRule`: how each attribute is bought (default, bounds, cost)
//! - `RulesConfig`: one rule per attribute
//!
//! The standard ruleset is `RulesConfig::default()`. Alternative rulesets
//! (house rules, campaign variants) can be built in code or deserialised
//! by an outer layer; the engine itself never reads files.

use serde::{Deserialize, Serialize};

use super::attribute::{AttributeKind, AttributeRule};
use crate::error::{Result, RulesError};

/// Complete ruleset configuration.
///
/// ## Example
///
/// ```
/// use rust_warband::core::{AttributeKind, AttributeRule, RulesConfig};
///
/// let config = RulesConfig::default()
///     .with_rule(AttributeKind::Move, AttributeRule::new(5, 1, 10, 2));
///
/// assert_eq!(config.rule(AttributeKind::Move).default, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// MOV purchase rule.
    pub movement: AttributeRule,
    /// PHY purchase rule.
    pub physicality: AttributeRule,
    /// DEX purchase rule.
    pub dexterity: AttributeRule,
    /// CON purchase rule.
    pub constitution: AttributeRule,
    /// MND purchase rule.
    pub mind: AttributeRule,
}

impl Default for RulesConfig {
    /// The standard ruleset: MOV 4, PHY 0, DEX 0, CON 1, MND 0.
    fn default() -> Self {
        Self {
            movement: AttributeRule::new(4, 1, 10, 2),
            physicality: AttributeRule::new(0, 0, 6, 4),
            dexterity: AttributeRule::new(0, 0, 6, 3),
            constitution: AttributeRule::new(1, 1, 6, 4),
            mind: AttributeRule::new(0, 0, 6, 3),
        }
    }
}

impl RulesConfig {
    /// Get the rule for an attribute.
    #[must_use]
    pub fn rule(&self, kind: AttributeKind) -> AttributeRule {
        match kind {
            AttributeKind::Move => self.movement,
            AttributeKind::Physicality => self.physicality,
            AttributeKind::Dexterity => self.dexterity,
            AttributeKind::Constitution => self.constitution,
            AttributeKind::Mind => self.mind,
        }
    }

    /// Replace the rule for an attribute.
    #[must_use]
    pub fn with_rule(mut self, kind: AttributeKind, rule: AttributeRule) -> Self {
        let slot = match kind {
            AttributeKind::Move => &mut self.movement,
            AttributeKind::Physicality => &mut self.physicality,
            AttributeKind::Dexterity => &mut self.dexterity,
            AttributeKind::Constitution => &mut self.constitution,
            AttributeKind::Mind => &mut self.mind,
        };
        *slot = rule;
        self
    }

    /// Check every rule is internally consistent.
    ///
    /// Requires `min <= default <= max` and a non-negative per-point cost.
    pub fn validate(&self) -> Result<()> {
        use strum::IntoEnumIterator;

        for kind in AttributeKind::iter() {
            let rule = self.rule(kind);
            if !rule.allows(rule.default) {
                return Err(RulesError::InvalidConfig(format!(
                    "{kind} default {} is outside {}..={}",
                    rule.default, rule.min, rule.max
                )));
            }
            if rule.cost_per_point < 0 {
                return Err(RulesError::InvalidConfig(format!(
                    "{kind} cost per point must not be negative"
                )));
            }
        }
        Ok(())
    }
}
