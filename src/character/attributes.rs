//! A character's five attributes.
//!
//! Each attribute separates what was bought (`base`) from what traits and
//! skills grant (`bonus`). Only the base is priced.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::core::{AttributeKind, AttributeRule, RulesConfig};
use crate::error::{Result, RulesError};

/// One attribute value under its purchase rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    rule: AttributeRule,
    base: i32,
    bonus: i32,
}

impl Attribute {
    /// Start at the rule's default with no bonus.
    #[must_use]
    pub const fn new(rule: AttributeRule) -> Self {
        Self {
            rule,
            base: rule.default,
            bonus: 0,
        }
    }

    #[must_use]
    pub const fn rule(&self) -> AttributeRule {
        self.rule
    }

    #[must_use]
    pub const fn base(&self) -> i32 {
        self.base
    }

    #[must_use]
    pub const fn bonus(&self) -> i32 {
        self.bonus
    }

    /// Effective value: base plus bonus.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.base + self.bonus
    }

    #[must_use]
    pub const fn points_cost(&self) -> i32 {
        self.rule.cost_of(self.base)
    }
}

/// MOV, PHY, DEX, CON and MND.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    movement: Attribute,
    physicality: Attribute,
    dexterity: Attribute,
    constitution: Attribute,
    mind: Attribute,
}

impl Default for Attributes {
    fn default() -> Self {
        Self::from_config(&RulesConfig::default())
    }
}

impl Attributes {
    /// Every attribute at its configured default.
    #[must_use]
    pub fn from_config(config: &RulesConfig) -> Self {
        Self {
            movement: Attribute::new(config.movement),
            physicality: Attribute::new(config.physicality),
            dexterity: Attribute::new(config.dexterity),
            constitution: Attribute::new(config.constitution),
            mind: Attribute::new(config.mind),
        }
    }

    #[must_use]
    pub fn get(&self, kind: AttributeKind) -> &Attribute {
        match kind {
            AttributeKind::Move => &self.movement,
            AttributeKind::Physicality => &self.physicality,
            AttributeKind::Dexterity => &self.dexterity,
            AttributeKind::Constitution => &self.constitution,
            AttributeKind::Mind => &self.mind,
        }
    }

    fn get_mut(&mut self, kind: AttributeKind) -> &mut Attribute {
        match kind {
            AttributeKind::Move => &mut self.movement,
            AttributeKind::Physicality => &mut self.physicality,
            AttributeKind::Dexterity => &mut self.dexterity,
            AttributeKind::Constitution => &mut self.constitution,
            AttributeKind::Mind => &mut self.mind,
        }
    }

    /// Effective value of an attribute.
    #[must_use]
    pub fn value(&self, kind: AttributeKind) -> i32 {
        self.get(kind).value()
    }

    /// Buy an attribute up or down to `base`.
    pub fn set_base(&mut self, kind: AttributeKind, base: i32) -> Result<()> {
        let attribute = self.get_mut(kind);
        let rule = attribute.rule;
        if !rule.allows(base) {
            return Err(RulesError::AttributeOutOfRange {
                attribute: kind,
                value: base,
                min: rule.min,
                max: rule.max,
            });
        }
        attribute.base = base;
        Ok(())
    }

    pub(crate) fn adjust_bonus(&mut self, kind: AttributeKind, delta: i32) {
        self.get_mut(kind).bonus += delta;
    }

    /// Sum of every attribute's purchase cost.
    #[must_use]
    pub fn points_cost(&self) -> i32 {
        self.iter()
            .map(|(_, a)| a.points_cost())
            .fold(0, i32::saturating_add)
    }

    /// Attributes in MOV, PHY, DEX, CON, MND order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKind, &Attribute)> {
        AttributeKind::iter().map(move |kind| (kind, self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_free() {
        let attributes = Attributes::default();
        assert_eq!(attributes.points_cost(), 0);
        assert_eq!(attributes.value(AttributeKind::Move), 4);
        assert_eq!(attributes.value(AttributeKind::Constitution), 1);
    }

    #[test]
    fn test_set_base_prices_difference() {
        let mut attributes = Attributes::default();
        attributes.set_base(AttributeKind::Physicality, 2).unwrap();
        attributes.set_base(AttributeKind::Move, 3).unwrap();
        assert_eq!(attributes.points_cost(), 2 * 4 - 2);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut attributes = Attributes::default();
        let err = attributes.set_base(AttributeKind::Constitution, 0).unwrap_err();
        assert_eq!(
            err,
            RulesError::AttributeOutOfRange {
                attribute: AttributeKind::Constitution,
                value: 0,
                min: 1,
                max: 6,
            }
        );
        assert_eq!(attributes.get(AttributeKind::Constitution).base(), 1);
    }

    #[test]
    fn test_bonus_is_free() {
        let mut attributes = Attributes::default();
        attributes.adjust_bonus(AttributeKind::Dexterity, 2);
        assert_eq!(attributes.value(AttributeKind::Dexterity), 2);
        assert_eq!(attributes.points_cost(), 0);
    }
}
