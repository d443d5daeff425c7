//! Character attribute identifiers and purchase rules.
//!
//! Every character has the same five attributes. What varies between
//! rulesets is how they are bought, which `AttributeRule` describes.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

/// One of the five character attributes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
pub enum AttributeKind {
    /// MOV: inches moved per order.
    #[strum(serialize = "MOV")]
    Move,
    /// PHY: melee damage and carrying.
    #[strum(serialize = "PHY")]
    Physicality,
    /// DEX: accuracy and evasion.
    #[strum(serialize = "DEX")]
    Dexterity,
    /// CON: wounds.
    #[strum(serialize = "CON")]
    Constitution,
    /// MND: willpower and spellcasting.
    #[strum(serialize = "MND")]
    Mind,
}

/// How an attribute is bought.
///
/// The base value a character starts with is `default`. Raising it costs
/// `cost_per_point` for every point above `default`; lowering it refunds
/// the same amount per point, down to `min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeRule {
    /// Starting base value.
    pub default: i32,
    /// Lowest purchasable base value.
    pub min: i32,
    /// Highest purchasable base value.
    pub max: i32,
    /// Points per step away from `default`.
    pub cost_per_point: i32,
}

impl AttributeRule {
    /// Create a rule.
    #[must_use]
    pub const fn new(default: i32, min: i32, max: i32, cost_per_point: i32) -> Self {
        Self {
            default,
            min,
            max,
            cost_per_point,
        }
    }

    /// Points cost of holding `base`. Saturates at the `i32` bounds.
    #[must_use]
    pub const fn cost_of(&self, base: i32) -> i32 {
        base.saturating_sub(self.default)
            .saturating_mul(self.cost_per_point)
    }

    /// Whether `base` can be bought under this rule.
    #[must_use]
    pub const fn allows(&self, base: i32) -> bool {
        base >= self.min && base <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_short_names() {
        let names: Vec<_> = AttributeKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["MOV", "PHY", "DEX", "CON", "MND"]);
    }

    #[test]
    fn test_cost_of() {
        let rule = AttributeRule::new(4, 1, 10, 2);
        assert_eq!(rule.cost_of(4), 0);
        assert_eq!(rule.cost_of(6), 4);
        assert_eq!(rule.cost_of(3), -2);
    }

    #[test]
    fn test_cost_of_saturates() {
        let rule = AttributeRule::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(rule.cost_of(i32::MAX), i32::MAX);

        let rule = AttributeRule::new(0, i32::MIN, 0, i32::MAX);
        assert_eq!(rule.cost_of(i32::MIN), i32::MIN);
    }

    #[test]
    fn test_allows() {
        let rule = AttributeRule::new(1, 1, 6, 4);
        assert!(rule.allows(1));
        assert!(rule.allows(6));
        assert!(!rule.allows(0));
        assert!(!rule.allows(7));
    }
}
