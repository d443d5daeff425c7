//! Weapons.
//!
//! A weapon's base cost comes from the stat table entry for its speed and
//! strength. The lookup happens once, at construction: later speed or
//! strength adjustments change the profile but never the base cost. Only
//! property deltas move the price after that.
//!
//! The named factories (`Weapon::knife()`, `Weapon::longbow()`, ...) are the
//! fixed catalog of legal starting configurations. Custom weapons are built
//! with `Weapon::new` and property builders.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};
use tracing::debug;

use super::equippable::EquippableItem;
use super::property::{PropertyArg, PropertyList};
use crate::catalog::{PropertyKey, StatCostTable, WeaponStat};
use crate::error::Result;

/// Range text of a weapon with neither Reach nor Ranged.
pub const MELEE_RANGE: &str = "Melee";

/// Inches of range each Ranged instance grants.
pub const RANGED_INCREMENT_INCHES: usize = 3;

/// Inches of reach each Reach instance grants.
pub const REACH_INCREMENT_INCHES: usize = 1;

/// Keys of the standard weapon factory.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
pub enum WeaponKey {
    Unarmed,
    Knife,
    #[strum(serialize = "One Handed Sword")]
    OneHandedSword,
    #[strum(serialize = "One Handed Axe")]
    OneHandedAxe,
    #[strum(serialize = "One Handed Spear")]
    OneHandedSpear,
    Staff,
    #[strum(serialize = "Two Handed Axe")]
    TwoHandedAxe,
    #[strum(serialize = "Two Handed Hammer")]
    TwoHandedHammer,
    #[strum(serialize = "Two Handed Sword")]
    TwoHandedSword,
    #[strum(serialize = "Two Handed Polearm")]
    TwoHandedPolearm,
    Longbow,
    Shortbow,
    Crossbow,
    #[strum(serialize = "Hand Crossbow")]
    HandCrossbow,
    Dagger,
    #[strum(serialize = "Dual Wield Daggers")]
    DualWieldDaggers,
    Whip,
    Javelin,
    Sling,
    #[strum(serialize = "Throwing Knife")]
    ThrowingKnife,
    Pike,
    #[strum(serialize = "Double Sword")]
    DoubleSword,
    #[strum(serialize = "War Banner")]
    WarBanner,
}

/// A weapon instance owned by a character (or under construction).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    key: String,
    speed: u8,
    strength: u8,
    base_points_cost: i32,
    range: String,
    magical: bool,
    properties: PropertyList,
}

impl Weapon {
    /// Create a weapon validated against the standard stat table.
    pub fn new(key: impl Into<String>, speed: u8, strength: u8) -> Result<Self> {
        Self::with_table(key, speed, strength, StatCostTable::standard())
    }

    /// Create a weapon validated against a specific stat table.
    pub fn with_table(
        key: impl Into<String>,
        speed: u8,
        strength: u8,
        table: &StatCostTable,
    ) -> Result<Self> {
        let key = key.into();
        let stat = table.lookup(speed, strength).inspect_err(|_| {
            debug!(weapon = %key, speed, strength, "rejected weapon stat combination");
        })?;

        Ok(Self {
            key,
            speed,
            strength,
            base_points_cost: stat.points_cost,
            range: MELEE_RANGE.to_string(),
            magical: false,
            properties: PropertyList::new(),
        })
    }

    /// Build a standard weapon by key.
    pub fn from_key(key: WeaponKey) -> Result<Self> {
        match key {
            WeaponKey::Unarmed => Self::unarmed(),
            WeaponKey::Knife => Self::knife(),
            WeaponKey::OneHandedSword => Self::one_handed_sword(),
            WeaponKey::OneHandedAxe => Self::one_handed_axe(),
            WeaponKey::OneHandedSpear => Self::one_handed_spear(),
            WeaponKey::Staff => Self::staff(),
            WeaponKey::TwoHandedAxe => Self::two_handed_axe(),
            WeaponKey::TwoHandedHammer => Self::two_handed_hammer(),
            WeaponKey::TwoHandedSword => Self::two_handed_sword(),
            WeaponKey::TwoHandedPolearm => Self::two_handed_polearm(),
            WeaponKey::Longbow => Self::longbow(),
            WeaponKey::Shortbow => Self::shortbow(),
            WeaponKey::Crossbow => Self::crossbow(),
            WeaponKey::HandCrossbow => Self::hand_crossbow(),
            WeaponKey::Dagger => Self::dagger(),
            WeaponKey::DualWieldDaggers => Self::dual_wield_daggers(),
            WeaponKey::Whip => Self::whip(),
            WeaponKey::Javelin => Self::javelin(),
            WeaponKey::Sling => Self::sling(),
            WeaponKey::ThrowingKnife => Self::throwing_knife(),
            WeaponKey::Pike => Self::pike(),
            WeaponKey::DoubleSword => Self::double_sword(),
            WeaponKey::WarBanner => Self::war_banner(),
        }
    }

    fn standard(key: WeaponKey, speed: u8, strength: u8) -> Result<Self> {
        Self::new(key.as_ref(), speed, strength)
    }

    // === Standard weapons ===

    pub fn unarmed() -> Result<Self> {
        Self::standard(WeaponKey::Unarmed, 3, 2)
    }

    pub fn knife() -> Result<Self> {
        Self::standard(WeaponKey::Knife, 3, 3)
    }

    pub fn one_handed_sword() -> Result<Self> {
        Self::standard(WeaponKey::OneHandedSword, 2, 5)
    }

    pub fn one_handed_axe() -> Result<Self> {
        Self::standard(WeaponKey::OneHandedAxe, 2, 5)
    }

    pub fn one_handed_spear() -> Result<Self> {
        Self::standard(WeaponKey::OneHandedSpear, 2, 5)
    }

    pub fn staff() -> Result<Self> {
        Self::standard(WeaponKey::Staff, 2, 5)
    }

    pub fn two_handed_axe() -> Result<Self> {
        Self::heavy(WeaponKey::TwoHandedAxe)
    }

    pub fn two_handed_hammer() -> Result<Self> {
        Self::heavy(WeaponKey::TwoHandedHammer)
    }

    pub fn two_handed_sword() -> Result<Self> {
        Self::heavy(WeaponKey::TwoHandedSword)
    }

    fn heavy(key: WeaponKey) -> Result<Self> {
        Self::standard(key, 1, 7)?
            .with_property(PropertyKey::TwoHanded)?
            .with_property(PropertyKey::HighCrit)
    }

    pub fn two_handed_polearm() -> Result<Self> {
        Self::standard(WeaponKey::TwoHandedPolearm, 1, 7)?
            .with_property(PropertyKey::TwoHanded)?
            .with_property(PropertyKey::Reach)
    }

    pub fn longbow() -> Result<Self> {
        Self::standard(WeaponKey::Longbow, 1, 5)?
            .with_property(PropertyKey::Ranged)?
            .with_property(PropertyKey::Ranged)?
            .with_property(PropertyKey::Ranged)
    }

    pub fn shortbow() -> Result<Self> {
        Self::standard(WeaponKey::Shortbow, 1, 5)?
            .with_property(PropertyKey::Ranged)?
            .with_property(PropertyKey::Ranged)
    }

    pub fn crossbow() -> Result<Self> {
        Self::standard(WeaponKey::Crossbow, 1, 6)?
            .with_property(PropertyKey::Ranged)?
            .with_property(PropertyKey::Ranged)?
            .with_property(PropertyKey::SlowToLoad)
    }

    pub fn hand_crossbow() -> Result<Self> {
        Self::standard(WeaponKey::HandCrossbow, 1, 3)?
            .with_property(PropertyKey::Ranged)?
            .with_property(PropertyKey::OneHanded)
    }

    pub fn dagger() -> Result<Self> {
        Self::standard(WeaponKey::Dagger, 3, 3)?.with_property(PropertyKey::Light)
    }

    pub fn dual_wield_daggers() -> Result<Self> {
        Self::standard(WeaponKey::DualWieldDaggers, 3, 3)?
            .with_property(PropertyKey::Light)?
            .with_property(PropertyKey::DualWield)
    }

    pub fn whip() -> Result<Self> {
        Self::standard(WeaponKey::Whip, 2, 2)?
            .with_property(PropertyKey::Light)?
            .with_property(PropertyKey::Reach)
    }

    /// Thrown spear: three shots, with a 2/4 melee profile in hand.
    pub fn javelin() -> Result<Self> {
        let melee = StatCostTable::standard().lookup(2, 4)?;
        Self::standard(WeaponKey::Javelin, 1, 5)?
            .with_property(PropertyKey::Ranged)?
            .with_property(PropertyKey::OneHanded)?
            .with_property_arg(PropertyKey::LowAmmo, PropertyArg::Ammo(3))?
            .with_property_arg(PropertyKey::Melee, PropertyArg::Profile(melee))
    }

    pub fn sling() -> Result<Self> {
        Self::standard(WeaponKey::Sling, 1, 3)?
            .with_property(PropertyKey::Ranged)?
            .with_property(PropertyKey::Ranged)?
            .with_property(PropertyKey::OneHanded)
    }

    pub fn throwing_knife() -> Result<Self> {
        Self::standard(WeaponKey::ThrowingKnife, 1, 4)?
            .with_property(PropertyKey::Ranged)?
            .with_property(PropertyKey::OneHanded)?
            .with_property_arg(PropertyKey::LowAmmo, PropertyArg::Ammo(4))
    }

    pub fn pike() -> Result<Self> {
        Self::standard(WeaponKey::Pike, 2, 5)?
            .with_property(PropertyKey::TwoHanded)?
            .with_property(PropertyKey::Reach)
    }

    pub fn double_sword() -> Result<Self> {
        Self::standard(WeaponKey::DoubleSword, 3, 5)?.with_property(PropertyKey::TwoHanded)
    }

    pub fn war_banner() -> Result<Self> {
        Self::standard(WeaponKey::WarBanner, 2, 4)?.with_property(PropertyKey::MoraleBoosting)
    }

    // === Builders ===

    /// Attach a standard property (builder pattern).
    pub fn with_property(self, key: PropertyKey) -> Result<Self> {
        self.with_property_arg(key, PropertyArg::None)
    }

    /// Attach a standard property with an instance argument (builder pattern).
    pub fn with_property_arg(mut self, key: PropertyKey, arg: PropertyArg) -> Result<Self> {
        self.attach_with(key, arg)?;
        Ok(self)
    }

    /// Detach a standard property (builder pattern).
    #[must_use]
    pub fn without_property(mut self, key: PropertyKey) -> Self {
        self.detach(key);
        self
    }

    /// Give the weapon a new name, e.g. for a customised catalog weapon.
    #[must_use]
    pub fn renamed(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    // === Profile ===

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn speed(&self) -> u8 {
        self.speed
    }

    #[must_use]
    pub fn strength(&self) -> u8 {
        self.strength
    }

    /// Adjust speed. The base points cost does not change.
    pub fn adjust_speed(&mut self, delta: i8) -> &mut Self {
        self.speed = self.speed.saturating_add_signed(delta);
        self
    }

    /// Adjust strength. The base points cost does not change.
    pub fn adjust_strength(&mut self, delta: i8) -> &mut Self {
        self.strength = self.strength.saturating_add_signed(delta);
        self
    }

    /// Range text, e.g. `Melee`, `Melee (2")`, `9"`.
    #[must_use]
    pub fn range(&self) -> &str {
        &self.range
    }

    #[must_use]
    pub fn is_unarmed(&self) -> bool {
        self.key == WeaponKey::Unarmed.as_ref()
    }

    #[must_use]
    pub fn is_ranged(&self) -> bool {
        self.properties.contains(PropertyKey::Ranged)
    }

    #[must_use]
    pub fn is_magical(&self) -> bool {
        self.magical
    }

    /// Secondary melee profile of a ranged weapon, if it has one.
    #[must_use]
    pub fn melee_profile(&self) -> Option<WeaponStat> {
        self.properties
            .find(PropertyKey::Melee)
            .and_then(|p| p.profile())
    }

    /// Shots available to a limited-ammo weapon.
    #[must_use]
    pub fn ammo(&self) -> Option<u8> {
        self.properties
            .find(PropertyKey::LowAmmo)
            .and_then(|p| p.ammo())
    }

    // === Effect targets ===

    /// Recompute range text from attached Ranged and Reach instances.
    ///
    /// Ranged takes precedence: a ranged weapon with reach still reports
    /// its shooting range.
    pub(crate) fn refresh_range(&mut self) {
        let ranged = self.properties.count(PropertyKey::Ranged);
        let reach = self.properties.count(PropertyKey::Reach);

        self.range = if ranged > 0 {
            format!("{}\"", ranged * RANGED_INCREMENT_INCHES)
        } else if reach > 0 {
            format!("{MELEE_RANGE} ({}\")", reach * REACH_INCREMENT_INCHES)
        } else {
            MELEE_RANGE.to_string()
        };
    }

    pub(crate) fn refresh_enchantment(&mut self) {
        self.magical = self.properties.contains(PropertyKey::Magic);
    }
}

impl EquippableItem for Weapon {
    fn name(&self) -> &str {
        &self.key
    }

    fn base_points_cost(&self) -> i32 {
        self.base_points_cost
    }

    fn properties(&self) -> &PropertyList {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyList {
        &mut self.properties
    }
}

/// A weapon to add to a character: a catalog key or a concrete instance.
#[derive(Clone, Debug)]
pub enum WeaponSource {
    Catalog(WeaponKey),
    Custom(Weapon),
}

impl WeaponSource {
    /// Resolve into a weapon, building catalog weapons on demand.
    pub fn into_weapon(self) -> Result<Weapon> {
        match self {
            WeaponSource::Catalog(key) => Weapon::from_key(key),
            WeaponSource::Custom(weapon) => Ok(weapon),
        }
    }
}

impl From<WeaponKey> for WeaponSource {
    fn from(key: WeaponKey) -> Self {
        WeaponSource::Catalog(key)
    }
}

impl From<Weapon> for WeaponSource {
    fn from(weapon: Weapon) -> Self {
        WeaponSource::Custom(weapon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesError;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_standard_weapon_builds() {
        for key in WeaponKey::iter() {
            let weapon = Weapon::from_key(key).unwrap();
            assert_eq!(weapon.key(), key.as_ref());
        }
    }

    #[test]
    fn test_invalid_stats_rejected() {
        assert_eq!(
            Weapon::new("Greatclub", 3, 7),
            Err(RulesError::InvalidStatCombination { speed: 3, strength: 7 })
        );
    }

    #[test]
    fn test_base_cost_fixed_after_adjustment() {
        let mut knife = Weapon::knife().unwrap();
        let other = Weapon::knife().unwrap();
        knife.adjust_speed(1).adjust_strength(-1);

        assert_eq!(knife.speed(), other.speed() + 1);
        assert_eq!(knife.strength(), other.strength() - 1);
        assert_eq!(knife.points_cost(), other.points_cost());
    }

    #[test]
    fn test_adjustment_saturates() {
        let mut knife = Weapon::knife().unwrap();
        knife.adjust_speed(-10);
        assert_eq!(knife.speed(), 0);
    }

    #[test]
    fn test_range_follows_properties() {
        let mut weapon = Weapon::new("Spear", 2, 5).unwrap();
        assert_eq!(weapon.range(), MELEE_RANGE);

        weapon.attach(PropertyKey::Reach).unwrap();
        weapon.attach(PropertyKey::Reach).unwrap();
        assert_eq!(weapon.range(), "Melee (2\")");

        weapon.attach(PropertyKey::Ranged).unwrap();
        assert_eq!(weapon.range(), "3\"");

        weapon.detach(PropertyKey::Ranged);
        assert_eq!(weapon.range(), "Melee (2\")");

        weapon.detach(PropertyKey::Reach);
        assert_eq!(weapon.range(), MELEE_RANGE);
    }

    #[test]
    fn test_javelin_profiles() {
        let javelin = Weapon::javelin().unwrap();
        assert!(javelin.is_ranged());
        assert_eq!(javelin.ammo(), Some(3));
        assert_eq!(javelin.melee_profile(), Some(WeaponStat::new(2, 4, 2)));
        assert_eq!(javelin.range(), "3\"");
    }

    #[test]
    fn test_magic_flag() {
        let knife = Weapon::knife().unwrap().with_property(PropertyKey::Magic).unwrap();
        assert!(knife.is_magical());
        assert_eq!(knife.points_cost(), 5);

        let knife = knife.without_property(PropertyKey::Magic);
        assert!(!knife.is_magical());
        assert_eq!(knife.points_cost(), 3);
    }

    #[test]
    fn test_renamed_keeps_profile() {
        let blade = Weapon::dagger().unwrap().renamed("Heirloom Dagger");
        assert_eq!(blade.key(), "Heirloom Dagger");
        assert_eq!(blade.points_cost(), 5);
        assert!(!blade.is_unarmed());
    }

    #[test]
    fn test_weapon_source() {
        let from_key = WeaponSource::from(WeaponKey::Pike).into_weapon().unwrap();
        assert_eq!(from_key.points_cost(), 7);

        let custom = Weapon::new("Club", 2, 3).unwrap();
        let from_custom = WeaponSource::from(custom.clone()).into_weapon().unwrap();
        assert_eq!(from_custom, custom);
    }

    #[test]
    fn test_weapon_serialization() {
        let weapon = Weapon::crossbow().unwrap();

        let json = serde_json::to_string(&weapon).unwrap();
        let deserialized: Weapon = serde_json::from_str(&json).unwrap();

        assert_eq!(weapon, deserialized);
    }
}
