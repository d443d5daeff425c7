//! Character aggregate tests.
//!
//! These cover the composition rules a character enforces:
//! - The Unarmed invariant
//! - Skill and equipment prerequisites
//! - Commander class restrictions
//! - The points cost rollup

use rust_warband::catalog::{
    Armour, CharacterClass, CharacterTrait, Elemental, EquipmentKey, MountKey, PotionKey, PropertyKey,
    Shield, Skill, SkillKey, TraitKey,
};
use rust_warband::character::Character;
use rust_warband::core::AttributeKind;
use rust_warband::effects::CharacterEffect;
use rust_warband::error::{PrerequisiteViolation, RulesError};
use rust_warband::items::{EquippableItem, MiscellaneousEquipment, Weapon, WeaponKey};

fn weapon_keys(character: &Character) -> Vec<String> {
    character
        .weapons()
        .iter()
        .map(|w| w.key().to_string())
        .collect()
}

/// Unarmed is dropped by the first weapon and restored by the last removal.
#[test]
fn test_unarmed_lifecycle() {
    let mut character = Character::regular();
    assert_eq!(weapon_keys(&character), ["Unarmed"]);

    character.add_weapon(WeaponKey::Knife).unwrap();
    character.add_weapon(WeaponKey::Knife).unwrap();
    assert_eq!(weapon_keys(&character), ["Knife", "Knife"]);

    character.remove_weapon("Knife");
    assert_eq!(weapon_keys(&character), ["Knife"]);

    character.remove_weapon("Knife");
    assert_eq!(weapon_keys(&character), ["Unarmed"]);
}

/// Adding Unarmed never duplicates it or displaces real weapons.
#[test]
fn test_adding_unarmed_is_noop() {
    let mut character = Character::regular();
    character.add_weapon(WeaponKey::Unarmed).unwrap();
    assert_eq!(weapon_keys(&character), ["Unarmed"]);

    character.add_weapon(WeaponKey::Dagger).unwrap();
    character.add_weapon(WeaponKey::Unarmed).unwrap();
    assert_eq!(weapon_keys(&character), ["Dagger"]);
}

/// Custom weapons are added by value.
#[test]
fn test_custom_weapon() {
    let mut character = Character::regular();
    let club = Weapon::new("Club", 2, 3).unwrap();
    character.add_weapon(club).unwrap();

    assert_eq!(weapon_keys(&character), ["Club"]);
    assert_eq!(character.points_cost(), 2);
}

/// A skill without its trait is rejected and nothing changes.
#[test]
fn test_skill_requires_trait() {
    let mut character = Character::regular();
    let cost = character.points_cost();

    let err = character.add_skill(SkillKey::ArcaneStudy).unwrap_err();
    assert_eq!(
        err,
        RulesError::PrerequisiteViolation {
            item: "Arcane Study".to_string(),
            violation: PrerequisiteViolation::MissingTraits(vec![TraitKey::Spellcaster]),
        }
    );
    assert!(character.skills().is_empty());
    assert_eq!(character.points_cost(), cost);
    assert_eq!(character.spellcasting_schools_limit(), 0);
}

/// With the trait in place the skill and its effect apply.
#[test]
fn test_arcane_progression() {
    let mut character = Character::regular();
    character.add_trait(TraitKey::Spellcaster).unwrap();
    assert_eq!(character.spellcasting_slots_limit(), 2);
    assert_eq!(character.spellcasting_schools_limit(), 1);

    character.add_skill(SkillKey::ArcaneStudy).unwrap();
    character.add_skill(SkillKey::SpellMastery).unwrap();
    assert_eq!(character.spellcasting_schools_limit(), 2);
    assert_eq!(character.spell_pool_limit(), 3);

    character.remove_skill(SkillKey::SpellMastery);
    assert_eq!(character.spell_pool_limit(), 1);
    assert!(!character.has_skill(SkillKey::SpellMastery));
}

/// Skill prerequisites are checked before class restrictions.
#[test]
fn test_skill_check_order() {
    let mut character = Character::instinct();

    let err = character.add_skill(SkillKey::Sniper).unwrap_err();
    assert!(matches!(
        err,
        RulesError::PrerequisiteViolation {
            violation: PrerequisiteViolation::MissingSkills(_),
            ..
        }
    ));

    character.add_skill(SkillKey::Marksman).unwrap();
    let err = character.add_skill(SkillKey::Sniper).unwrap_err();
    assert!(matches!(
        err,
        RulesError::PrerequisiteViolation {
            violation: PrerequisiteViolation::DisallowedClass(CharacterClass::Instinct),
            ..
        }
    ));
}

/// Commander-only skills need a commander.
#[test]
fn test_commander_only_skill() {
    let mut follower = Character::regular();
    let err = follower.add_skill(SkillKey::InspiringPresence).unwrap_err();
    assert!(matches!(
        err,
        RulesError::PrerequisiteViolation {
            violation: PrerequisiteViolation::CommanderOnly,
            ..
        }
    ));

    let mut leader = Character::leader();
    leader.add_skill(SkillKey::InspiringPresence).unwrap();
    assert!(leader.has_skill(SkillKey::InspiringPresence));
}

/// Commanders cannot become Instinct; followers can switch freely.
#[test]
fn test_commander_class() {
    let mut leader = Character::leader();
    assert_eq!(
        leader.set_character_class(CharacterClass::Instinct),
        Err(RulesError::InvalidCommanderClass)
    );
    assert!(leader.is_regular());

    let mut follower = Character::regular();
    follower.set_character_class(CharacterClass::Instinct).unwrap();
    assert!(!follower.is_regular());
    follower.set_character_class(CharacterClass::Regular).unwrap();
    assert!(follower.is_regular());
}

/// Equipment prerequisites: trait first, then other equipment.
#[test]
fn test_equipment_prerequisites() {
    let mut character = Character::regular();

    let err = character.add_equipment(EquipmentKey::Spellbook).unwrap_err();
    assert!(matches!(
        err,
        RulesError::PrerequisiteViolation {
            violation: PrerequisiteViolation::MissingTraits(_),
            ..
        }
    ));

    character.add_trait(TraitKey::Spellcaster).unwrap();
    let err = character.add_equipment(EquipmentKey::Spellbook).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot add Spellbook / Scrolls: the character must have Spellcasting Implement"
    );
    assert!(character.equipment().is_empty());

    character.add_equipment(EquipmentKey::SpellcastingImplement).unwrap();
    character.add_equipment(EquipmentKey::Spellbook).unwrap();
    assert!(character.has_equipment(EquipmentKey::Spellbook));
}

/// Customised equipment carries its property costs into the total.
#[test]
fn test_magic_equipment_cost() {
    let mut character = Character::regular();
    let trinket = MiscellaneousEquipment::new(EquipmentKey::Trinket)
        .unwrap()
        .with_property(PropertyKey::Magic)
        .unwrap();
    character.add_equipment(trinket).unwrap();

    assert_eq!(character.equipment()[0].points_cost(), 3);
    assert_eq!(character.points_cost(), 2 + 3);
}

/// The full rollup over every costed part.
#[test]
fn test_points_cost_rollup() {
    let mut character = Character::leader();
    character.set_attribute(AttributeKind::Physicality, 1).unwrap();
    character.add_trait(TraitKey::Fleet).unwrap();
    character.add_weapon(WeaponKey::Knife).unwrap();
    character.add_armour(Armour::Light);
    character.add_shield(Shield::Buckler);
    character.add_mount(MountKey::Pony).unwrap();
    character.add_potion(PotionKey::Healing).unwrap();
    character.add_equipment(EquipmentKey::Torch).unwrap();
    character.add_skill(SkillKey::Sprinter).unwrap();
    character.add_elemental(Elemental::Fire);

    // class 2, PHY 4, Fleet 3, knife 3, light 2, buckler 1, pony 4, healing 2, torch 1
    assert_eq!(character.points_cost(), 22);
    assert_eq!(character.attributes().value(AttributeKind::Move), 6);

    character.remove_armour();
    character.remove_shield();
    character.remove_mount();
    assert_eq!(character.armour(), Armour::None);
    assert_eq!(character.shield(), Shield::None);
    assert_eq!(character.points_cost(), 15);
}

/// Removing something the character does not have changes nothing.
#[test]
fn test_absent_removals_are_noops() {
    let mut character = Character::regular();
    character.add_weapon(WeaponKey::Pike).unwrap();
    let cost = character.points_cost();

    character.remove_trait(TraitKey::Hardy);
    character.remove_skill(SkillKey::Medic);
    character.remove_equipment(EquipmentKey::Horn);
    character.remove_potion(PotionKey::Antidote);
    character.remove_elemental(Elemental::Air);
    character.remove_weapon("Longbow");

    assert_eq!(character.points_cost(), cost);
    assert_eq!(weapon_keys(&character), ["Pike"]);
    assert!(character.traits().is_empty());
    assert!(character.skills().is_empty());
}

/// A clone is an independent snapshot.
#[test]
fn test_clone_is_snapshot() {
    let mut original = Character::regular();
    original.add_weapon(WeaponKey::Longbow).unwrap();
    let snapshot = original.clone();

    original.add_trait(TraitKey::Hardy).unwrap();
    original.remove_weapon("Longbow");

    assert_eq!(weapon_keys(&snapshot), ["Longbow"]);
    assert!(snapshot.traits().is_empty());
    assert_eq!(snapshot.points_cost(), 2 + 7);
    assert_eq!(weapon_keys(&original), ["Unarmed"]);
}

/// Attribute purchases stay within the configured bounds.
#[test]
fn test_attribute_bounds() {
    let mut character = Character::regular();
    let err = character.set_attribute(AttributeKind::Move, 11).unwrap_err();
    assert!(matches!(err, RulesError::AttributeOutOfRange { max: 10, .. }));

    character.set_attribute(AttributeKind::Move, 3).unwrap();
    assert_eq!(character.points_cost(), 2 - 2);
}

/// Names are optional display labels.
#[test]
fn test_name() {
    let mut character = Character::regular();
    assert_eq!(character.name(), None);
    character.set_name("Sergeant Brann");
    assert_eq!(character.name(), Some("Sergeant Brann"));
}

/// A customised Unarmed is a paid-for weapon, not the placeholder.
#[test]
fn test_customised_unarmed_is_kept() {
    let mut character = Character::regular();
    let fists = Weapon::unarmed().unwrap().with_property(PropertyKey::Magic).unwrap();

    character.add_weapon(fists.clone()).unwrap();
    assert_eq!(weapon_keys(&character), ["Unarmed"]);
    assert!(character.weapons()[0].is_magical());
    assert_eq!(character.points_cost(), 2 + 2);

    character.add_weapon(WeaponKey::Knife).unwrap();
    assert_eq!(weapon_keys(&character), ["Unarmed", "Knife"]);
    assert_eq!(character.points_cost(), 2 + 2 + 3);

    let mut armed = Character::regular();
    armed.add_weapon(WeaponKey::Knife).unwrap();
    armed.add_weapon(fists).unwrap();
    assert_eq!(weapon_keys(&armed), ["Knife", "Unarmed"]);
}

/// Removing held equipment, potions and elementals drops them and their cost.
#[test]
fn test_present_removals() {
    let mut character = Character::regular();
    character.add_equipment(EquipmentKey::Horn).unwrap();
    character.add_potion(PotionKey::Healing).unwrap();
    character.add_potion(PotionKey::Healing).unwrap();
    character.add_elemental(Elemental::Fire);
    assert_eq!(character.points_cost(), 2 + 2 + 2 + 2);

    character.remove_equipment(EquipmentKey::Horn);
    assert!(!character.has_equipment(EquipmentKey::Horn));
    assert!(character.equipment().is_empty());
    assert_eq!(character.points_cost(), 2 + 2 + 2);

    character.remove_potion(PotionKey::Healing);
    assert_eq!(character.potions().len(), 1);
    assert_eq!(character.points_cost(), 2 + 2);

    character.remove_potion(PotionKey::Healing);
    assert!(character.potions().is_empty());
    assert_eq!(character.points_cost(), 2);

    character.remove_elemental(Elemental::Fire);
    assert!(character.elementals().is_empty());
    assert_eq!(character.points_cost(), 2);
}

/// Custom trait definitions are priced and their effects reverted on removal.
#[test]
fn test_custom_trait_definition() {
    let mut character = Character::regular();
    let giant = CharacterTrait::new(TraitKey::Hardy, 6)
        .with_effect(CharacterEffect::raise(AttributeKind::Constitution, 2));

    character.add_trait_definition(giant);
    assert_eq!(character.attributes().value(AttributeKind::Constitution), 3);
    assert_eq!(character.points_cost(), 2 + 6);

    character.remove_trait(TraitKey::Hardy);
    assert_eq!(character.attributes().value(AttributeKind::Constitution), 1);
    assert_eq!(character.points_cost(), 2);
}

/// Class restrictions are checked before the commander restriction.
#[test]
fn test_custom_skill_class_before_commander() {
    let skill = Skill::new(SkillKey::Medic)
        .commander_only()
        .disallow(CharacterClass::Regular);

    let mut follower = Character::regular();
    let err = follower.add_skill_definition(skill.clone()).unwrap_err();
    assert!(matches!(
        err,
        RulesError::PrerequisiteViolation {
            violation: PrerequisiteViolation::DisallowedClass(CharacterClass::Regular),
            ..
        }
    ));
    assert!(follower.skills().is_empty());

    let mut beast = Character::instinct();
    let err = beast.add_skill_definition(skill).unwrap_err();
    assert!(matches!(
        err,
        RulesError::PrerequisiteViolation {
            violation: PrerequisiteViolation::CommanderOnly,
            ..
        }
    ));
    assert!(beast.skills().is_empty());
}
