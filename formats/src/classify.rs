//! The classifier predicates.
//!
//! These are pure functions over an object's `Type` string. They are
//! evaluated once per record, when `updates == 1` and `Type` is known —
//! that call site lives in the line parser (`acmi-engine`), not here.
//!

const WEAPON_TYPES: &[&str] = &["Weapon+Missile", "Weapon+Bomb", "Projectile+Shell"];

const GROUND_TYPES: &[&str] = &[
    "Ground+AntiAircraft",
    "Ground+Heavy+Armor+Vehicle+Tank",
    "Ground+Vehicle",
    "Ground+Static+Building",
    "Ground+Light+Human+Infantry",
];

const AIR_TYPES: &[&str] = &["Air+FixedWing", "Air+Rotorcraft"];

const CANNOT_BE_PARENT_SUBSTR: &[&str] = &[
    "Decoy",
    "Misc",
    "Weapon",
    "Projectile",
    "Ground+Light+Human+Air+Parachutist",
];

const SHOULD_HAVE_PARENT_SUBSTR: &[&str] = &["Weapon", "Projectile", "Decoy", "Container", "Flare"];

/// The three mutually-exclusive coarse categories a `Type` can fall into.
///
/// The record keeps the three booleans as the authoritative state
/// fields (because `can_be_parent`/`should_have_parent` aren't mutually
/// exclusive with them); this enum is offered as a convenience view over
/// those booleans, not a replacement for them.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    Weapon,
    Ground,
    Air,
    Other,
}

/// Classify `type_str` into exactly one [`Category`].
///
/// The `is_weapon` check short-circuits the rest: a type matching one of
/// the weapon strings is never also checked against the ground/air sets,
/// reproducing the source's `elif` chain.
///
pub fn classify(type_str: &str) -> Category {
    if WEAPON_TYPES.contains(&type_str) {
        Category::Weapon
    } else if GROUND_TYPES.contains(&type_str) {
        Category::Ground
    } else if AIR_TYPES.contains(&type_str) {
        Category::Air
    } else {
        Category::Other
    }
}

/// True iff none of the disqualifying substrings occur in `type_str`. A
/// weapon can never be a parent.
///
pub fn can_be_parent(type_str: &str) -> bool {
    !CANNOT_BE_PARENT_SUBSTR.iter().any(|s| type_str.contains(s))
}

/// True iff any of the "needs a parent" substrings occur in `type_str`.
/// Weapons always should-have-parent; this is a fast-path shortcut rather
/// than a separate check.
///
pub fn should_have_parent(type_str: &str) -> bool {
    SHOULD_HAVE_PARENT_SUBSTR.iter().any(|s| type_str.contains(s))
}
