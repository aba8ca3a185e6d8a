// src/combat/src/element.rs
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::constants::{ADVANTAGE_MULTIPLIER, DISADVANTAGE_MULTIPLIER};

/// Elemental affinity of a hero. Each element beats exactly one other.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
    Light,
    Dark,
}

impl Element {
    /// Fixed order used when deriving an element from a hash
    pub const ALL: [Element; 6] = [
        Element::Fire,
        Element::Water,
        Element::Earth,
        Element::Air,
        Element::Light,
        Element::Dark,
    ];

    /// The element this one has the advantage over
    pub fn beats(self) -> Element {
        match self {
            Element::Fire => Element::Earth,
            Element::Earth => Element::Air,
            Element::Air => Element::Water,
            Element::Water => Element::Fire,
            Element::Light => Element::Dark,
            Element::Dark => Element::Light,
        }
    }

    /// Verb used in round descriptions
    pub fn verb(self) -> &'static str {
        match self {
            Element::Fire => "scorches",
            Element::Water => "drenches",
            Element::Earth => "crushes",
            Element::Air => "slashes",
            Element::Light => "blinds",
            Element::Dark => "corrupts",
        }
    }
}

/// Damage multiplier for an attack from `attacker` into `defender`.
pub fn element_multiplier(attacker: Element, defender: Element) -> f64 {
    if attacker.beats() == defender {
        ADVANTAGE_MULTIPLIER
    } else if defender.beats() == attacker {
        DISADVANTAGE_MULTIPLIER
    } else {
        1.0
    }
}
