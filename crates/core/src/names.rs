//! Fixed name tables used by card records.
//!
//! Each enumeration is decoded from an ordered list of names; the variant at
//! index `i` is spelled `NAMES[i]`. Unknown names are always an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{name}' is not registered as {kind}")]
pub struct NameError {
    pub name: String,
    pub kind: &'static str,
}

pub trait NamedEnum: Copy + Sized + 'static {
    const KIND: &'static str;
    const NAMES: &'static [&'static str];
    const VARIANTS: &'static [Self];

    fn index(self) -> usize;

    fn from_name(name: &str) -> Result<Self, NameError> {
        Self::NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|idx| Self::VARIANTS[idx])
            .ok_or_else(|| NameError {
                name: name.to_string(),
                kind: Self::KIND,
            })
    }

    fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }
}

pub fn decode<T: NamedEnum>(name: &str) -> Result<T, NameError> {
    T::from_name(name)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Faction {
    Guardian,
    Seeker,
    Rogue,
    Mystic,
    Survivor,
    Neutral,
}

impl NamedEnum for Faction {
    const KIND: &'static str = "Faction";
    const NAMES: &'static [&'static str] =
        &["guardian", "seeker", "rogue", "mystic", "survivor", "neutral"];
    const VARIANTS: &'static [Self] = &[
        Self::Guardian,
        Self::Seeker,
        Self::Rogue,
        Self::Mystic,
        Self::Survivor,
        Self::Neutral,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Slot {
    Accessory,
    Body,
    Ally,
    Hand,
    Arcane,
    TwoHanded,
}

impl NamedEnum for Slot {
    const KIND: &'static str = "Slot";
    const NAMES: &'static [&'static str] =
        &["accessory", "body", "ally", "hand", "arcane", "two_handed"];
    const VARIANTS: &'static [Self] = &[
        Self::Accessory,
        Self::Body,
        Self::Ally,
        Self::Hand,
        Self::Arcane,
        Self::TwoHanded,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Condition checked against the investigator's location before an optional
/// skill bonus applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LocationCondition {
    UndiscoveredClues,
}

impl NamedEnum for LocationCondition {
    const KIND: &'static str = "LocationCondition";
    const NAMES: &'static [&'static str] = &["undiscovered_clues"];
    const VARIANTS: &'static [Self] = &[Self::UndiscoveredClues];

    fn index(self) -> usize {
        self as usize
    }
}
