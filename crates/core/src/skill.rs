use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Skill values carried by investigators, cards and effects.
///
/// `wild` is a bonus that counts toward whichever axis is being tested.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Skill {
    #[serde(default)]
    pub willpower: i8,
    #[serde(default)]
    pub intellect: i8,
    #[serde(default)]
    pub combat: i8,
    #[serde(default)]
    pub agility: i8,
    #[serde(default)]
    pub wild: i8,
}

impl Skill {
    pub const fn new(willpower: i8, intellect: i8, combat: i8, agility: i8) -> Self {
        Self {
            willpower,
            intellect,
            combat,
            agility,
            wild: 0,
        }
    }

    pub const fn with_wild(self, wild: i8) -> Self {
        Self { wild, ..self }
    }

    pub fn axis(&self, axis: SkillAxis) -> i8 {
        match axis {
            SkillAxis::Willpower => self.willpower,
            SkillAxis::Intellect => self.intellect,
            SkillAxis::Combat => self.combat,
            SkillAxis::Agility => self.agility,
        }
    }

    /// Value of `axis` for a skill test: the axis itself plus the wild bonus.
    pub fn value(&self, axis: SkillAxis) -> i32 {
        i32::from(self.axis(axis)) + i32::from(self.wild)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for Skill {
    type Output = Skill;

    fn add(self, rhs: Skill) -> Skill {
        Skill {
            willpower: self.willpower.saturating_add(rhs.willpower),
            intellect: self.intellect.saturating_add(rhs.intellect),
            combat: self.combat.saturating_add(rhs.combat),
            agility: self.agility.saturating_add(rhs.agility),
            wild: self.wild.saturating_add(rhs.wild),
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wil {} int {} com {} agi {} wild {}",
            self.willpower, self.intellect, self.combat, self.agility, self.wild
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SkillAxis {
    Willpower,
    Intellect,
    Combat,
    Agility,
}

impl SkillAxis {
    pub const ALL: [SkillAxis; 4] = [
        SkillAxis::Willpower,
        SkillAxis::Intellect,
        SkillAxis::Combat,
        SkillAxis::Agility,
    ];

    pub fn from_keyword(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "willpower" | "wil" => Some(Self::Willpower),
            "intellect" | "int" => Some(Self::Intellect),
            "combat" | "com" => Some(Self::Combat),
            "agility" | "agi" => Some(Self::Agility),
            _ => None,
        }
    }
}

/// Anything that contributes a skill vector to a test.
pub trait HasSkill {
    fn skill(&self) -> Skill;
}

impl HasSkill for Skill {
    fn skill(&self) -> Skill {
        *self
    }
}
