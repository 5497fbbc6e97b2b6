use crate::{EffectCategory, Skill};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value of one entry in a descriptor's `modifications` map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Modification {
    Amount(i8),
    /// A whole number that does not fit an amount. Kept so the compiler can
    /// report the one descriptor instead of the record failing to load.
    Number(i64),
    Text(String),
}

impl Modification {
    pub fn amount(&self) -> Option<i8> {
        match self {
            Self::Amount(value) => Some(*value),
            Self::Number(_) | Self::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Amount(_) | Self::Number(_) => None,
        }
    }
}

impl fmt::Display for Modification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionalEffectDescriptor {
    pub skill: Skill,
    /// What the condition is checked against, e.g. `"location"`.
    pub what: String,
    pub condition: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillEffectDescriptor {
    pub skill: Skill,
    #[serde(default)]
    pub optional_effect: Option<OptionalEffectDescriptor>,
}

/// One pre-parsed rule action read from a card record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub action: String,
    /// Resources spent on activation; `None` means the player's own pool.
    #[serde(default)]
    pub expend: Option<u8>,
    #[serde(default)]
    pub skill_effect: SkillEffectDescriptor,
    #[serde(default)]
    pub modifications: BTreeMap<String, Modification>,
    #[serde(default)]
    pub target: Option<String>,
}

impl ActionDescriptor {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    pub fn with_expend(mut self, expend: u8) -> Self {
        self.expend = Some(expend);
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skill_effect.skill = skill;
        self
    }

    pub fn with_optional(
        mut self,
        skill: Skill,
        what: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        self.skill_effect.optional_effect = Some(OptionalEffectDescriptor {
            skill,
            what: what.into(),
            condition: condition.into(),
        });
        self
    }

    pub fn with_amount(mut self, key: impl Into<String>, value: i8) -> Self {
        self.modifications
            .insert(key.into(), Modification::Amount(value));
        self
    }

    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.modifications
            .insert(key.into(), Modification::Text(value.into()));
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn modification(&self, key: &str) -> Option<&Modification> {
        self.modifications.get(key)
    }
}

/// Descriptor lists of a card, keyed by the category they were read from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionLists {
    #[serde(default)]
    pub activate: Vec<ActionDescriptor>,
    #[serde(default)]
    pub trigger: Vec<ActionDescriptor>,
    #[serde(default)]
    pub passive: Vec<ActionDescriptor>,
    #[serde(default)]
    pub discard: Vec<ActionDescriptor>,
}

impl ActionLists {
    pub fn get(&self, category: EffectCategory) -> &[ActionDescriptor] {
        match category {
            EffectCategory::Activate => &self.activate,
            EffectCategory::Trigger => &self.trigger,
            EffectCategory::Passive => &self.passive,
            EffectCategory::Discard => &self.discard,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvestigatorRecord {
    pub name: String,
    pub faction: String,
    #[serde(default)]
    pub traits: String,
    #[serde(default)]
    pub subname: String,
    pub skill: Skill,
    pub health: u8,
    pub sanity: u8,
    #[serde(default)]
    pub elder_sign: Option<ActionDescriptor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetRecord {
    pub name: String,
    pub faction: String,
    #[serde(default)]
    pub traits: String,
    pub cost: u8,
    pub skill: Skill,
    #[serde(default)]
    pub slot: Option<String>,
    #[serde(default)]
    pub uses: Option<u8>,
    #[serde(default)]
    pub health: Option<u8>,
    #[serde(default)]
    pub sanity: Option<u8>,
    #[serde(default)]
    pub actions: ActionLists,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRecord {
    pub name: String,
    pub faction: String,
    #[serde(default)]
    pub traits: String,
    pub cost: u8,
    pub skill: Skill,
    #[serde(default)]
    pub actions: ActionLists,
}

/// Record shape shared by habilities and skill cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimpleCardRecord {
    pub name: String,
    pub faction: String,
    pub skill: Skill,
    #[serde(default)]
    pub actions: ActionLists,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardRecords {
    #[serde(default)]
    pub investigators: Vec<InvestigatorRecord>,
    #[serde(default)]
    pub assets: Vec<AssetRecord>,
    #[serde(default)]
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub habilities: Vec<SimpleCardRecord>,
    #[serde(default)]
    pub skills: Vec<SimpleCardRecord>,
}

/// Supplies the records a card index is built from.
pub trait RecordSource {
    type Error;

    fn load_records(&self) -> Result<CardRecords, Self::Error>;
}

impl RecordSource for CardRecords {
    type Error = std::convert::Infallible;

    fn load_records(&self) -> Result<CardRecords, Self::Error> {
        Ok(self.clone())
    }
}
