use crate::{Condition, GameQuery, LocationCondition, NamedEnum, Skill};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields shared by every effect: the skill bonus it grants and its cost.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EffectBase {
    pub skill: Skill,
    pub activation_cost: u8,
}

impl EffectBase {
    pub fn new(skill: Skill, activation_cost: u8) -> Self {
        Self {
            skill,
            activation_cost,
        }
    }
}

/// A second skill bonus that only applies while a location condition holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationOptional {
    pub base: EffectBase,
    pub optional_skill: Skill,
    pub condition: LocationCondition,
}

impl LocationOptional {
    pub fn bonus(&self, query: &dyn GameQuery) -> Skill {
        if self.condition.evaluate(query) {
            self.optional_skill
        } else {
            Skill::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Effect {
    SkillBonus(EffectBase),
    FightWithDamage {
        base: EffectBase,
        additional_damage: u8,
    },
    /// `condition` is `None` when the record named a condition that is not known.
    FightWithDamageAndCondition {
        base: EffectBase,
        additional_damage: u8,
        condition: Option<Condition>,
    },
    InvestigateWithShroud {
        base: EffectBase,
        shroud_modification: i8,
    },
    LocationOptional(LocationOptional),
    LocationOptionalFight {
        base: EffectBase,
        additional_damage: u8,
        optional: LocationOptional,
    },
    DamageAtCurrentLocation {
        base: EffectBase,
        amount: u8,
    },
    /// Damage dealt to the enemy currently attacking the card's owner.
    DamageToAttacker {
        base: EffectBase,
        amount: u8,
    },
}

impl Effect {
    pub fn base(&self) -> &EffectBase {
        match self {
            Self::SkillBonus(base)
            | Self::FightWithDamage { base, .. }
            | Self::FightWithDamageAndCondition { base, .. }
            | Self::InvestigateWithShroud { base, .. }
            | Self::LocationOptionalFight { base, .. }
            | Self::DamageAtCurrentLocation { base, .. }
            | Self::DamageToAttacker { base, .. } => base,
            Self::LocationOptional(optional) => &optional.base,
        }
    }

    pub fn skill(&self) -> Skill {
        self.base().skill
    }

    pub fn activation_cost(&self) -> u8 {
        self.base().activation_cost
    }

    pub fn additional_damage(&self) -> Option<u8> {
        match self {
            Self::FightWithDamage {
                additional_damage, ..
            }
            | Self::FightWithDamageAndCondition {
                additional_damage, ..
            }
            | Self::LocationOptionalFight {
                additional_damage, ..
            } => Some(*additional_damage),
            _ => None,
        }
    }

    pub fn condition(&self) -> Option<Condition> {
        match self {
            Self::FightWithDamageAndCondition { condition, .. } => *condition,
            _ => None,
        }
    }

    /// Whether the effect's own condition allows it to be used right now.
    /// Effects without a condition always hold.
    pub fn condition_holds(&self, query: &dyn GameQuery) -> bool {
        self.condition()
            .map_or(true, |condition| condition.evaluate(query))
    }

    /// Skill granted by the effect, including an optional bonus whose
    /// location condition currently holds.
    pub fn skill_bonus(&self, query: &dyn GameQuery) -> Skill {
        match self {
            Self::LocationOptional(optional) => optional.base.skill + optional.bonus(query),
            Self::LocationOptionalFight { base, optional, .. } => {
                base.skill + optional.bonus(query)
            }
            other => other.skill(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::SkillBonus(_) => "skill_bonus",
            Self::FightWithDamage { .. } => "fight_with_damage",
            Self::FightWithDamageAndCondition { .. } => "fight_with_damage_and_condition",
            Self::InvestigateWithShroud { .. } => "investigate_with_shroud",
            Self::LocationOptional(_) => "location_optional",
            Self::LocationOptionalFight { .. } => "location_optional_fight",
            Self::DamageAtCurrentLocation { .. } => "damage_at_current_location",
            Self::DamageToAttacker { .. } => "damage_to_attacker",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.base();
        write!(
            f,
            "{} ({}, cost {})",
            self.kind_name(),
            base.skill,
            base.activation_cost
        )?;
        match self {
            Self::SkillBonus(_) => Ok(()),
            Self::FightWithDamage {
                additional_damage, ..
            } => write!(f, " damage +{additional_damage}"),
            Self::FightWithDamageAndCondition {
                additional_damage,
                condition,
                ..
            } => match condition {
                Some(condition) => write!(f, " damage +{additional_damage} if {condition:?}"),
                None => write!(f, " damage +{additional_damage} if <unknown>"),
            },
            Self::InvestigateWithShroud {
                shroud_modification,
                ..
            } => write!(f, " shroud {shroud_modification:+}"),
            Self::LocationOptional(optional) => write!(
                f,
                " +({}) if {}",
                optional.optional_skill,
                optional.condition.name()
            ),
            Self::LocationOptionalFight {
                additional_damage,
                optional,
                ..
            } => write!(
                f,
                " damage +{additional_damage}, +({}) if {}",
                optional.optional_skill,
                optional.condition.name()
            ),
            Self::DamageAtCurrentLocation { amount, .. } | Self::DamageToAttacker { amount, .. } => {
                write!(f, " amount {amount}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EffectCategory {
    Activate,
    Trigger,
    Passive,
    Discard,
}

impl EffectCategory {
    pub const ALL: [EffectCategory; 4] = [
        EffectCategory::Activate,
        EffectCategory::Trigger,
        EffectCategory::Passive,
        EffectCategory::Discard,
    ];

    pub fn from_keyword(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "activate" | "activation" => Some(Self::Activate),
            "trigger" => Some(Self::Trigger),
            "pasive" | "passive" => Some(Self::Passive),
            "discard" => Some(Self::Discard),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Trigger => "trigger",
            Self::Passive => "pasive",
            Self::Discard => "discard",
        }
    }
}

/// Effects of a card, one ordered list per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EffectLists {
    activate: Vec<Effect>,
    trigger: Vec<Effect>,
    passive: Vec<Effect>,
    discard: Vec<Effect>,
}

impl EffectLists {
    pub fn get(&self, category: EffectCategory) -> &[Effect] {
        match category {
            EffectCategory::Activate => &self.activate,
            EffectCategory::Trigger => &self.trigger,
            EffectCategory::Passive => &self.passive,
            EffectCategory::Discard => &self.discard,
        }
    }

    pub(crate) fn push(&mut self, category: EffectCategory, effect: Effect) {
        let list = match category {
            EffectCategory::Activate => &mut self.activate,
            EffectCategory::Trigger => &mut self.trigger,
            EffectCategory::Passive => &mut self.passive,
            EffectCategory::Discard => &mut self.discard,
        };
        list.push(effect);
    }

    pub(crate) fn extend(&mut self, category: EffectCategory, effects: Vec<Effect>) {
        for effect in effects {
            self.push(category, effect);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EffectCategory, &Effect)> + '_ {
        EffectCategory::ALL.into_iter().flat_map(move |category| {
            self.get(category)
                .iter()
                .map(move |effect| (category, effect))
        })
    }

    pub fn len(&self) -> usize {
        self.activate.len() + self.trigger.len() + self.passive.len() + self.discard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First effect of `category`, in registration order, whose condition holds.
    pub fn first_usable(&self, category: EffectCategory, query: &dyn GameQuery) -> Option<&Effect> {
        self.get(category)
            .iter()
            .find(|effect| effect.condition_holds(query))
    }
}
