use crate::{Effect, EffectCategory, EffectLists, Faction, HasSkill, NamedEnum, Skill, Slot};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Common surface of every card. The skill is the card's test skill, the
/// value it contributes when committed to a skill test.
pub trait Card: HasSkill {
    fn name(&self) -> &str;
    fn faction(&self) -> Faction;
}

macro_rules! impl_card {
    ($ty:ty) => {
        impl HasSkill for $ty {
            fn skill(&self) -> Skill {
                self.skill
            }
        }

        impl Card for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn faction(&self) -> Faction {
                self.faction
            }
        }
    };
}

macro_rules! impl_effects {
    ($ty:ty) => {
        impl $ty {
            pub fn effects(&self) -> &EffectLists {
                &self.effects
            }

            pub fn with_effect(mut self, category: EffectCategory, effect: Effect) -> Self {
                self.effects.push(category, effect);
                self
            }

            pub(crate) fn with_effects(mut self, effects: EffectLists) -> Self {
                self.effects = effects;
                self
            }
        }
    };
}

macro_rules! impl_plain_display {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{} [{}] {}, {} effects",
                    self.name,
                    self.faction.name(),
                    self.skill,
                    self.effects.len()
                )
            }
        }
    };
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Investigator {
    name: String,
    subname: String,
    traits: String,
    faction: Faction,
    skill: Skill,
    health: u8,
    sanity: u8,
    elder_sign: Option<Effect>,
}

impl Investigator {
    pub fn new(
        name: impl Into<String>,
        faction: Faction,
        skill: Skill,
        health: u8,
        sanity: u8,
    ) -> Self {
        Self {
            name: name.into(),
            subname: String::new(),
            traits: String::new(),
            faction,
            skill,
            health,
            sanity,
            elder_sign: None,
        }
    }

    pub fn with_subname(mut self, subname: impl Into<String>) -> Self {
        self.subname = subname.into();
        self
    }

    pub fn with_traits(mut self, traits: impl Into<String>) -> Self {
        self.traits = traits.into();
        self
    }

    pub fn with_elder_sign(mut self, effect: Effect) -> Self {
        self.elder_sign = Some(effect);
        self
    }

    pub fn subname(&self) -> &str {
        &self.subname
    }

    pub fn traits(&self) -> &str {
        &self.traits
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn sanity(&self) -> u8 {
        self.sanity
    }

    pub fn elder_sign(&self) -> Option<&Effect> {
        self.elder_sign.as_ref()
    }
}

impl_card!(Investigator);

impl fmt::Display for Investigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.subname.is_empty() {
            write!(f, ", {}", self.subname)?;
        }
        write!(
            f,
            " [{}] {}, health {}, sanity {}",
            self.faction.name(),
            self.skill,
            self.health,
            self.sanity
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    name: String,
    traits: String,
    faction: Faction,
    skill: Skill,
    cost: u8,
    slot: Option<Slot>,
    uses: Option<u8>,
    health: Option<u8>,
    sanity: Option<u8>,
    effects: EffectLists,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        faction: Faction,
        skill: Skill,
        cost: u8,
        slot: Option<Slot>,
    ) -> Self {
        Self {
            name: name.into(),
            traits: String::new(),
            faction,
            skill,
            cost,
            slot,
            uses: None,
            health: None,
            sanity: None,
            effects: EffectLists::default(),
        }
    }

    pub fn with_traits(mut self, traits: impl Into<String>) -> Self {
        self.traits = traits.into();
        self
    }

    pub fn with_uses(mut self, uses: Option<u8>) -> Self {
        self.uses = uses;
        self
    }

    /// Health and sanity of ally assets.
    pub fn with_soak(mut self, health: Option<u8>, sanity: Option<u8>) -> Self {
        self.health = health;
        self.sanity = sanity;
        self
    }

    pub fn traits(&self) -> &str {
        &self.traits
    }

    pub fn cost(&self) -> u8 {
        self.cost
    }

    pub fn slot(&self) -> Option<Slot> {
        self.slot
    }

    pub fn uses(&self) -> Option<u8> {
        self.uses
    }

    pub fn health(&self) -> Option<u8> {
        self.health
    }

    pub fn sanity(&self) -> Option<u8> {
        self.sanity
    }
}

impl_card!(Asset);
impl_effects!(Asset);

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] cost {}", self.name, self.faction.name(), self.cost)?;
        if let Some(slot) = self.slot {
            write!(f, ", {}", slot.name())?;
        }
        if let Some(uses) = self.uses {
            write!(f, ", uses {uses}")?;
        }
        write!(f, ", {}, {} effects", self.skill, self.effects.len())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    name: String,
    traits: String,
    faction: Faction,
    skill: Skill,
    cost: u8,
    effects: EffectLists,
}

impl Event {
    pub fn new(name: impl Into<String>, faction: Faction, skill: Skill, cost: u8) -> Self {
        Self {
            name: name.into(),
            traits: String::new(),
            faction,
            skill,
            cost,
            effects: EffectLists::default(),
        }
    }

    pub fn with_traits(mut self, traits: impl Into<String>) -> Self {
        self.traits = traits.into();
        self
    }

    pub fn traits(&self) -> &str {
        &self.traits
    }

    pub fn cost(&self) -> u8 {
        self.cost
    }
}

impl_card!(Event);
impl_effects!(Event);

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] cost {}, {}, {} effects",
            self.name,
            self.faction.name(),
            self.cost,
            self.skill,
            self.effects.len()
        )
    }
}

/// An investigator's printed ability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hability {
    name: String,
    faction: Faction,
    skill: Skill,
    effects: EffectLists,
}

impl Hability {
    pub fn new(name: impl Into<String>, faction: Faction, skill: Skill) -> Self {
        Self {
            name: name.into(),
            faction,
            skill,
            effects: EffectLists::default(),
        }
    }
}

impl_card!(Hability);
impl_effects!(Hability);
impl_plain_display!(Hability);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillCard {
    name: String,
    faction: Faction,
    skill: Skill,
    effects: EffectLists,
}

impl SkillCard {
    pub fn new(name: impl Into<String>, faction: Faction, skill: Skill) -> Self {
        Self {
            name: name.into(),
            faction,
            skill,
            effects: EffectLists::default(),
        }
    }
}

impl_card!(SkillCard);
impl_effects!(SkillCard);
impl_plain_display!(SkillCard);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EffectBase;

    #[test]
    fn card_surface() {
        let card = SkillCard::new("Vicious Blow", Faction::Guardian, Skill::new(0, 0, 1, 0));
        let card: &dyn Card = &card;
        assert_eq!(card.name(), "Vicious Blow");
        assert_eq!(card.faction(), Faction::Guardian);
        assert_eq!(card.skill(), Skill::new(0, 0, 1, 0));
    }

    #[test]
    fn effects_keep_registration_order() {
        let first = Effect::SkillBonus(EffectBase::new(Skill::new(1, 0, 0, 0), 1));
        let second = Effect::SkillBonus(EffectBase::new(Skill::new(0, 0, 1, 0), 1));
        let asset = Asset::new("Physical Training", Faction::Guardian, Skill::default(), 2, None)
            .with_effect(EffectCategory::Trigger, first)
            .with_effect(EffectCategory::Trigger, second);
        assert_eq!(asset.effects().get(EffectCategory::Trigger), &[first, second]);
        assert!(asset.effects().get(EffectCategory::Activate).is_empty());
    }

    #[test]
    fn equality_covers_effects() {
        let bonus = Effect::SkillBonus(EffectBase::default());
        let plain = Event::new("Evidence!", Faction::Guardian, Skill::default(), 1);
        let with_effect = plain.clone().with_effect(EffectCategory::Activate, bonus);
        assert_ne!(plain, with_effect);
        assert_eq!(
            with_effect,
            Event::new("Evidence!", Faction::Guardian, Skill::default(), 1)
                .with_effect(EffectCategory::Activate, bonus)
        );
    }

    #[test]
    fn display_summaries() {
        let roland = Investigator::new("Roland Banks", Faction::Guardian, Skill::new(3, 3, 4, 2), 9, 5)
            .with_subname("The Fed");
        assert_eq!(
            roland.to_string(),
            "Roland Banks, The Fed [guardian] wil 3 int 3 com 4 agi 2 wild 0, health 9, sanity 5"
        );
        let gun = Asset::new(
            ".45 Automatic",
            Faction::Guardian,
            Skill::new(0, 0, 0, 1),
            4,
            Some(Slot::Hand),
        )
        .with_uses(Some(4));
        assert_eq!(
            gun.to_string(),
            ".45 Automatic [guardian] cost 4, hand, uses 4, wil 0 int 0 com 0 agi 1 wild 0, 0 effects"
        );
        let courage = SkillCard::new("Unexpected Courage", Faction::Neutral, Skill::default().with_wild(2));
        assert_eq!(
            courage.to_string(),
            "Unexpected Courage [neutral] wil 0 int 0 com 0 agi 0 wild 2, 0 effects"
        );
    }

    #[test]
    fn investigator_elder_sign() {
        let effect = Effect::SkillBonus(EffectBase::new(Skill::default().with_wild(1), 0));
        let roland = Investigator::new("Roland Banks", Faction::Guardian, Skill::new(3, 3, 4, 2), 9, 5)
            .with_elder_sign(effect);
        assert_eq!(roland.elder_sign(), Some(&effect));
        assert_eq!(roland.health(), 9);
        assert_eq!(roland.sanity(), 5);
    }
}
