//! On-disk shape of `cards.json`.
//!
//! The file layout differs from the core records in a few places: investigator
//! skills are flat `skill_*` fields, card skills live under `test_skill`,
//! modifications are a list of single-key objects and the passive list is
//! spelled `pasive`. Everything here converts into `eldritch_core` records.

use eldritch_core::{
    ActionDescriptor, ActionLists, AssetRecord, CardRecords, EventRecord, InvestigatorRecord,
    Modification, OptionalEffectDescriptor, SimpleCardRecord, Skill, SkillEffectDescriptor,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const OPTIONAL_LOCATION: &str = "location";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardFile {
    #[serde(default)]
    pub investigators: Vec<InvestigatorDef>,
    #[serde(default)]
    pub assets: Vec<AssetDef>,
    #[serde(default)]
    pub events: Vec<EventDef>,
    #[serde(default)]
    pub habilities: Vec<SimpleCardDef>,
    #[serde(default)]
    pub skills: Vec<SimpleCardDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestigatorDef {
    pub name: String,
    pub faction: String,
    #[serde(default)]
    pub traits: String,
    #[serde(default)]
    pub subname: String,
    #[serde(default)]
    pub skill_willpower: i8,
    #[serde(default)]
    pub skill_intellect: i8,
    #[serde(default)]
    pub skill_combat: i8,
    #[serde(default)]
    pub skill_agility: i8,
    pub health: u8,
    pub sanity: u8,
    #[serde(default)]
    pub elder_sign: Option<ActionDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionListDefs {
    #[serde(default)]
    pub activate: Vec<ActionDef>,
    #[serde(default)]
    pub trigger: Vec<ActionDef>,
    #[serde(default, alias = "passive")]
    pub pasive: Vec<ActionDef>,
    #[serde(default)]
    pub discard: Vec<ActionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDef {
    pub name: String,
    pub faction: String,
    #[serde(default)]
    pub traits: String,
    pub cost: u8,
    #[serde(default)]
    pub test_skill: Skill,
    #[serde(default)]
    pub slot: Option<String>,
    #[serde(default)]
    pub uses: Option<u8>,
    #[serde(default)]
    pub health: Option<u8>,
    #[serde(default)]
    pub sanity: Option<u8>,
    #[serde(flatten)]
    pub actions: ActionListDefs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDef {
    pub name: String,
    pub faction: String,
    #[serde(default)]
    pub traits: String,
    pub cost: u8,
    #[serde(default)]
    pub test_skill: Skill,
    #[serde(flatten)]
    pub actions: ActionListDefs,
}

/// Habilities and skill cards share this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleCardDef {
    pub name: String,
    pub faction: String,
    #[serde(default)]
    pub test_skill: Skill,
    #[serde(flatten)]
    pub actions: ActionListDefs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDef {
    pub action: String,
    #[serde(default)]
    pub expend: Option<u8>,
    #[serde(default)]
    pub skills: SkillsDef,
    #[serde(default)]
    pub modifications: Vec<BTreeMap<String, Modification>>,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsDef {
    #[serde(flatten)]
    pub skill: Skill,
    #[serde(default)]
    pub optional: Option<OptionalDef>,
}

/// Extra skill granted while a condition on the named subject holds. Only
/// `location` subjects are read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionalDef {
    #[serde(flatten)]
    pub skill: Skill,
    #[serde(default)]
    pub location: Option<String>,
}

impl From<ActionDef> for ActionDescriptor {
    fn from(def: ActionDef) -> Self {
        let optional_effect = def.skills.optional.map(|optional| {
            let (what, condition) = match optional.location {
                Some(condition) => (OPTIONAL_LOCATION.to_string(), condition),
                None => (String::new(), String::new()),
            };
            OptionalEffectDescriptor {
                skill: optional.skill,
                what,
                condition,
            }
        });
        // Later keys overwrite earlier ones, the same as a map insert per entry.
        let modifications = def.modifications.into_iter().flatten().collect();
        ActionDescriptor {
            action: def.action,
            expend: def.expend,
            skill_effect: SkillEffectDescriptor {
                skill: def.skills.skill,
                optional_effect,
            },
            modifications,
            target: def.target,
        }
    }
}

fn descriptors(defs: Vec<ActionDef>) -> Vec<ActionDescriptor> {
    defs.into_iter().map(ActionDescriptor::from).collect()
}

impl From<ActionListDefs> for ActionLists {
    fn from(defs: ActionListDefs) -> Self {
        ActionLists {
            activate: descriptors(defs.activate),
            trigger: descriptors(defs.trigger),
            passive: descriptors(defs.pasive),
            discard: descriptors(defs.discard),
        }
    }
}

impl From<InvestigatorDef> for InvestigatorRecord {
    fn from(def: InvestigatorDef) -> Self {
        InvestigatorRecord {
            name: def.name,
            faction: def.faction,
            traits: def.traits,
            subname: def.subname,
            skill: Skill::new(
                def.skill_willpower,
                def.skill_intellect,
                def.skill_combat,
                def.skill_agility,
            ),
            health: def.health,
            sanity: def.sanity,
            elder_sign: def.elder_sign.map(ActionDescriptor::from),
        }
    }
}

impl From<AssetDef> for AssetRecord {
    fn from(def: AssetDef) -> Self {
        AssetRecord {
            name: def.name,
            faction: def.faction,
            traits: def.traits,
            cost: def.cost,
            skill: def.test_skill,
            slot: def.slot,
            uses: def.uses,
            health: def.health,
            sanity: def.sanity,
            actions: def.actions.into(),
        }
    }
}

impl From<EventDef> for EventRecord {
    fn from(def: EventDef) -> Self {
        EventRecord {
            name: def.name,
            faction: def.faction,
            traits: def.traits,
            cost: def.cost,
            skill: def.test_skill,
            actions: def.actions.into(),
        }
    }
}

impl From<SimpleCardDef> for SimpleCardRecord {
    fn from(def: SimpleCardDef) -> Self {
        SimpleCardRecord {
            name: def.name,
            faction: def.faction,
            skill: def.test_skill,
            actions: def.actions.into(),
        }
    }
}

impl From<CardFile> for CardRecords {
    fn from(file: CardFile) -> Self {
        CardRecords {
            investigators: file.investigators.into_iter().map(Into::into).collect(),
            assets: file.assets.into_iter().map(Into::into).collect(),
            events: file.events.into_iter().map(Into::into).collect(),
            habilities: file.habilities.into_iter().map(Into::into).collect(),
            skills: file.skills.into_iter().map(Into::into).collect(),
        }
    }
}
