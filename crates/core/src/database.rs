//! Name-indexed card records and the factory that builds cards from them.
//!
//! The index is built once, explicitly, and never changes afterwards. Cards
//! are built from their record on every lookup.

use crate::{
    decode, ActionDescriptor, Asset, AssetRecord, Card, CardRecords, CompileError,
    CompileWarning, DescriptorPolicy, Effect, EffectCategory, EffectCompiler, Event,
    EventRecord, Faction, Hability, Investigator, InvestigatorRecord, NameError, RecordSource,
    SimpleCardRecord, SkillCard, Slot,
};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card '{card}': {source}")]
    Name { card: String, source: NameError },
    #[error("card '{card}': {source}")]
    Compile { card: String, source: CompileError },
}

#[derive(Debug, Clone, Default)]
pub struct CardIndex {
    investigators: HashMap<String, InvestigatorRecord>,
    assets: HashMap<String, AssetRecord>,
    events: HashMap<String, EventRecord>,
    habilities: HashMap<String, SimpleCardRecord>,
    skills: HashMap<String, SimpleCardRecord>,
}

impl CardIndex {
    /// Indexes records by name. The first record wins when a name repeats.
    pub fn build(records: CardRecords) -> Self {
        let mut index = Self::default();
        for record in records.investigators {
            insert_first(&mut index.investigators, "investigator", record.name.clone(), record);
        }
        for record in records.assets {
            insert_first(&mut index.assets, "asset", record.name.clone(), record);
        }
        for record in records.events {
            insert_first(&mut index.events, "event", record.name.clone(), record);
        }
        for record in records.habilities {
            insert_first(&mut index.habilities, "hability", record.name.clone(), record);
        }
        for record in records.skills {
            insert_first(&mut index.skills, "skill", record.name.clone(), record);
        }
        tracing::debug!(cards = index.len(), "card index built");
        index
    }

    pub fn from_source<S: RecordSource>(source: &S) -> Result<Self, S::Error> {
        Ok(Self::build(source.load_records()?))
    }

    pub fn len(&self) -> usize {
        self.investigators.len()
            + self.assets.len()
            + self.events.len()
            + self.habilities.len()
            + self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains<T: CardKind>(&self, name: &str) -> bool {
        T::record(self, name).is_some()
    }
}

fn insert_first<R>(map: &mut HashMap<String, R>, kind: &str, name: String, record: R) {
    match map.entry(name) {
        Entry::Occupied(entry) => {
            tracing::warn!(kind, name = %entry.key(), "duplicate card record ignored");
        }
        Entry::Vacant(entry) => {
            entry.insert(record);
        }
    }
}

/// A card type that can be built from the index.
pub trait CardKind: Card + fmt::Display + Sized {
    type Record;

    fn record<'a>(index: &'a CardIndex, name: &str) -> Option<&'a Self::Record>;

    fn build(
        record: &Self::Record,
        compiler: &EffectCompiler,
        warnings: &mut Vec<CompileWarning>,
    ) -> Result<Self, CardError>;
}

fn faction(card: &str, name: &str) -> Result<Faction, CardError> {
    decode::<Faction>(name).map_err(|source| CardError::Name {
        card: card.to_string(),
        source,
    })
}

fn slot(card: &str, name: Option<&str>) -> Result<Option<Slot>, CardError> {
    name.map(|name| {
        decode::<Slot>(name).map_err(|source| CardError::Name {
            card: card.to_string(),
            source,
        })
    })
    .transpose()
}

fn compile_error(card: &str) -> impl FnOnce(CompileError) -> CardError + '_ {
    move |source| CardError::Compile {
        card: card.to_string(),
        source,
    }
}

fn elder_sign(
    card: &str,
    descriptor: Option<&ActionDescriptor>,
    compiler: &EffectCompiler,
    warnings: &mut Vec<CompileWarning>,
) -> Result<Option<Effect>, CardError> {
    let Some(descriptor) = descriptor else {
        return Ok(None);
    };
    let effects = compiler
        .compile_list(
            EffectCategory::Trigger,
            std::slice::from_ref(descriptor),
            warnings,
        )
        .map_err(compile_error(card))?;
    Ok(effects.into_iter().next())
}

impl CardKind for Investigator {
    type Record = InvestigatorRecord;

    fn record<'a>(index: &'a CardIndex, name: &str) -> Option<&'a Self::Record> {
        index.investigators.get(name)
    }

    fn build(
        record: &Self::Record,
        compiler: &EffectCompiler,
        warnings: &mut Vec<CompileWarning>,
    ) -> Result<Self, CardError> {
        let mut investigator = Investigator::new(
            record.name.clone(),
            faction(&record.name, &record.faction)?,
            record.skill,
            record.health,
            record.sanity,
        )
        .with_subname(record.subname.clone())
        .with_traits(record.traits.clone());
        if let Some(effect) =
            elder_sign(&record.name, record.elder_sign.as_ref(), compiler, warnings)?
        {
            investigator = investigator.with_elder_sign(effect);
        }
        Ok(investigator)
    }
}

impl CardKind for Asset {
    type Record = AssetRecord;

    fn record<'a>(index: &'a CardIndex, name: &str) -> Option<&'a Self::Record> {
        index.assets.get(name)
    }

    fn build(
        record: &Self::Record,
        compiler: &EffectCompiler,
        warnings: &mut Vec<CompileWarning>,
    ) -> Result<Self, CardError> {
        let asset = Asset::new(
            record.name.clone(),
            faction(&record.name, &record.faction)?,
            record.skill,
            record.cost,
            slot(&record.name, record.slot.as_deref())?,
        )
        .with_traits(record.traits.clone())
        .with_uses(record.uses)
        .with_soak(record.health, record.sanity);
        let effects = compiler
            .compile_lists(&record.actions, warnings)
            .map_err(compile_error(&record.name))?;
        Ok(asset.with_effects(effects))
    }
}

impl CardKind for Event {
    type Record = EventRecord;

    fn record<'a>(index: &'a CardIndex, name: &str) -> Option<&'a Self::Record> {
        index.events.get(name)
    }

    fn build(
        record: &Self::Record,
        compiler: &EffectCompiler,
        warnings: &mut Vec<CompileWarning>,
    ) -> Result<Self, CardError> {
        let event = Event::new(
            record.name.clone(),
            faction(&record.name, &record.faction)?,
            record.skill,
            record.cost,
        )
        .with_traits(record.traits.clone());
        let effects = compiler
            .compile_lists(&record.actions, warnings)
            .map_err(compile_error(&record.name))?;
        Ok(event.with_effects(effects))
    }
}

impl CardKind for Hability {
    type Record = SimpleCardRecord;

    fn record<'a>(index: &'a CardIndex, name: &str) -> Option<&'a Self::Record> {
        index.habilities.get(name)
    }

    fn build(
        record: &Self::Record,
        compiler: &EffectCompiler,
        warnings: &mut Vec<CompileWarning>,
    ) -> Result<Self, CardError> {
        let hability = Hability::new(
            record.name.clone(),
            faction(&record.name, &record.faction)?,
            record.skill,
        );
        let effects = compiler
            .compile_lists(&record.actions, warnings)
            .map_err(compile_error(&record.name))?;
        Ok(hability.with_effects(effects))
    }
}

impl CardKind for SkillCard {
    type Record = SimpleCardRecord;

    fn record<'a>(index: &'a CardIndex, name: &str) -> Option<&'a Self::Record> {
        index.skills.get(name)
    }

    fn build(
        record: &Self::Record,
        compiler: &EffectCompiler,
        warnings: &mut Vec<CompileWarning>,
    ) -> Result<Self, CardError> {
        let card = SkillCard::new(
            record.name.clone(),
            faction(&record.name, &record.faction)?,
            record.skill,
        );
        let effects = compiler
            .compile_lists(&record.actions, warnings)
            .map_err(compile_error(&record.name))?;
        Ok(card.with_effects(effects))
    }
}

/// A freshly built card and the warnings its descriptors produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport<T> {
    pub card: T,
    pub warnings: Vec<CompileWarning>,
}

#[derive(Debug, Clone, Default)]
pub struct CardDatabase {
    index: CardIndex,
    compiler: EffectCompiler,
}

impl CardDatabase {
    pub fn new(index: CardIndex, policy: DescriptorPolicy) -> Self {
        Self {
            index,
            compiler: EffectCompiler::new(policy),
        }
    }

    pub fn index(&self) -> &CardIndex {
        &self.index
    }

    pub fn policy(&self) -> DescriptorPolicy {
        self.compiler.policy()
    }

    /// Builds the card named `name`. A missing record is `Ok(None)`.
    pub fn card<T: CardKind>(&self, name: &str) -> Result<Option<T>, CardError> {
        Ok(self.card_report::<T>(name)?.map(|report| report.card))
    }

    pub fn card_report<T: CardKind>(
        &self,
        name: &str,
    ) -> Result<Option<BuildReport<T>>, CardError> {
        let Some(record) = T::record(&self.index, name) else {
            return Ok(None);
        };
        let mut warnings = Vec::new();
        let card = T::build(record, &self.compiler, &mut warnings)?;
        tracing::debug!(%card, warnings = warnings.len(), "card built");
        Ok(Some(BuildReport { card, warnings }))
    }

    pub fn investigator(&self, name: &str) -> Result<Option<Investigator>, CardError> {
        self.card(name)
    }

    pub fn asset(&self, name: &str) -> Result<Option<Asset>, CardError> {
        self.card(name)
    }

    pub fn event(&self, name: &str) -> Result<Option<Event>, CardError> {
        self.card(name)
    }

    pub fn hability(&self, name: &str) -> Result<Option<Hability>, CardError> {
        self.card(name)
    }

    pub fn skill_card(&self, name: &str) -> Result<Option<SkillCard>, CardError> {
        self.card(name)
    }
}
