use crate::schema::CardFile;
use anyhow::Context;
use eldritch_core::{
    CardDatabase, CardIndex, CardRecords, ChaosBag, ChaosBagConfig, DescriptorPolicy,
    GameConfig, RecordSource,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const CARDS_FILE: &str = "cards.json";
pub const CHAOS_BAG_FILE: &str = "chaos_bag.json";
pub const COMPILER_FILE: &str = "compiler.json";

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct CompilerConfig {
    #[serde(default)]
    descriptors: DescriptorPolicy,
}

/// Top-level sections of a card file, each card still undecoded so a bad
/// entry can be reported by name.
#[derive(Debug, Default, Deserialize)]
struct CardSections {
    #[serde(default)]
    investigators: Vec<Value>,
    #[serde(default)]
    assets: Vec<Value>,
    #[serde(default)]
    events: Vec<Value>,
    #[serde(default)]
    habilities: Vec<Value>,
    #[serde(default)]
    skills: Vec<Value>,
}

impl CardSections {
    fn decode(self) -> anyhow::Result<CardFile> {
        Ok(CardFile {
            investigators: decode_section("investigator", self.investigators)?,
            assets: decode_section("asset", self.assets)?,
            events: decode_section("event", self.events)?,
            habilities: decode_section("hability", self.habilities)?,
            skills: decode_section("skill", self.skills)?,
        })
    }
}

fn decode_section<T: DeserializeOwned>(
    kind: &str,
    entries: Vec<Value>,
) -> anyhow::Result<Vec<T>> {
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let name = entry
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("<unnamed>")
                .to_string();
            serde_json::from_value(entry)
                .with_context(|| format!("parse {kind} #{idx} '{name}'"))
        })
        .collect()
}

pub fn parse_card_records(raw: &str) -> anyhow::Result<CardRecords> {
    let sections: CardSections = serde_json::from_str(raw).context("parse card records")?;
    let file = sections.decode().context("parse card records")?;
    Ok(file.into())
}

pub fn load_card_records(path: &Path) -> anyhow::Result<CardRecords> {
    let sections: CardSections = load_json(path)?;
    let file = sections
        .decode()
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(file.into())
}

/// Reads card records from a JSON file each time the index asks for them.
#[derive(Debug, Clone)]
pub struct JsonRecordSource {
    path: PathBuf,
}

impl JsonRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonRecordSource {
    type Error = anyhow::Error;

    fn load_records(&self) -> anyhow::Result<CardRecords> {
        load_card_records(&self.path)
    }
}

pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let chaos_bag: ChaosBagConfig = load_json(dir.join(CHAOS_BAG_FILE))?;
    let compiler_path = dir.join(COMPILER_FILE);
    let compiler: CompilerConfig = if compiler_path.exists() {
        load_json(compiler_path)?
    } else {
        CompilerConfig::default()
    };
    tracing::debug!(
        tokens = chaos_bag.tokens.len(),
        descriptors = ?compiler.descriptors,
        "game config loaded"
    );

    Ok(GameConfig {
        chaos_bag,
        descriptors: compiler.descriptors,
    })
}

pub fn load_card_database(dir: &Path, config: &GameConfig) -> anyhow::Result<CardDatabase> {
    let source = JsonRecordSource::new(dir.join(CARDS_FILE));
    let index = CardIndex::from_source(&source)
        .with_context(|| format!("index {}", source.path().display()))?;
    Ok(CardDatabase::new(index, config.descriptors))
}

pub fn load_chaos_bag(dir: &Path, seed: u64) -> anyhow::Result<ChaosBag> {
    let config = load_game_config(dir)?;
    Ok(ChaosBag::from_config(&config.chaos_bag, seed))
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
