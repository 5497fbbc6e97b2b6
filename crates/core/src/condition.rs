use crate::LocationCondition;
use serde::{Deserialize, Serialize};

/// Read-only view of the game state that conditions are checked against.
pub trait GameQuery {
    /// The enemy being attacked is the only enemy engaged with the investigator.
    fn only_enemy_engaged(&self) -> bool;
    fn location_has_undiscovered_clues(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Condition {
    AlwaysTrue,
    OnlyEnemyEngaged,
}

impl Condition {
    /// Card records only ever name `only_enemy_engaged`; the match is exact.
    /// `AlwaysTrue` has no keyword and is built in code.
    pub fn from_keyword(value: &str) -> Option<Self> {
        match value {
            "only_enemy_engaged" => Some(Self::OnlyEnemyEngaged),
            _ => None,
        }
    }

    pub fn evaluate(self, query: &dyn GameQuery) -> bool {
        match self {
            Self::AlwaysTrue => true,
            Self::OnlyEnemyEngaged => query.only_enemy_engaged(),
        }
    }
}

impl LocationCondition {
    pub fn evaluate(self, query: &dyn GameQuery) -> bool {
        match self {
            Self::UndiscoveredClues => query.location_has_undiscovered_clues(),
        }
    }
}

/// Fixed answers, for callers that already know the state they are asking about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticQuery {
    pub only_enemy_engaged: bool,
    pub undiscovered_clues: bool,
}

impl GameQuery for StaticQuery {
    fn only_enemy_engaged(&self) -> bool {
        self.only_enemy_engaged
    }

    fn location_has_undiscovered_clues(&self) -> bool {
        self.undiscovered_clues
    }
}
