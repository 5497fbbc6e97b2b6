use crate::{ChaosBagConfig, RngState};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Skull,
    Cultist,
    Tablet,
    ElderThing,
    ElderSign,
    AutoFail,
    Value,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChaosToken {
    pub kind: TokenKind,
    #[serde(default)]
    pub effect: i8,
}

impl ChaosToken {
    pub const fn new(kind: TokenKind, effect: i8) -> Self {
        Self { kind, effect }
    }

    pub const fn value(effect: i8) -> Self {
        Self::new(TokenKind::Value, effect)
    }

    pub const fn auto_fail() -> Self {
        Self::new(TokenKind::AutoFail, 0)
    }

    pub fn is_auto_fail(&self) -> bool {
        self.kind == TokenKind::AutoFail
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("chaos bag is empty")]
    Empty,
    #[error("no scripted tokens left")]
    Exhausted,
}

/// Where skill tests get their random token from.
pub trait TokenSource {
    fn draw(&mut self) -> Result<ChaosToken, TokenError>;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn draw(&mut self) -> Result<ChaosToken, TokenError> {
        (**self).draw()
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DrawPolicy {
    /// The drawn token stays in the bag.
    #[default]
    Replace,
    /// The drawn token is set aside until [`ChaosBag::reset`].
    Remove,
}

#[derive(Debug, Clone)]
pub struct ChaosBag {
    tokens: Vec<ChaosToken>,
    drawn: Vec<ChaosToken>,
    policy: DrawPolicy,
    rng: RngState,
}

impl ChaosBag {
    pub fn new(policy: DrawPolicy, seed: u64) -> Self {
        Self {
            tokens: Vec::new(),
            drawn: Vec::new(),
            policy,
            rng: RngState::from_seed(seed),
        }
    }

    pub fn from_config(config: &ChaosBagConfig, seed: u64) -> Self {
        let mut bag = Self::new(config.draw_policy, seed);
        bag.tokens.extend(config.tokens.iter().copied());
        bag
    }

    pub fn add_token(&mut self, token: ChaosToken) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[ChaosToken] {
        &self.tokens
    }

    /// Tokens set aside by draws since the last reset.
    pub fn drawn(&self) -> &[ChaosToken] {
        &self.drawn
    }

    pub fn policy(&self) -> DrawPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns every set-aside token to the bag.
    pub fn reset(&mut self) {
        self.tokens.append(&mut self.drawn);
    }
}

impl TokenSource for ChaosBag {
    fn draw(&mut self) -> Result<ChaosToken, TokenError> {
        let idx = self
            .rng
            .pick_index(self.tokens.len())
            .ok_or(TokenError::Empty)?;
        let token = match self.policy {
            DrawPolicy::Replace => self.tokens[idx],
            DrawPolicy::Remove => {
                let token = self.tokens.remove(idx);
                self.drawn.push(token);
                token
            }
        };
        tracing::debug!(kind = ?token.kind, effect = token.effect, "chaos token drawn");
        Ok(token)
    }
}

/// Yields a fixed sequence of tokens, for replays and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTokens {
    queue: VecDeque<ChaosToken>,
}

impl ScriptedTokens {
    pub fn new(tokens: impl IntoIterator<Item = ChaosToken>) -> Self {
        Self {
            queue: tokens.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl TokenSource for ScriptedTokens {
    fn draw(&mut self) -> Result<ChaosToken, TokenError> {
        self.queue.pop_front().ok_or(TokenError::Exhausted)
    }
}
