use crate::{ChaosToken, DescriptorPolicy, DrawPolicy, TokenKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChaosBagConfig {
    #[serde(default)]
    pub draw_policy: DrawPolicy,
    pub tokens: Vec<ChaosToken>,
}

impl ChaosBagConfig {
    /// Token mix of the first scenario.
    pub fn standard() -> Self {
        let tokens = vec![
            ChaosToken::new(TokenKind::Skull, 0),
            ChaosToken::new(TokenKind::Skull, 0),
            ChaosToken::new(TokenKind::Cultist, -1),
            ChaosToken::new(TokenKind::ElderSign, 1),
            ChaosToken::new(TokenKind::Tablet, -2),
            ChaosToken::value(1),
            ChaosToken::value(0),
            ChaosToken::value(0),
            ChaosToken::value(-1),
            ChaosToken::value(-1),
            ChaosToken::value(-1),
            ChaosToken::value(-2),
            ChaosToken::value(-2),
            ChaosToken::value(-3),
            ChaosToken::value(-4),
            ChaosToken::auto_fail(),
        ];
        Self {
            draw_policy: DrawPolicy::Replace,
            tokens,
        }
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|token| token.kind == kind).count()
    }
}

impl Default for ChaosBagConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub chaos_bag: ChaosBagConfig,
    #[serde(default)]
    pub descriptors: DescriptorPolicy,
}
