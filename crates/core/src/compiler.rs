//! Turns action descriptors into effects.
//!
//! A descriptor is matched against the known action tags in a fixed order and
//! produces at most one effect. Descriptors that match nothing, or that lack a
//! field their action needs, produce no effect; the [`DescriptorPolicy`]
//! decides whether that is reported as a warning or rejected as an error.

use crate::{
    decode, ActionDescriptor, ActionLists, Condition, Effect, EffectBase, EffectCategory,
    EffectLists, LocationCondition, LocationOptional, NameError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const OPTIONAL_LOCATION: &str = "location";
const ATTACKING_ENEMY: &str = "attacking_enemy";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorPolicy {
    /// Incomplete or unknown descriptors are dropped with a warning.
    #[default]
    Lenient,
    /// Incomplete or unknown descriptors fail card construction.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileWarning {
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    #[error("action '{action}' requires modification '{key}'")]
    MissingModifier { action: String, key: &'static str },
    #[error("modification '{key}' of action '{action}' is not a valid amount")]
    InvalidModifier { action: String, key: &'static str },
    #[error("action '{action}' requires target '{expected}', found {found:?}")]
    TargetMismatch {
        action: String,
        expected: &'static str,
        found: Option<String>,
    },
    #[error("unknown condition '{0}'")]
    UnknownCondition(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error("{} action #{index} rejected: {warning}", .category.keyword())]
    Rejected {
        category: EffectCategory,
        index: usize,
        warning: CompileWarning,
    },
}

/// Result of compiling a single descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compiled {
    pub effect: Option<Effect>,
    pub warning: Option<CompileWarning>,
}

impl Compiled {
    fn produced(effect: Effect) -> Self {
        Self {
            effect: Some(effect),
            warning: None,
        }
    }

    fn skipped(warning: CompileWarning) -> Self {
        Self {
            effect: None,
            warning: Some(warning),
        }
    }
}

impl From<Result<Effect, CompileWarning>> for Compiled {
    fn from(value: Result<Effect, CompileWarning>) -> Self {
        match value {
            Ok(effect) => Self::produced(effect),
            Err(warning) => Self::skipped(warning),
        }
    }
}

/// Compiles one descriptor. Only unregistered names are errors here; every
/// other problem is reported through [`Compiled::warning`].
pub fn compile_descriptor(descriptor: &ActionDescriptor) -> Result<Compiled, NameError> {
    let base = EffectBase::new(
        descriptor.skill_effect.skill,
        descriptor.expend.unwrap_or(0),
    );
    let compiled = match descriptor.action.as_str() {
        "fight" => return compile_fight(descriptor, base),
        "skill_test" => Compiled::produced(Effect::SkillBonus(base)),
        "investigate" => shroud(descriptor)
            .map(|shroud_modification| Effect::InvestigateWithShroud {
                base,
                shroud_modification,
            })
            .into(),
        "make_damage" => amount(descriptor, "damage")
            .map(|amount| Effect::DamageAtCurrentLocation { base, amount })
            .into(),
        "recive_damage" => amount(descriptor, "damage")
            .and_then(|amount| {
                if descriptor.target.as_deref() == Some(ATTACKING_ENEMY) {
                    Ok(Effect::DamageToAttacker { base, amount })
                } else {
                    Err(CompileWarning::TargetMismatch {
                        action: descriptor.action.clone(),
                        expected: ATTACKING_ENEMY,
                        found: descriptor.target.clone(),
                    })
                }
            })
            .into(),
        other => Compiled::skipped(CompileWarning::UnknownAction(other.to_string())),
    };
    Ok(compiled)
}

fn compile_fight(descriptor: &ActionDescriptor, base: EffectBase) -> Result<Compiled, NameError> {
    if let Some(optional) = descriptor
        .skill_effect
        .optional_effect
        .as_ref()
        .filter(|optional| optional.what == OPTIONAL_LOCATION)
    {
        let condition = decode::<LocationCondition>(&optional.condition)?;
        let additional_damage = match amount(descriptor, "damage") {
            Ok(value) => value,
            Err(CompileWarning::MissingModifier { .. }) => 0,
            Err(warning) => return Ok(Compiled::skipped(warning)),
        };
        return Ok(Compiled::produced(Effect::LocationOptionalFight {
            base,
            additional_damage,
            optional: LocationOptional {
                base,
                optional_skill: optional.skill,
                condition,
            },
        }));
    }

    let additional_damage = match amount(descriptor, "damage") {
        Ok(value) => value,
        Err(warning) => return Ok(Compiled::skipped(warning)),
    };
    let Some(raw) = descriptor.modification("condition") else {
        return Ok(Compiled::produced(Effect::FightWithDamage {
            base,
            additional_damage,
        }));
    };
    let keyword = raw.to_string();
    let condition = Condition::from_keyword(&keyword);
    Ok(Compiled {
        effect: Some(Effect::FightWithDamageAndCondition {
            base,
            additional_damage,
            condition,
        }),
        warning: condition
            .is_none()
            .then(|| CompileWarning::UnknownCondition(keyword)),
    })
}

fn amount(descriptor: &ActionDescriptor, key: &'static str) -> Result<u8, CompileWarning> {
    let value = descriptor
        .modification(key)
        .ok_or_else(|| CompileWarning::MissingModifier {
            action: descriptor.action.clone(),
            key,
        })?;
    value
        .amount()
        .and_then(|amount| u8::try_from(amount).ok())
        .ok_or_else(|| CompileWarning::InvalidModifier {
            action: descriptor.action.clone(),
            key,
        })
}

fn shroud(descriptor: &ActionDescriptor) -> Result<i8, CompileWarning> {
    let value = descriptor
        .modification("shroud")
        .ok_or_else(|| CompileWarning::MissingModifier {
            action: descriptor.action.clone(),
            key: "shroud",
        })?;
    value.amount().ok_or_else(|| CompileWarning::InvalidModifier {
        action: descriptor.action.clone(),
        key: "shroud",
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectCompiler {
    policy: DescriptorPolicy,
}

impl EffectCompiler {
    pub fn new(policy: DescriptorPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DescriptorPolicy {
        self.policy
    }

    /// Compiles the descriptors of one category, keeping their order.
    pub fn compile_list(
        &self,
        category: EffectCategory,
        descriptors: &[ActionDescriptor],
        warnings: &mut Vec<CompileWarning>,
    ) -> Result<Vec<Effect>, CompileError> {
        let mut effects = Vec::with_capacity(descriptors.len());
        for (index, descriptor) in descriptors.iter().enumerate() {
            let compiled = compile_descriptor(descriptor)?;
            if let Some(warning) = compiled.warning {
                if self.policy == DescriptorPolicy::Strict {
                    return Err(CompileError::Rejected {
                        category,
                        index,
                        warning,
                    });
                }
                tracing::warn!(
                    category = category.keyword(),
                    index,
                    action = %descriptor.action,
                    %warning,
                    "incomplete action descriptor"
                );
                warnings.push(warning);
            }
            if let Some(effect) = compiled.effect {
                effects.push(effect);
            }
        }
        Ok(effects)
    }

    pub fn compile_lists(
        &self,
        actions: &ActionLists,
        warnings: &mut Vec<CompileWarning>,
    ) -> Result<EffectLists, CompileError> {
        let mut lists = EffectLists::default();
        for category in EffectCategory::ALL {
            let effects = self.compile_list(category, actions.get(category), warnings)?;
            lists.extend(category, effects);
        }
        Ok(lists)
    }
}
