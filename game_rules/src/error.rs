//! Error types for the rules layer.
//!
//! Gameplay refusals ([`ActivationDenied`]) are ordinary values meant to be shown
//! to the player. Load-time errors ([`CatalogError`], [`ConfigError`]) reject bad
//! content before play begins.

use thiserror::Error;

use crate::resources::{ResourceKind, Shortfall};
use crate::skills::SkillId;

/// An unknown resource name in content or config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource kind: {0}")]
pub struct ParseResourceError(pub String);

/// A restored ledger held an amount outside the resource bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{resource} out of range: {amount}")]
pub struct LedgerRangeError {
    pub resource: ResourceKind,
    pub amount: i32,
}

/// Why a skill could not be activated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivationDenied {
    #[error("no skill named {0}")]
    UnknownSkill(SkillId),

    #[error("insufficient {resource}: need {required}, have {available}")]
    InsufficientResources {
        resource: ResourceKind,
        required: u32,
        available: i32,
    },

    #[error("{0} has already been used this turn")]
    AlreadyUsedThisTurn(SkillId),
}

impl From<Shortfall> for ActivationDenied {
    fn from(shortfall: Shortfall) -> Self {
        Self::InsufficientResources {
            resource: shortfall.resource,
            required: shortfall.required,
            available: shortfall.available,
        }
    }
}

/// Failures while loading the skill catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("duplicate skill id: {0}")]
    DuplicateSkill(SkillId),

    #[error("skill {skill} has rarity {rarity}, expected 1-5")]
    InvalidRarity { skill: SkillId, rarity: u8 },

    #[error("skill {skill} lists a zero cost for {resource}")]
    ZeroCost {
        skill: SkillId,
        resource: ResourceKind,
    },
}

/// Failures while loading or validating game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("starting {resource} of {amount} is outside 0-200")]
    StartingResourceOutOfRange { resource: ResourceKind, amount: i32 },

    #[error("starting hand names unknown skill {0}")]
    UnknownHandSkill(SkillId),
}
