//! Game configuration: starting resources, the per-turn stipend and the opening hand.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;
use crate::resources::{ResourceChanges, ResourceKind, ResourceLedger, RESOURCE_DEFAULT, RESOURCE_MAX, RESOURCE_MIN};
use crate::skills::{SkillCatalog, SkillId};

/// Tunable rules for a run.
///
/// Every field is optional in TOML; missing fields take the default values.
///
/// ```toml
/// starting_hand = ["three-laws", "knowing-talent"]
///
/// [starting_resources]
/// wealth = 150
///
/// [turn_stipend]
/// wealth = 10
/// prestige = 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Resource values for a fresh run. Kinds not listed start at 100.
    pub starting_resources: BTreeMap<ResourceKind, i32>,

    /// Granted at every turn end.
    pub turn_stipend: ResourceChanges,

    /// Skill ids dealt when story mode starts.
    pub starting_hand: Vec<SkillId>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_resources: ResourceKind::ALL
                .into_iter()
                .map(|kind| (kind, RESOURCE_DEFAULT))
                .collect(),
            turn_stipend: ResourceChanges::new()
                .with(ResourceKind::Wealth, 10)
                .with(ResourceKind::Popularity, 5)
                .with(ResourceKind::Military, 5)
                .with(ResourceKind::Prestige, 5),
            starting_hand: vec![
                SkillId::from("three-laws"),
                SkillId::from("knowing-talent"),
                SkillId::from("hongmen-escape"),
            ],
        }
    }
}

impl GameConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.check_ranges()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "game config loaded");
        Ok(config)
    }

    /// Check that every starting-hand card exists in the catalog.
    pub fn validate_against(&self, catalog: &SkillCatalog) -> Result<(), ConfigError> {
        self.check_ranges()?;
        match self.starting_hand.iter().find(|id| !catalog.contains(id)) {
            Some(unknown) => Err(ConfigError::UnknownHandSkill(unknown.clone())),
            None => Ok(()),
        }
    }

    /// Build the ledger a fresh run starts with.
    pub fn starting_ledger(&self) -> ResourceLedger {
        ResourceLedger::from_amounts(ResourceKind::ALL.into_iter().map(|kind| {
            let amount = self
                .starting_resources
                .get(&kind)
                .copied()
                .unwrap_or(RESOURCE_DEFAULT);
            (kind, amount)
        }))
    }

    fn check_ranges(&self) -> Result<(), ConfigError> {
        for (&resource, &amount) in &self.starting_resources {
            if !(RESOURCE_MIN..=RESOURCE_MAX).contains(&amount) {
                return Err(ConfigError::StartingResourceOutOfRange { resource, amount });
            }
        }
        Ok(())
    }
}
