//! Game state - the single mutable record of a run.

mod activation;
mod turn;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::config::GameConfig;
use crate::resources::ResourceLedger;
use crate::skills::SkillId;

/// Unique identifier for a play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the player is in the story script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoryPosition {
    At { chapter: usize, scene: usize },
    /// Past the last scene of the last chapter.
    Complete,
}

impl StoryPosition {
    /// The opening scene.
    pub const START: StoryPosition = StoryPosition::At {
        chapter: 0,
        scene: 0,
    };

    pub fn is_complete(&self) -> bool {
        matches!(self, StoryPosition::Complete)
    }
}

impl Default for StoryPosition {
    fn default() -> Self {
        Self::START
    }
}

/// A successful skill activation, kept for the end-of-run summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRecord {
    pub turn: u32,
    pub skill: SkillId,
}

/// The complete state of a run at any point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub run_id: RunId,

    /// Current turn, starting at 1.
    pub turn: u32,

    pub ledger: ResourceLedger,

    /// Skill ids currently shown to the player, in deal order.
    pub hand: Vec<SkillId>,

    /// Skills activated during the current turn. Cleared at every turn end.
    pub used_this_turn: BTreeSet<SkillId>,

    pub position: StoryPosition,

    /// Every successful activation of the run, oldest first.
    pub activation_log: Vec<ActivationRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameState {
    /// Create the state of a fresh run.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            run_id: RunId::new(),
            turn: 1,
            ledger: config.starting_ledger(),
            hand: config.starting_hand.clone(),
            used_this_turn: BTreeSet::new(),
            position: StoryPosition::START,
            activation_log: Vec::new(),
        }
    }

    /// Whether a skill has already been activated this turn.
    pub fn is_used_this_turn(&self, id: &SkillId) -> bool {
        self.used_this_turn.contains(id)
    }

    /// Serialize a snapshot of the state.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Restore a snapshot produced by [`GameState::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
