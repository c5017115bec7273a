//! End-of-run summary shown on the achievements screen.

use game_rules::{GameState, ResourceLedger, RunId, SkillId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub run_id: RunId,
    /// The turn the run is on, counting from 1.
    pub turns_played: u32,
    /// Every skill activated, in order; repeats across turns are listed again.
    pub skills_activated: Vec<SkillId>,
    pub resources: ResourceLedger,
    pub completed: bool,
}

impl RunSummary {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            run_id: state.run_id,
            turns_played: state.turn,
            skills_activated: state
                .activation_log
                .iter()
                .map(|record| record.skill.clone())
                .collect(),
            resources: state.ledger,
            completed: state.position.is_complete(),
        }
    }

    /// Number of different skills used during the run.
    pub fn distinct_skills(&self) -> usize {
        let mut seen: Vec<&SkillId> = self.skills_activated.iter().collect();
        seen.sort();
        seen.dedup();
        seen.len()
    }
}
