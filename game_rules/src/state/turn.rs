//! Turn cycle.

use super::GameState;
use crate::resources::ResourceChanges;

impl GameState {
    /// End the current turn: advance the counter, unlock every skill, then
    /// grant the stipend (clamped like any other delta).
    pub fn end_turn(&mut self, stipend: &ResourceChanges) {
        self.turn = self.turn.saturating_add(1);
        self.used_this_turn.clear();
        self.ledger.apply_delta(stipend);
        tracing::debug!(turn = self.turn, "turn started");
    }
}
