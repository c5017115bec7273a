//! Skill activation: affordability and once-per-turn checks, then payment.

use super::{ActivationRecord, GameState};
use crate::error::ActivationDenied;
use crate::skills::{SkillCatalog, SkillId};

impl GameState {
    /// Check whether a skill could be activated right now.
    ///
    /// Checks run in order: the skill exists, every cost is covered, and the
    /// skill has not been used this turn.
    pub fn check_activation(
        &self,
        catalog: &SkillCatalog,
        id: &SkillId,
    ) -> Result<(), ActivationDenied> {
        let skill = catalog
            .get(id)
            .ok_or_else(|| ActivationDenied::UnknownSkill(id.clone()))?;

        if let Some(shortfall) = self.ledger.shortfall(&skill.cost) {
            return Err(shortfall.into());
        }

        if self.is_used_this_turn(id) {
            return Err(ActivationDenied::AlreadyUsedThisTurn(id.clone()));
        }

        Ok(())
    }

    pub fn can_activate(&self, catalog: &SkillCatalog, id: &SkillId) -> bool {
        self.check_activation(catalog, id).is_ok()
    }

    /// Activate a skill: pay its cost and lock it for the rest of the turn.
    ///
    /// On refusal nothing is mutated, so calling this twice in one turn is safe;
    /// the second call reports [`ActivationDenied::AlreadyUsedThisTurn`].
    pub fn activate(&mut self, catalog: &SkillCatalog, id: &SkillId) -> Result<(), ActivationDenied> {
        if let Err(denied) = self.check_activation(catalog, id) {
            tracing::debug!(skill = %id, reason = %denied, "skill activation refused");
            return Err(denied);
        }

        let skill = catalog
            .get(id)
            .ok_or_else(|| ActivationDenied::UnknownSkill(id.clone()))?;
        self.ledger.debit(&skill.cost)?;
        self.used_this_turn.insert(id.clone());
        self.activation_log.push(ActivationRecord {
            turn: self.turn,
            skill: id.clone(),
        });

        tracing::debug!(skill = %id, turn = self.turn, "skill activated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ActivationDenied;
    use crate::resources::{ResourceKind, ResourceLedger};
    use crate::skills::{SkillCatalog, SkillId};
    use crate::state::GameState;

    fn catalog() -> SkillCatalog {
        SkillCatalog::builtin().unwrap()
    }

    #[test]
    fn test_muye_battle_scenario() {
        let catalog = catalog();
        let mut state = GameState::default();
        let muye = SkillId::from("muye-battle");

        state.activate(&catalog, &muye).unwrap();

        assert_eq!(state.ledger.get(ResourceKind::Wealth), 100);
        assert_eq!(state.ledger.get(ResourceKind::Popularity), 100);
        assert_eq!(state.ledger.get(ResourceKind::Military), 60);
        assert_eq!(state.ledger.get(ResourceKind::Prestige), 70);
        assert!(state.is_used_this_turn(&muye));

        let before = state.ledger;
        assert_eq!(
            state.activate(&catalog, &muye),
            Err(ActivationDenied::AlreadyUsedThisTurn(muye.clone()))
        );
        assert_eq!(state.ledger, before);
        assert_eq!(state.activation_log.len(), 1);
    }

    #[test]
    fn test_unknown_skill() {
        let catalog = catalog();
        let mut state = GameState::default();
        let ghost = SkillId::from("ghost-card");

        assert!(!state.can_activate(&catalog, &ghost));
        assert_eq!(
            state.activate(&catalog, &ghost),
            Err(ActivationDenied::UnknownSkill(ghost))
        );
    }

    #[test]
    fn test_insufficient_resources_leaves_ledger_unchanged() {
        let catalog = catalog();
        let mut state = GameState::default();
        state.ledger = ResourceLedger::filled(25);
        let before = state.ledger;

        let err = state
            .activate(&catalog, &SkillId::from("muye-battle"))
            .unwrap_err();

        assert_eq!(
            err,
            ActivationDenied::InsufficientResources {
                resource: ResourceKind::Military,
                required: 40,
                available: 25,
            }
        );
        assert_eq!(state.ledger, before);
        assert!(state.used_this_turn.is_empty());
        assert!(state.activation_log.is_empty());
    }

    #[test]
    fn test_resources_checked_before_cooldown() {
        let catalog = catalog();
        let mut state = GameState::default();
        let muye = SkillId::from("muye-battle");
        state.activate(&catalog, &muye).unwrap();
        state.ledger = ResourceLedger::filled(0);

        assert!(matches!(
            state.check_activation(&catalog, &muye),
            Err(ActivationDenied::InsufficientResources { .. })
        ));
    }

    #[test]
    fn test_free_skill_activates_with_empty_ledger() {
        let catalog = catalog();
        let mut state = GameState::default();
        state.ledger = ResourceLedger::filled(0);

        assert!(state.activate(&catalog, &SkillId::from("shiji-author")).is_ok());
    }

    #[test]
    fn test_skill_outside_hand_can_be_activated() {
        let catalog = catalog();
        let mut state = GameState::default();
        let burn = SkillId::from("burn-boats");
        assert!(!state.hand.contains(&burn));

        assert!(state.activate(&catalog, &burn).is_ok());
    }

    #[test]
    fn test_denial_messages() {
        let denied = ActivationDenied::InsufficientResources {
            resource: ResourceKind::Military,
            required: 40,
            available: 25,
        };
        assert_eq!(denied.to_string(), "insufficient military: need 40, have 25");
    }

    #[test]
    fn test_activation_pays_exact_balance() {
        let catalog = catalog();
        let mut state = GameState::default();
        state.ledger = ResourceLedger::from_amounts([
            (ResourceKind::Military, 40),
            (ResourceKind::Prestige, 30),
        ]);

        state.activate(&catalog, &SkillId::from("muye-battle")).unwrap();

        assert_eq!(state.ledger.get(ResourceKind::Military), 0);
        assert_eq!(state.ledger.get(ResourceKind::Prestige), 0);
        assert_eq!(state.activation_log.len(), 1);
    }

    #[test]
    fn test_shortfall_becomes_denial() {
        let catalog = catalog();
        let mut state = GameState::default();
        state.ledger = ResourceLedger::filled(25);
        let muye = catalog.get(&SkillId::from("muye-battle")).unwrap();

        let shortfall = state.ledger.debit(&muye.cost).unwrap_err();
        assert_eq!(
            ActivationDenied::from(shortfall),
            ActivationDenied::InsufficientResources {
                resource: ResourceKind::Military,
                required: 40,
                available: 25,
            }
        );
        assert_eq!(state.ledger, ResourceLedger::filled(25));
    }
}
