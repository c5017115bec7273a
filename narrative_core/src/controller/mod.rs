//! Story controller - the scene state machine and the game's public surface.
//!
//! The controller owns the [`GameState`] of the current run and interprets
//! choice effects against it:
//! 1. **Gate**: a choice tied to a skill is refused while that skill cannot be activated
//! 2. **Dispatch**: the choice's [`ChoiceEffect`] mutates resources and skills
//! 3. **Transition**: the story position advances, jumps, or stays put
//!
//! Every handler runs to completion on `&mut self`; there is no shared state.

mod summary;

pub use summary::*;

use game_rules::{
    ActivationDenied, GameConfig, GameState, Skill, SkillCatalog, SkillId, StoryPosition,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ChoiceRejected, ContentError};
use crate::script::{Chapter, Choice, ChoiceEffect, Scene, StoryScript};

/// Which screen the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    MainMenu,
    Story,
    Achievements,
}

/// A choice as the player sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView<'a> {
    pub index: usize,
    pub text: &'a str,
    /// The skill gating the choice, explicit or implied by its effect.
    pub required_skill: Option<&'a SkillId>,
    /// False while the gating skill cannot be activated.
    pub available: bool,
}

/// Where a choice left the story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Advanced(StoryPosition),
    Jumped(StoryPosition),
    /// The gating skill was refused; nothing changed.
    Stayed(ActivationDenied),
    ShowAchievements,
    ReturnedToMenu,
    Restarted,
}

/// Result of a choice, for the presentation layer to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOutcome {
    pub message: Option<String>,
    pub transition: Transition,
}

/// Drives one run through a story script.
#[derive(Debug, Clone)]
pub struct StoryController {
    catalog: Arc<SkillCatalog>,
    script: Arc<StoryScript>,
    config: GameConfig,
    state: GameState,
    screen: Screen,
    /// Whether story mode has been entered since the last fresh run.
    story_started: bool,
}

impl StoryController {
    /// Create a controller, rejecting content that could break during play.
    pub fn new(
        catalog: Arc<SkillCatalog>,
        script: Arc<StoryScript>,
        config: GameConfig,
    ) -> Result<Self, ContentError> {
        script.validate(&catalog)?;
        config.validate_against(&catalog)?;

        let state = GameState::new(&config);
        Ok(Self {
            catalog,
            script,
            config,
            state,
            screen: Screen::MainMenu,
            story_started: false,
        })
    }

    /// Create a controller over the built-in catalog and story.
    pub fn with_builtin_content() -> Result<Self, ContentError> {
        Self::with_config(GameConfig::default())
    }

    /// Built-in catalog and story with custom rules.
    pub fn with_config(config: GameConfig) -> Result<Self, ContentError> {
        let catalog = Arc::new(SkillCatalog::builtin()?);
        let script = Arc::new(StoryScript::builtin()?);
        Self::new(catalog, script, config)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An owned copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn script(&self) -> &StoryScript {
        &self.script
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Enter story mode at the first scene and deal the starting hand.
    ///
    /// Resources, turn and skill history are reset only when the run is fresh:
    /// story mode was never entered, or the previous run reached the end.
    pub fn start_story(&mut self) {
        if !self.story_started || self.state.position.is_complete() {
            self.state = GameState::new(&self.config);
            tracing::info!(run_id = %self.state.run_id, "new run started");
        }

        self.story_started = true;
        self.state.position = StoryPosition::START;
        self.state.hand = self.config.starting_hand.clone();
        self.screen = Screen::Story;
    }

    /// Throw away the current run and start a fresh one at the first scene.
    pub fn restart(&mut self) {
        let previous = self.state.run_id;
        self.story_started = false;
        self.start_story();
        tracing::info!(%previous, run_id = %self.state.run_id, "run restarted");
    }

    /// Leave story mode without touching the run.
    pub fn return_to_menu(&mut self) {
        self.screen = Screen::MainMenu;
    }

    pub fn current_chapter(&self) -> Option<&Chapter> {
        match self.state.position {
            StoryPosition::At { chapter, .. } => self.script.chapter(chapter),
            StoryPosition::Complete => None,
        }
    }

    pub fn current_scene(&self) -> Option<&Scene> {
        match self.state.position {
            StoryPosition::At { chapter, scene } => self.script.scene(chapter, scene),
            StoryPosition::Complete => None,
        }
    }

    /// The current scene's choices, with availability worked out.
    pub fn choices(&self) -> Vec<ChoiceView<'_>> {
        let Some(scene) = self.current_scene() else {
            return Vec::new();
        };

        scene
            .choices
            .iter()
            .enumerate()
            .map(|(index, choice)| ChoiceView {
                index,
                text: &choice.text,
                required_skill: choice.gating_skill(),
                available: choice
                    .gating_skill()
                    .map_or(true, |skill| self.state.can_activate(&self.catalog, skill)),
            })
            .collect()
    }

    /// The cards in hand, resolved against the catalog.
    pub fn hand(&self) -> Vec<&Skill> {
        self.state
            .hand
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    /// Pick a choice in the current scene and carry out its effect.
    pub fn select_choice(&mut self, index: usize) -> Result<ChoiceOutcome, ChoiceRejected> {
        let result = self.dispatch_choice(index);
        if let Err(rejected) = &result {
            tracing::warn!(index, reason = %rejected, "choice rejected");
        }
        result
    }

    fn dispatch_choice(&mut self, index: usize) -> Result<ChoiceOutcome, ChoiceRejected> {
        if self.screen != Screen::Story {
            return Err(ChoiceRejected::NotInStory);
        }

        let script = Arc::clone(&self.script);
        let StoryPosition::At { chapter, scene } = self.state.position else {
            return Err(ChoiceRejected::StoryComplete);
        };
        let scene = script
            .scene(chapter, scene)
            .ok_or(ChoiceRejected::InvalidPosition { chapter, scene })?;
        let choice = scene.choices.get(index).ok_or(ChoiceRejected::NoSuchChoice {
            index,
            available: scene.choices.len(),
        })?;

        if let Some(skill) = choice.gating_skill() {
            if let Err(denied) = self.state.check_activation(&self.catalog, skill) {
                return Ok(refused(choice, denied));
            }
        }

        let outcome = match &choice.effect {
            ChoiceEffect::ApplyDelta { changes, message } => {
                self.state.ledger.apply_delta(changes);
                ChoiceOutcome {
                    message: message.clone(),
                    transition: Transition::Advanced(self.advance()),
                }
            }
            ChoiceEffect::ActivateSkillThenDelta {
                skill,
                changes,
                message,
            } => {
                if let Err(denied) = self.state.activate(&self.catalog, skill) {
                    return Ok(refused(choice, denied));
                }
                self.state.ledger.apply_delta(changes);
                ChoiceOutcome {
                    message: message.clone(),
                    transition: Transition::Advanced(self.advance()),
                }
            }
            ChoiceEffect::Advance { message } => ChoiceOutcome {
                message: message.clone(),
                transition: Transition::Advanced(self.advance()),
            },
            ChoiceEffect::JumpToScene { chapter, scene } => ChoiceOutcome {
                message: None,
                transition: Transition::Jumped(self.jump_to(*chapter, *scene)?),
            },
            ChoiceEffect::ShowAchievements => {
                self.screen = Screen::Achievements;
                ChoiceOutcome {
                    message: None,
                    transition: Transition::ShowAchievements,
                }
            }
            ChoiceEffect::ReturnToMenu => {
                self.return_to_menu();
                ChoiceOutcome {
                    message: None,
                    transition: Transition::ReturnedToMenu,
                }
            }
            ChoiceEffect::Restart => {
                self.restart();
                ChoiceOutcome {
                    message: None,
                    transition: Transition::Restarted,
                }
            }
        };

        Ok(outcome)
    }

    /// Move to the next scene, rolling into the next chapter or the end.
    /// Does nothing once the story is complete.
    pub fn advance(&mut self) -> StoryPosition {
        let from = self.state.position;
        let to = self.script.next_position(from);
        self.state.position = to;

        if to.is_complete() && !from.is_complete() {
            tracing::info!(run_id = %self.state.run_id, turn = self.state.turn, "story complete");
        } else {
            tracing::debug!(?from, ?to, "scene advanced");
        }
        to
    }

    /// Go directly to a scene.
    pub fn jump_to(&mut self, chapter: usize, scene: usize) -> Result<StoryPosition, ChoiceRejected> {
        let target = StoryPosition::At { chapter, scene };
        if self.script.scene(chapter, scene).is_none() {
            return Err(ChoiceRejected::InvalidPosition { chapter, scene });
        }

        tracing::debug!(from = ?self.state.position, to = ?target, "scene jump");
        self.state.position = target;
        Ok(target)
    }

    /// Activate a skill directly, outside any choice.
    pub fn activate_skill(&mut self, id: &SkillId) -> Result<(), ActivationDenied> {
        self.state.activate(&self.catalog, id)
    }

    pub fn can_activate(&self, id: &SkillId) -> bool {
        self.state.can_activate(&self.catalog, id)
    }

    /// End the turn and pay the configured stipend.
    pub fn end_turn(&mut self) {
        self.state.end_turn(&self.config.turn_stipend);
    }

    pub fn run_summary(&self) -> RunSummary {
        RunSummary::from_state(&self.state)
    }
}

fn refused(choice: &Choice, denied: ActivationDenied) -> ChoiceOutcome {
    ChoiceOutcome {
        message: Some(
            choice
                .refusal_message
                .clone()
                .unwrap_or_else(|| denied.to_string()),
        ),
        transition: Transition::Stayed(denied),
    }
}
