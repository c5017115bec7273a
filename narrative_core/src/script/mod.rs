//! Story script - chapters, scenes and the choices that connect them.
//!
//! A script is plain data. Choice effects are tagged variants interpreted by
//! [`StoryController`](crate::StoryController), so a script can be loaded from
//! TOML or JSON and checked before anyone plays it.

mod validate;

use game_rules::{ResourceChanges, SkillId, StoryPosition};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ScriptError;

const BUILTIN_STORY: &str = include_str!("../../data/story.toml");

/// What happens when a choice is picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChoiceEffect {
    /// Apply resource changes, then advance.
    ApplyDelta {
        changes: ResourceChanges,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Activate a skill; if that succeeds apply the changes and advance.
    /// A refused activation changes nothing and keeps the player on the scene.
    ActivateSkillThenDelta {
        skill: SkillId,
        #[serde(default)]
        changes: ResourceChanges,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Move to the next scene without touching resources.
    Advance {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Go straight to a specific scene.
    JumpToScene { chapter: usize, scene: usize },

    ShowAchievements,

    ReturnToMenu,

    /// Throw the run away and start again from the first scene.
    Restart,
}

/// A button on a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,

    /// Skill the choice depends on. The choice is unavailable while that
    /// skill cannot be activated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_skill: Option<SkillId>,

    /// Shown instead of the denial reason when the required skill is refused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refusal_message: Option<String>,

    pub effect: ChoiceEffect,
}

impl Choice {
    /// The skill that must be activatable for this choice to go through.
    pub fn gating_skill(&self) -> Option<&SkillId> {
        match (&self.required_skill, &self.effect) {
            (Some(required), _) => Some(required),
            (None, ChoiceEffect::ActivateSkillThenDelta { skill, .. }) => Some(skill),
            (None, _) => None,
        }
    }
}

/// One narrative beat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub title: String,
    pub text: String,
    pub choices: Vec<Choice>,
}

/// An ordered run of scenes forming one story arc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub scenes: Vec<Scene>,
}

/// The whole story.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoryScript {
    pub chapters: Vec<Chapter>,
}

impl StoryScript {
    /// The story shipped with the game. Not yet validated against a catalog.
    pub fn builtin() -> Result<Self, ScriptError> {
        Self::from_toml_str(BUILTIN_STORY)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a script file; `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    pub fn chapter(&self, chapter: usize) -> Option<&Chapter> {
        self.chapters.get(chapter)
    }

    pub fn scene(&self, chapter: usize, scene: usize) -> Option<&Scene> {
        self.chapter(chapter)?.scenes.get(scene)
    }

    /// Whether the position names a real scene (or is the finished state).
    pub fn contains(&self, position: StoryPosition) -> bool {
        match position {
            StoryPosition::At { chapter, scene } => self.scene(chapter, scene).is_some(),
            StoryPosition::Complete => true,
        }
    }

    /// The position reached by advancing one scene from `position`.
    ///
    /// Rolls over to the first scene of the next chapter, and past the last
    /// chapter to [`StoryPosition::Complete`].
    pub fn next_position(&self, position: StoryPosition) -> StoryPosition {
        let StoryPosition::At { chapter, scene } = position else {
            return StoryPosition::Complete;
        };

        let scene_count = self.chapter(chapter).map_or(0, |c| c.scenes.len());
        if scene + 1 < scene_count {
            StoryPosition::At {
                chapter,
                scene: scene + 1,
            }
        } else if chapter + 1 < self.chapters.len() {
            StoryPosition::At {
                chapter: chapter + 1,
                scene: 0,
            }
        } else {
            StoryPosition::Complete
        }
    }

    pub fn scene_count(&self) -> usize {
        self.chapters.iter().map(|c| c.scenes.len()).sum()
    }
}
