//! Error types for the story layer.

use game_rules::{CatalogError, ConfigError, SkillId};
use thiserror::Error;

/// A story script that failed to parse or would break during play.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("story parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("story JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("story has no chapters")]
    NoChapters,

    #[error("chapter {chapter} has no scenes")]
    EmptyChapter { chapter: usize },

    #[error("scene {chapter}:{scene} offers no choices")]
    SceneWithoutChoices { chapter: usize, scene: usize },

    #[error(
        "choice {choice} of scene {chapter}:{scene} jumps to missing scene {target_chapter}:{target_scene}"
    )]
    DanglingJump {
        chapter: usize,
        scene: usize,
        choice: usize,
        target_chapter: usize,
        target_scene: usize,
    },

    #[error("choice {choice} of scene {chapter}:{scene} names unknown skill {skill}")]
    UnknownSkill {
        chapter: usize,
        scene: usize,
        choice: usize,
        skill: SkillId,
    },
}

/// Any content problem found while setting up a controller.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// Why a story action was not carried out. Nothing was changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceRejected {
    #[error("story mode is not active")]
    NotInStory,

    #[error("the story is already complete")]
    StoryComplete,

    #[error("no choice {index}; this scene has {available}")]
    NoSuchChoice { index: usize, available: usize },

    #[error("no scene {chapter}:{scene} in this story")]
    InvalidPosition { chapter: usize, scene: usize },
}
