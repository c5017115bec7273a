//! Load-time checks that keep a broken script from ever reaching play.

use game_rules::{SkillCatalog, SkillId, StoryPosition};

use super::{ChoiceEffect, StoryScript};
use crate::error::ScriptError;

impl StoryScript {
    /// Reject scripts that could strand the player or point at nothing.
    ///
    /// Every chapter needs a scene, every scene needs a choice, every jump must
    /// land on an existing scene and every skill mentioned must be in the catalog.
    pub fn validate(&self, catalog: &SkillCatalog) -> Result<(), ScriptError> {
        if self.chapters.is_empty() {
            return Err(ScriptError::NoChapters);
        }

        for (chapter_index, chapter) in self.chapters.iter().enumerate() {
            if chapter.scenes.is_empty() {
                return Err(ScriptError::EmptyChapter {
                    chapter: chapter_index,
                });
            }

            for (scene_index, scene) in chapter.scenes.iter().enumerate() {
                if scene.choices.is_empty() {
                    return Err(ScriptError::SceneWithoutChoices {
                        chapter: chapter_index,
                        scene: scene_index,
                    });
                }

                for (choice_index, choice) in scene.choices.iter().enumerate() {
                    let location = ChoiceLocation {
                        chapter: chapter_index,
                        scene: scene_index,
                        choice: choice_index,
                    };

                    let mentioned = choice.required_skill.iter().chain(match &choice.effect {
                        ChoiceEffect::ActivateSkillThenDelta { skill, .. } => Some(skill),
                        _ => None,
                    });
                    for skill in mentioned {
                        location.check_skill(catalog, skill)?;
                    }

                    if let ChoiceEffect::JumpToScene {
                        chapter: target_chapter,
                        scene: target_scene,
                    } = choice.effect
                    {
                        let target = StoryPosition::At {
                            chapter: target_chapter,
                            scene: target_scene,
                        };
                        if !self.contains(target) {
                            return Err(ScriptError::DanglingJump {
                                chapter: chapter_index,
                                scene: scene_index,
                                choice: choice_index,
                                target_chapter,
                                target_scene,
                            });
                        }
                    }
                }
            }
        }

        tracing::debug!(
            chapters = self.chapters.len(),
            scenes = self.scene_count(),
            "story script validated"
        );
        Ok(())
    }
}

struct ChoiceLocation {
    chapter: usize,
    scene: usize,
    choice: usize,
}

impl ChoiceLocation {
    fn check_skill(&self, catalog: &SkillCatalog, skill: &SkillId) -> Result<(), ScriptError> {
        if catalog.contains(skill) {
            Ok(())
        } else {
            Err(ScriptError::UnknownSkill {
                chapter: self.chapter,
                scene: self.scene,
                choice: self.choice,
                skill: skill.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ScriptError;
    use crate::script::StoryScript;
    use game_rules::SkillCatalog;

    fn catalog() -> SkillCatalog {
        SkillCatalog::builtin().unwrap()
    }

    const ONE_SCENE: &str = r#"
        [[chapters]]
        title = "one"

        [[chapters.scenes]]
        title = "a"
        text = "..."

        [[chapters.scenes.choices]]
        text = "go"
        effect = { kind = "advance" }
    "#;

    #[test]
    fn test_builtin_story_is_valid() {
        let script = StoryScript::builtin().unwrap();
        assert!(script.validate(&catalog()).is_ok());
    }

    #[test]
    fn test_minimal_story_is_valid() {
        let script = StoryScript::from_toml_str(ONE_SCENE).unwrap();
        assert!(script.validate(&catalog()).is_ok());
    }

    #[test]
    fn test_empty_script_rejected() {
        let err = StoryScript::default().validate(&catalog()).unwrap_err();
        assert!(matches!(err, ScriptError::NoChapters));
    }

    #[test]
    fn test_chapter_without_scenes_rejected() {
        let toml = format!("{ONE_SCENE}\n[[chapters]]\ntitle = \"two\"\nscenes = []\n");
        let script = StoryScript::from_toml_str(&toml).unwrap();
        let err = script.validate(&catalog()).unwrap_err();
        assert!(matches!(err, ScriptError::EmptyChapter { chapter: 1 }));
    }

    #[test]
    fn test_scene_without_choices_rejected() {
        let toml = r#"
            [[chapters]]
            title = "one"
            [[chapters.scenes]]
            title = "dead end"
            text = ""
            choices = []
        "#;
        let script = StoryScript::from_toml_str(toml).unwrap();
        let err = script.validate(&catalog()).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::SceneWithoutChoices {
                chapter: 0,
                scene: 0
            }
        ));
    }

    #[test]
    fn test_dangling_jump_rejected() {
        let toml = ONE_SCENE.replace(
            r#"{ kind = "advance" }"#,
            r#"{ kind = "jump_to_scene", chapter = 3, scene = 0 }"#,
        );
        let script = StoryScript::from_toml_str(&toml).unwrap();
        let err = script.validate(&catalog()).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::DanglingJump {
                target_chapter: 3,
                target_scene: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_jump_to_missing_scene_in_real_chapter_rejected() {
        let toml = ONE_SCENE.replace(
            r#"{ kind = "advance" }"#,
            r#"{ kind = "jump_to_scene", chapter = 0, scene = 4 }"#,
        );
        let script = StoryScript::from_toml_str(&toml).unwrap();
        assert!(matches!(
            script.validate(&catalog()),
            Err(ScriptError::DanglingJump { .. })
        ));
    }

    #[test]
    fn test_unknown_required_skill_rejected() {
        let toml = ONE_SCENE.replace(
            "text = \"go\"",
            "text = \"go\"\nrequired_skill = \"moon-landing\"",
        );
        let script = StoryScript::from_toml_str(&toml).unwrap();
        let err = script.validate(&catalog()).unwrap_err();
        assert!(matches!(err, ScriptError::UnknownSkill { skill, .. } if skill.as_str() == "moon-landing"));
    }

    #[test]
    fn test_unknown_activated_skill_rejected() {
        let toml = ONE_SCENE.replace(
            r#"{ kind = "advance" }"#,
            r#"{ kind = "activate_skill_then_delta", skill = "moon-landing" }"#,
        );
        let script = StoryScript::from_toml_str(&toml).unwrap();
        assert!(matches!(
            script.validate(&catalog()),
            Err(ScriptError::UnknownSkill { .. })
        ));
    }
}
