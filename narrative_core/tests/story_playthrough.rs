use game_rules::{ResourceKind, SkillId, StoryPosition, RESOURCE_MAX, RESOURCE_MIN};
use narrative_core::{ChoiceEffect, ChoiceRejected, Screen, StoryController, Transition};
use proptest::prelude::*;

/// Pick the first choice that moves the story forward and is currently available.
fn forward_choice(controller: &StoryController) -> usize {
    let scene = controller.current_scene().expect("story in progress");
    controller
        .choices()
        .iter()
        .zip(&scene.choices)
        .find(|(view, choice)| {
            view.available
                && matches!(
                    choice.effect,
                    ChoiceEffect::ApplyDelta { .. }
                        | ChoiceEffect::ActivateSkillThenDelta { .. }
                        | ChoiceEffect::Advance { .. }
                        | ChoiceEffect::JumpToScene { .. }
                )
        })
        .map(|(view, _)| view.index)
        .expect("every scene has a way forward")
}

#[test]
fn full_playthrough_reaches_the_end() {
    let mut controller = StoryController::with_builtin_content().unwrap();
    controller.start_story();

    let mut chapters_seen = vec![0];
    let mut steps = 0;
    while !controller.state().position.is_complete() {
        let index = forward_choice(&controller);
        let outcome = controller.select_choice(index).unwrap();
        assert!(!matches!(outcome.transition, Transition::Stayed(_)));

        if let StoryPosition::At { chapter, .. } = controller.state().position {
            if chapters_seen.last() != Some(&chapter) {
                chapters_seen.push(chapter);
            }
        }
        controller.end_turn();

        steps += 1;
        assert!(steps <= controller.script().scene_count(), "story looped");
    }

    assert_eq!(chapters_seen, vec![0, 1, 2, 3]);
    assert_eq!(
        controller.select_choice(0),
        Err(ChoiceRejected::StoryComplete)
    );

    let summary = controller.run_summary();
    assert!(summary.completed);
    assert!(!summary.skills_activated.is_empty());
    assert_eq!(summary.turns_played as usize, steps + 1);
}

#[test]
fn muye_battle_in_story() {
    let mut controller = StoryController::with_builtin_content().unwrap();
    controller.start_story();
    controller.select_choice(0).unwrap();

    let muye = SkillId::from("muye-battle");
    controller.activate_skill(&muye).unwrap();
    let ledger = controller.state().ledger;
    assert_eq!(ledger.get(ResourceKind::Military), 40);
    assert_eq!(ledger.get(ResourceKind::Prestige), 80);

    assert!(controller.activate_skill(&muye).is_err());
    assert_eq!(controller.state().ledger, ledger);
}

#[test]
fn menu_round_trip() {
    let mut controller = StoryController::with_builtin_content().unwrap();
    assert_eq!(controller.screen(), Screen::MainMenu);

    controller.start_story();
    controller.return_to_menu();
    assert_eq!(
        controller.select_choice(0),
        Err(ChoiceRejected::NotInStory)
    );

    controller.start_story();
    assert!(controller.select_choice(0).is_ok());
}

#[derive(Debug, Clone)]
enum Action {
    Choose(usize),
    Activate(usize),
    EndTurn,
    StartStory,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0usize..4).prop_map(Action::Choose),
        2 => (0usize..15).prop_map(Action::Activate),
        1 => Just(Action::EndTurn),
        1 => Just(Action::StartStory),
    ]
}

proptest! {
    #[test]
    fn position_and_resources_stay_valid(actions in prop::collection::vec(action(), 1..60)) {
        let mut controller = StoryController::with_builtin_content().unwrap();
        controller.start_story();

        for action in actions {
            let turn_before = controller.state().turn;
            match action {
                Action::Choose(index) => {
                    let _ = controller.select_choice(index);
                }
                Action::Activate(pick) => {
                    let id = controller.catalog().all()[pick].id.clone();
                    let _ = controller.activate_skill(&id);
                }
                Action::EndTurn => {
                    controller.end_turn();
                    prop_assert!(controller.state().used_this_turn.is_empty());
                }
                Action::StartStory => controller.start_story(),
            }

            let state = controller.state();
            prop_assert!(controller.script().contains(state.position));
            prop_assert!(state.turn >= turn_before || state.turn == 1);
            for (_, amount) in state.ledger.iter() {
                prop_assert!((RESOURCE_MIN..=RESOURCE_MAX).contains(&amount));
            }
        }
    }
}
