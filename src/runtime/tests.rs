use super::*;
use crate::types::{Chapter, Choice, InputEvent, NavState, Rgba, Scene, Story};

fn scene(id: u32, choices: Vec<Choice>) -> Scene {
    Scene {
        id,
        dialogue: format!("scene {id}"),
        choices,
        background: Rgba::BLACK,
        image: None,
    }
}

/// One chapter of three scenes: 0 -> 1 -> 2 (terminal).
fn linear_story() -> Story {
    Story::new(vec![Chapter {
        title: "Linear".to_string(),
        scenes: vec![
            scene(0, vec![Choice::new("go", 1)]),
            scene(1, vec![Choice::new("go", 2)]),
            scene(2, vec![]),
        ],
        theme_music: Some("linear_theme".to_string()),
    }])
}

fn two_chapter_story() -> Story {
    let mut story = linear_story();
    story.chapters.push(Chapter {
        title: "Second".to_string(),
        scenes: vec![scene(7, vec![Choice::new("onward", 8)]), scene(8, vec![])],
        theme_music: None,
    });
    story
}

#[test]
fn select_chapter_enters_first_authored_scene() {
    let story = two_chapter_story();
    let (state, effects) = apply(NavState::Menu, &story, InputEvent::SelectChapter(1));

    // Chapter 1's first scene has id 7, not 0.
    assert_eq!(
        state,
        NavState::InScene {
            chapter: 1,
            scene: 7
        }
    );
    assert!(effects.is_empty());
}

#[test]
fn select_chapter_starts_theme_music() {
    let story = linear_story();
    let (_, effects) = apply(NavState::Menu, &story, InputEvent::SelectChapter(0));
    assert_eq!(effects, vec![Effect::PlayMusic("linear_theme".to_string())]);
}

#[test]
fn select_out_of_range_chapter_is_a_noop() {
    let story = linear_story();
    let (state, effects) = apply(NavState::Menu, &story, InputEvent::SelectChapter(5));
    assert_eq!(state, NavState::Menu);
    assert!(effects.is_empty());
}

#[test]
fn select_chapter_inside_a_scene_is_a_noop() {
    let story = two_chapter_story();
    let in_scene = NavState::InScene {
        chapter: 0,
        scene: 0,
    };
    let (state, _) = apply(in_scene, &story, InputEvent::SelectChapter(1));
    assert_eq!(state, in_scene);
}

#[test]
fn choose_follows_the_choice_target() {
    let story = Story::new(vec![Chapter {
        title: "Suite".to_string(),
        scenes: vec![scene(0, vec![Choice::new("Suite...", 5)]), scene(5, vec![])],
        theme_music: None,
    }]);

    let (state, effects) = apply(
        NavState::InScene {
            chapter: 0,
            scene: 0,
        },
        &story,
        InputEvent::Choose(0),
    );

    assert_eq!(
        state,
        NavState::InScene {
            chapter: 0,
            scene: 5
        }
    );
    assert!(effects.is_empty());
}

#[test]
fn choose_on_terminal_scene_is_a_noop() {
    let story = linear_story();
    let terminal = NavState::InScene {
        chapter: 0,
        scene: 2,
    };
    let (state, effects) = apply(terminal, &story, InputEvent::Choose(0));
    assert_eq!(state, terminal);
    assert!(effects.is_empty());
}

#[test]
fn choose_second_option_when_only_one_exists_is_a_noop() {
    let story = linear_story();
    let at_start = NavState::InScene {
        chapter: 0,
        scene: 0,
    };
    let (state, _) = apply(at_start, &story, InputEvent::Choose(1));
    assert_eq!(state, at_start);
}

#[test]
fn choose_in_menu_is_a_noop() {
    let story = linear_story();
    let (state, _) = apply(NavState::Menu, &story, InputEvent::Choose(0));
    assert_eq!(state, NavState::Menu);
}

#[test]
fn quit_never_changes_navigation() {
    let story = linear_story();
    let (state, effects) = apply(NavState::Menu, &story, InputEvent::Quit);
    assert_eq!(state, NavState::Menu);
    assert!(effects.is_empty());
}

#[test]
fn tick_reverts_past_end_scene_to_menu() {
    let story = linear_story();
    let terminal = NavState::InScene {
        chapter: 0,
        scene: 2,
    };
    assert_eq!(tick(terminal, &story), NavState::Menu);
}

#[test]
fn tick_leaves_mid_chapter_scenes_alone() {
    let story = linear_story();
    let mid = NavState::InScene {
        chapter: 0,
        scene: 1,
    };
    assert_eq!(tick(mid, &story), mid);
    assert_eq!(tick(NavState::Menu, &story), NavState::Menu);
}

#[test]
fn full_traversal_returns_to_menu() {
    // Start at scene 0, choose twice to reach the terminal scene, and the
    // following tick reverts to the menu.
    let story = linear_story();

    let (state, _) = apply(NavState::Menu, &story, InputEvent::SelectChapter(0));
    let (state, _) = apply(state, &story, InputEvent::Choose(0));
    let (state, _) = apply(state, &story, InputEvent::Choose(0));
    assert_eq!(
        state,
        NavState::InScene {
            chapter: 0,
            scene: 2
        }
    );

    assert_eq!(tick(state, &story), NavState::Menu);
}
