//! Navigation runtime - pure transition functions over the story graph
//!
//! The runtime never touches a window or speaker: transitions return
//! [`Effect`]s for the frontend to execute, and invalid inputs are no-ops by
//! design (discrete key handling is fire-and-forget).

use crate::types::{InputEvent, NavState, Story};

/// Side effects a transition asks the frontend to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the named theme track, replacing whatever is playing.
    PlayMusic(String),
}

/// Apply one input event to the navigation state.
///
/// Valid transitions:
/// - `SelectChapter(i)` in `Menu`, `i` in range: enter the chapter at its
///   first-authored scene and start its theme music.
/// - `Choose(k)` in `InScene` when the active scene has a choice at `k`:
///   jump to that choice's target scene.
///
/// Anything else leaves the state unchanged and produces no effects. `Quit`
/// is consumed by the loop driver and is a no-op here.
pub fn apply(state: NavState, story: &Story, event: InputEvent) -> (NavState, Vec<Effect>) {
    match (state, event) {
        (NavState::Menu, InputEvent::SelectChapter(index)) => {
            let Some(chapter) = story.chapter(index) else {
                return (state, vec![]);
            };
            // Validation guarantees chapters are non-empty.
            let Some(first) = chapter.first_scene_id() else {
                return (state, vec![]);
            };

            log::debug!("entering chapter {index} ('{}')", chapter.title);
            let effects = chapter
                .theme_music
                .iter()
                .map(|name| Effect::PlayMusic(name.clone()))
                .collect();
            (
                NavState::InScene {
                    chapter: index,
                    scene: first,
                },
                effects,
            )
        }
        (
            NavState::InScene {
                chapter: chapter_index,
                scene: scene_id,
            },
            InputEvent::Choose(option),
        ) => {
            let target = story
                .chapter(chapter_index)
                .and_then(|c| c.scene(scene_id))
                .and_then(|s| s.choices.get(option))
                .map(|choice| choice.target);

            match target {
                Some(target) => {
                    log::debug!(
                        "chapter {chapter_index}: scene {scene_id} -> {target} (choice {option})"
                    );
                    (
                        NavState::InScene {
                            chapter: chapter_index,
                            scene: target,
                        },
                        vec![],
                    )
                }
                None => (state, vec![]),
            }
        }
        _ => (state, vec![]),
    }
}

/// Per-tick terminal check: once the active scene is the chapter's
/// last-authored scene and offers no choices, revert to the menu.
///
/// The loop driver renders before ticking, so a terminal scene is displayed
/// for one frame and the revert lands on the following tick.
pub fn tick(state: NavState, story: &Story) -> NavState {
    if let NavState::InScene { chapter, scene } = state
        && story
            .chapter(chapter)
            .is_some_and(|c| c.is_past_end(scene))
    {
        log::debug!("chapter {chapter} finished at scene {scene}, back to menu");
        return NavState::Menu;
    }
    state
}

#[cfg(test)]
mod tests;
