//! Navigation state - the cursor into the story graph

use serde::{Deserialize, Serialize};

use crate::types::story::SceneId;

/// Where the player currently is.
///
/// Starts in [`NavState::Menu`]; entering a chapter moves to
/// [`NavState::InScene`]; reaching a chapter's past-end scene reverts to the
/// menu. These are the only cursor fields mutated after the story is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NavState {
    /// Chapter-selection screen, no active chapter.
    #[default]
    Menu,
    /// Inside a chapter, showing one scene.
    InScene { chapter: usize, scene: SceneId },
}

impl NavState {
    pub fn new() -> Self {
        Self::Menu
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, NavState::Menu)
    }
}
