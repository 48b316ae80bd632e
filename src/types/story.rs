//! Story model - immutable definition of choices, scenes and chapters

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scene identifier, unique within its chapter only.
pub type SceneId = u32;

/// An RGBA color used for scene backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

/// One option the player can pick, jumping to another scene in the same chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Display label, e.g. "Go left".
    pub label: String,
    /// Target scene id, resolved within the current chapter only.
    pub target: SceneId,
}

impl Choice {
    pub fn new(label: impl Into<String>, target: SceneId) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }
}

/// One displayable unit of dialogue, visuals and up to two choices.
///
/// A scene with no choices is terminal for its chapter. Games author at most
/// two choices per scene by convention, though the model permits more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub dialogue: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub background: Rgba,
    /// Logical image name, resolved to a file by a [`crate::resolve::Resolver`].
    #[serde(default)]
    pub image: Option<String>,
}

impl Scene {
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }
}

/// An ordered collection of scenes sharing a theme music track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub scenes: Vec<Scene>,
    /// Logical music name, resolved like scene images.
    #[serde(default)]
    pub theme_music: Option<String>,
}

impl Chapter {
    /// Resolve a scene id within this chapter.
    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// Id of the first-authored scene. Not necessarily 0: entry into a chapter
    /// follows authoring order, never a hard-coded id.
    pub fn first_scene_id(&self) -> Option<SceneId> {
        self.scenes.first().map(|s| s.id)
    }

    /// A scene is past-end when it is the last-authored scene of the chapter
    /// and has no choices. Reaching it ends the chapter's traversal.
    pub fn is_past_end(&self, id: SceneId) -> bool {
        match self.scenes.last() {
            Some(last) => last.id == id && last.is_terminal(),
            None => false,
        }
    }
}

/// The top-level immutable sequence of chapters, fully constructed before
/// any navigation occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub chapters: Vec<Chapter>,
}

impl Story {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    /// Validate the story structure, rejecting the whole story on the first
    /// authoring error. This is the load-time correctness gate: navigation
    /// assumes every choice target resolves and never re-checks.
    ///
    /// Checks per chapter: at least one scene, scene ids unique, and every
    /// choice target references a scene id in the same chapter.
    pub fn validate(&self) -> Result<(), StoryError> {
        if self.chapters.is_empty() {
            return Err(StoryError::NoChapters);
        }

        for (index, chapter) in self.chapters.iter().enumerate() {
            if chapter.scenes.is_empty() {
                return Err(StoryError::EmptyChapter {
                    chapter: index,
                    title: chapter.title.clone(),
                });
            }

            let mut seen = std::collections::HashSet::new();
            for scene in &chapter.scenes {
                if !seen.insert(scene.id) {
                    return Err(StoryError::DuplicateSceneId {
                        chapter: index,
                        id: scene.id,
                    });
                }
            }

            for scene in &chapter.scenes {
                for choice in &scene.choices {
                    if !seen.contains(&choice.target) {
                        return Err(StoryError::UnresolvedTarget {
                            chapter: index,
                            scene: scene.id,
                            target: choice.target,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Authoring errors detected at load time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoryError {
    #[error("story has no chapters")]
    NoChapters,

    #[error("chapter {chapter} ('{title}') has no scenes")]
    EmptyChapter { chapter: usize, title: String },

    #[error("duplicate scene id {id} in chapter {chapter}")]
    DuplicateSceneId { chapter: usize, id: SceneId },

    #[error("choice in chapter {chapter}, scene {scene} targets unknown scene {target}")]
    UnresolvedTarget {
        chapter: usize,
        scene: SceneId,
        target: SceneId,
    },
}
