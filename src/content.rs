//! Content loading - stories authored as JSON, validated before use
//!
//! Content lives outside the engine so it can be authored and tested
//! independently. A story that fails validation is rejected whole: navigation
//! never sees malformed data.

use std::path::Path;

use crate::types::{Story, StoryError};

/// Errors while turning authored content into a usable [`Story`].
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read story file: {0}")]
    Io(#[from] std::io::Error),

    #[error("story is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("story failed validation: {0}")]
    Invalid(#[from] StoryError),
}

/// Deserialize and validate a story from JSON text.
pub fn from_json(json: &str) -> Result<Story, ContentError> {
    let story: Story = serde_json::from_str(json)?;
    story.validate()?;
    Ok(story)
}

/// Read, deserialize and validate a story file.
pub fn from_file(path: impl AsRef<Path>) -> Result<Story, ContentError> {
    let json = std::fs::read_to_string(path)?;
    from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NavState;

    const MINIMAL: &str = r#"{
        "chapters": [
            {
                "title": "Opening",
                "theme_music": "opening_theme",
                "scenes": [
                    {
                        "id": 0,
                        "dialogue": "A door stands before you.",
                        "choices": [
                            { "label": "Open it", "target": 1 },
                            { "label": "Walk away", "target": 2 }
                        ],
                        "background": { "r": 0, "g": 0, "b": 0, "a": 255 },
                        "image": "door"
                    },
                    { "id": 1, "dialogue": "It creaks open." },
                    { "id": 2, "dialogue": "You never find out." }
                ]
            }
        ]
    }"#;

    #[test]
    fn loads_a_minimal_story() {
        let story = from_json(MINIMAL).unwrap();
        assert_eq!(story.chapters.len(), 1);
        assert_eq!(story.chapters[0].title, "Opening");
        assert_eq!(story.chapters[0].first_scene_id(), Some(0));
        assert_eq!(story.chapters[0].scenes[0].choices.len(), 2);
    }

    #[test]
    fn optional_fields_default() {
        let story = from_json(MINIMAL).unwrap();
        let ending = story.chapters[0].scene(1).unwrap();
        assert!(ending.is_terminal());
        assert_eq!(ending.image, None);
        assert_eq!(ending.background, crate::types::Rgba::BLACK);
    }

    #[test]
    fn rejects_syntactically_broken_json() {
        assert!(matches!(
            from_json("{ not json"),
            Err(ContentError::Json(_))
        ));
    }

    #[test]
    fn rejects_a_story_with_a_dangling_target() {
        let json = r#"{
            "chapters": [{
                "title": "Broken",
                "scenes": [
                    { "id": 0, "dialogue": "x", "choices": [{ "label": "go", "target": 42 }] }
                ]
            }]
        }"#;
        assert!(matches!(
            from_json(json),
            Err(ContentError::Invalid(StoryError::UnresolvedTarget {
                target: 42,
                ..
            }))
        ));
    }

    #[test]
    fn loaded_story_is_navigable() {
        let story = from_json(MINIMAL).unwrap();
        let (state, _) = crate::runtime::apply(
            NavState::Menu,
            &story,
            crate::types::InputEvent::SelectChapter(0),
        );
        assert_eq!(
            state,
            NavState::InScene {
                chapter: 0,
                scene: 0
            }
        );
    }
}
