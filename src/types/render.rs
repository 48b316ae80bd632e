//! Render plan - what the presentation driver asks a frontend to draw

use serde::{Deserialize, Serialize};

use crate::types::story::Rgba;

/// One frame's worth of drawing, derived purely from story + navigation state.
///
/// Frontends consume this; the engine never talks to a window directly when
/// composing it, so plans can be asserted on in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderPlan {
    /// Chapter-selection screen.
    Menu {
        heading: String,
        /// One entry per chapter, already enumerated: `"<n>. <title>"`.
        entries: Vec<String>,
        instructions: String,
    },
    /// An active scene.
    Scene {
        background: Rgba,
        /// Logical image name, if the scene has one.
        image: Option<String>,
        /// Composed text block: dialogue, a blank line, then one enumerated
        /// line per choice. Word-wrapping happens at draw time against the
        /// frontend's text measure.
        text: String,
    },
}
