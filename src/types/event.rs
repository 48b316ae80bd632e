//! Discrete input events fed to the navigation runtime

use serde::{Deserialize, Serialize};

/// External events the frontend delivers once per key-press or window signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window close requested; ends the loop.
    Quit,
    /// Number key pressed while on the menu (0-based chapter index).
    SelectChapter(usize),
    /// Number key pressed inside a scene (0-based choice index).
    Choose(usize),
}
