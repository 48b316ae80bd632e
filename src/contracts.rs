//! Collaborator contracts - the surfaces the engine draws and plays through
//!
//! The engine never implements a rendering or audio backend (that is a
//! frontend concern); it only needs these capabilities. Implementations wrap
//! whatever multimedia library the frontend uses, or nothing at all for the
//! terminal player and for tests.

use std::path::{Path, PathBuf};

use crate::types::{InputEvent, Rgba};

/// An axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Failure to load an external asset (image or audio file).
///
/// Always recovered locally: the caller logs and skips the draw or the track.
#[derive(Debug, thiserror::Error)]
#[error("failed to load asset {path:?}: {reason}")]
pub struct AssetError {
    pub path: PathBuf,
    pub reason: String,
}

impl AssetError {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// A fixed-size drawable surface with a preloaded font, plus the window's
/// event queue.
pub trait Surface {
    /// Drawable size in pixels, `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Clear the whole surface to a color.
    fn clear(&mut self, color: Rgba);

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Draw the image at `path` scaled to fill the surface's width or height,
    /// preserving aspect ratio and centered on the other axis.
    fn draw_image_fit(&mut self, path: &Path) -> Result<(), AssetError>;

    /// Rendered size of `text` in the surface's font, `(width, height)`.
    fn measure(&self, text: &str) -> (u32, u32);

    /// Draw one line of text at the given position.
    fn draw_text_line(&mut self, text: &str, x: i32, y: i32);

    /// Flip the composed frame onto the screen.
    fn present(&mut self);

    /// Drain all pending discrete input events, in arrival order.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Looping music playback. At most one track is active at a time; the player
/// enforces this by stopping and releasing the old handle before loading a
/// new one.
pub trait Audio {
    /// Opaque handle to a loaded, loopable track.
    type Track;

    fn load_looping(&mut self, path: &Path) -> Result<Self::Track, AssetError>;

    fn play(&mut self, track: &Self::Track);

    /// Stop playback and release the track. Consumes the handle.
    fn stop(&mut self, track: Self::Track);
}
