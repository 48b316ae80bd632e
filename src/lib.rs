//! # vignette
//!
//! A linear-branching visual novel engine: a story is a sequence of chapters,
//! each an ordered set of scenes (dialogue, background, image, up to two
//! labeled choices); discrete key-presses pick a choice and jump to another
//! scene by id. The engine owns the story model, text word-wrap, navigation
//! state machine and presentation planning; windowing, image decoding and
//! audio mixing stay behind the collaborator traits in [`contracts`].
//!
//! ## Quick start
//!
//! ```rust
//! use vignette::{InputEvent, RenderPlan, Session, content};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let story = content::from_json(
//!     r#"{
//!         "chapters": [{
//!             "title": "Opening",
//!             "scenes": [
//!                 { "id": 0, "dialogue": "Hello.", "choices": [{ "label": "Bye", "target": 1 }] },
//!                 { "id": 1, "dialogue": "The end." }
//!             ]
//!         }]
//!     }"#,
//! )?;
//!
//! let mut session = Session::new(story)?;
//! session.handle(InputEvent::SelectChapter(0));
//!
//! match session.plan() {
//!     RenderPlan::Scene { text, .. } => assert_eq!(text, "Hello.\n\n1. Bye"),
//!     _ => unreachable!(),
//! }
//!
//! session.handle(InputEvent::Choose(0));
//! session.tick(); // past-end scene reached: the next tick reverts to the menu
//! assert!(session.state().is_menu());
//! # Ok(())
//! # }
//! ```
//!
//! Frontends either drive a [`Session`] directly (like the bundled terminal
//! player) or hand their [`contracts::Surface`] and [`contracts::Audio`]
//! implementations to a [`player::Player`] for the fixed-interval loop.

pub mod cli;
pub mod content;
pub mod contracts;
pub mod layout;
pub mod player;
pub mod present;
pub mod resolve;
pub mod runtime;
pub mod session;
pub mod types;

pub use content::ContentError;
pub use contracts::{AssetError, Audio, Rect, Surface};
pub use layout::wrap_text;
pub use player::Player;
pub use present::Presenter;
pub use resolve::{CachedResolver, DirResolver, Resolver};
pub use runtime::Effect;
pub use session::Session;
pub use types::{
    Chapter, Choice, InputEvent, NavState, RenderPlan, Rgba, Scene, SceneId, Story, StoryError,
};
