//! Core data types for the engine
//!
//! Pure data, no behavior beyond accessors and validation: the story model,
//! the navigation cursor, input events and the render plan.

pub mod event;
pub mod render;
pub mod state;
pub mod story;

pub use event::InputEvent;
pub use render::RenderPlan;
pub use state::NavState;
pub use story::{Chapter, Choice, Rgba, Scene, SceneId, Story, StoryError};
