//! Session facade - a validated story plus its navigation cursor
//!
//! The embedding API for frontends: construct once, feed events, tick, ask
//! for the render plan.

use crate::present;
use crate::runtime::{self, Effect};
use crate::types::{InputEvent, NavState, RenderPlan, Story, StoryError};

#[derive(Debug)]
pub struct Session {
    story: Story,
    state: NavState,
}

impl Session {
    /// Validate the story and start at the chapter menu.
    pub fn new(story: Story) -> Result<Self, StoryError> {
        story.validate()?;
        Ok(Self {
            story,
            state: NavState::Menu,
        })
    }

    /// Feed one input event; returns the side effects the frontend must run.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Effect> {
        let (state, effects) = runtime::apply(self.state, &self.story, event);
        self.state = state;
        effects
    }

    /// End-of-frame terminal check; reverts to the menu after a chapter's
    /// past-end scene has been displayed.
    pub fn tick(&mut self) {
        self.state = runtime::tick(self.state, &self.story);
    }

    /// Render plan for the current state.
    pub fn plan(&self) -> RenderPlan {
        present::plan(&self.story, self.state)
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn story(&self) -> &Story {
        &self.story
    }
}
