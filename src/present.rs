//! Presentation driver - turning navigation state into drawn frames
//!
//! Split in two stages: [`plan`] composes a pure, testable [`RenderPlan`]
//! from the story and cursor; [`Presenter::draw`] executes a plan against a
//! [`Surface`], wrapping text to the box width and skipping assets that fail
//! to load.

use crate::contracts::{Rect, Surface};
use crate::layout::wrap_text;
use crate::resolve::Resolver;
use crate::types::{NavState, RenderPlan, Rgba, Story};

/// Compose the render plan for the current navigation state.
pub fn plan(story: &Story, state: NavState) -> RenderPlan {
    match state {
        NavState::Menu => menu_plan(story),
        NavState::InScene { chapter, scene } => {
            let Some(active) = story.chapter(chapter).and_then(|c| c.scene(scene)) else {
                // Unreachable once the story validated; degrade to the menu.
                log::warn!("no scene {scene} in chapter {chapter}, showing menu");
                return menu_plan(story);
            };

            let mut text = active.dialogue.clone();
            if !active.choices.is_empty() {
                text.push('\n');
                for (index, choice) in active.choices.iter().enumerate() {
                    text.push('\n');
                    text.push_str(&format!("{}. {}", index + 1, choice.label));
                }
            }

            RenderPlan::Scene {
                background: active.background,
                image: active.image.clone(),
                text,
            }
        }
    }
}

fn menu_plan(story: &Story) -> RenderPlan {
    RenderPlan::Menu {
        heading: "Welcome! Select a chapter:".to_string(),
        entries: story
            .chapters
            .iter()
            .enumerate()
            .map(|(index, chapter)| format!("{}. {}", index + 1, chapter.title))
            .collect(),
        instructions: "Press the number key matching your choice.".to_string(),
    }
}

/// Fixed text-box geometry and drawing orchestration.
///
/// Owns no window handles: every draw call goes through the [`Surface`] it is
/// handed, so one presenter serves any backend.
pub struct Presenter {
    pub text_box: Rect,
    pub padding: u32,
    pub line_gap: u32,
}

/// Translucent black behind the dialogue text.
const TEXT_BOX_FILL: Rgba = Rgba::new(0, 0, 0, 200);
const MENU_MARGIN: i32 = 100;

impl Default for Presenter {
    fn default() -> Self {
        Self {
            text_box: Rect::new(50, 400, 700, 180),
            padding: 10,
            line_gap: 10,
        }
    }
}

impl Presenter {
    /// Draw one frame. Asset failures are logged and skipped; the frame is
    /// always presented.
    pub fn draw<S: Surface>(&self, surface: &mut S, resolver: &impl Resolver, plan: &RenderPlan) {
        match plan {
            RenderPlan::Menu {
                heading,
                entries,
                instructions,
            } => {
                surface.clear(Rgba::BLACK);

                let width = surface.size().0.saturating_sub(2 * MENU_MARGIN as u32);
                let mut y = 150;
                y = self.draw_text_block(surface, heading, MENU_MARGIN, y, width);
                y += self.line_gap as i32;
                for entry in entries {
                    y = self.draw_text_block(surface, entry, MENU_MARGIN, y, width);
                }
                y += self.line_gap as i32;
                self.draw_text_block(surface, instructions, MENU_MARGIN, y, width);
            }
            RenderPlan::Scene {
                background,
                image,
                text,
            } => {
                surface.clear(*background);

                if let Some(name) = image {
                    match resolver.resolve_image(name) {
                        Some(path) => {
                            if let Err(err) = surface.draw_image_fit(&path) {
                                log::warn!("skipping scene image: {err}");
                            }
                        }
                        None => log::warn!("no file found for scene image '{name}'"),
                    }
                }

                surface.fill_rect(self.text_box, TEXT_BOX_FILL);
                self.draw_text_block(
                    surface,
                    text,
                    self.text_box.x + self.padding as i32,
                    self.text_box.y + self.padding as i32,
                    self.text_box.w.saturating_sub(2 * self.padding),
                );
            }
        }

        surface.present();
    }

    /// Wrap `text` to `width` and draw it line by line, each line advancing
    /// by its own measured height plus the fixed gap. Returns the y position
    /// after the block.
    fn draw_text_block<S: Surface>(
        &self,
        surface: &mut S,
        text: &str,
        x: i32,
        mut y: i32,
        width: u32,
    ) -> i32 {
        let lines = wrap_text(text, width, |s| surface.measure(s).0);
        for line in lines {
            let height = if line.is_empty() {
                // Blank separator lines still take vertical space.
                surface.measure(" ").1
            } else {
                let h = surface.measure(&line).1;
                surface.draw_text_line(&line, x, y);
                h
            };
            y += (height + self.line_gap) as i32;
        }
        y
    }
}
