//! Terminal player mode
//!
//! A line-based frontend: scenes and the chapter menu print to stdout,
//! wrapped at a fixed column budget, and number keys arrive as stdin lines.
//! Blocking reads replace the fixed-interval poll loop here; the poll-driven
//! [`crate::player::Player`] is for windowed frontends.

use std::io::{self, Write};

use crate::layout::wrap_text;
use crate::runtime::Effect;
use crate::session::Session;
use crate::types::{InputEvent, RenderPlan, Story};

/// Column budget for wrapped text; measure is one unit per character.
const TEXT_COLUMNS: u32 = 72;

fn columns(s: &str) -> u32 {
    s.chars().count() as u32
}

/// Run the terminal player until the story is quit.
pub fn run_play(story: Story, debug: bool) -> anyhow::Result<()> {
    let mut session = Session::new(story)?;

    println!("=== vignette player ===");
    println!();
    println!("Controls:");
    println!("  1-9:   select a chapter or choice");
    println!("  Enter: continue");
    println!("  q:     quit");
    println!();

    loop {
        show_plan(&session.plan());

        if debug {
            println!("[debug] state={:?}", session.state());
            println!();
        }

        let Some(input) = read_input()? else {
            // stdin closed, treat as quit
            break;
        };

        if input == "q" {
            println!("Goodbye!");
            break;
        }

        if let Ok(number) = input.parse::<usize>()
            && number >= 1
        {
            let event = if session.state().is_menu() {
                InputEvent::SelectChapter(number - 1)
            } else {
                InputEvent::Choose(number - 1)
            };
            for effect in session.handle(event) {
                match effect {
                    Effect::PlayMusic(name) => println!("(theme music: {name})"),
                }
            }
        }
        // Any other input, including a bare Enter, just advances the tick.

        session.tick();
    }

    Ok(())
}

fn show_plan(plan: &RenderPlan) {
    match plan {
        RenderPlan::Menu {
            heading,
            entries,
            instructions,
        } => {
            show_block(heading);
            println!();
            for entry in entries {
                show_block(entry);
            }
            println!();
            show_block(instructions);
        }
        RenderPlan::Scene { text, image, .. } => {
            if let Some(name) = image {
                println!("[image: {name}]");
            }
            println!("----------------------------------------");
            show_block(text);
            println!("----------------------------------------");
        }
    }
}

fn show_block(text: &str) {
    for line in wrap_text(text, TEXT_COLUMNS, columns) {
        println!("{line}");
    }
}

/// Read one trimmed input line; `None` on end of input.
fn read_input() -> io::Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
