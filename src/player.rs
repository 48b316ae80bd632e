//! Loop driver - fixed-interval polling loop over the collaborator traits
//!
//! Single-threaded and cooperative: each tick drains input, renders once,
//! runs the terminal check, then sleeps. Wall-clock time appears only here,
//! and only to cap the frame rate.

use std::time::Duration;

use crate::contracts::{Audio, Surface};
use crate::present::Presenter;
use crate::resolve::Resolver;
use crate::runtime::Effect;
use crate::session::Session;
use crate::types::InputEvent;

/// Ten frames a second is plenty for key-driven scenes.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

pub struct Player<S, A, R>
where
    S: Surface,
    A: Audio,
    R: Resolver,
{
    surface: S,
    audio: A,
    resolver: R,
    session: Session,
    presenter: Presenter,
    frame_interval: Duration,
    /// The one active theme track. Replacing it stops and releases the old
    /// handle first, so two tracks are never live at once.
    current_track: Option<A::Track>,
}

impl<S, A, R> Player<S, A, R>
where
    S: Surface,
    A: Audio,
    R: Resolver,
{
    pub fn new(surface: S, audio: A, resolver: R, session: Session) -> Self {
        Self {
            surface,
            audio,
            resolver,
            session,
            presenter: Presenter::default(),
            frame_interval: FRAME_INTERVAL,
            current_track: None,
        }
    }

    /// Override the end-of-tick sleep. Tests use zero.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Give the surface back, e.g. to inspect what a fake recorded.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Run until a quit event arrives. Each tick: drain events in arrival
    /// order, draw the frame, apply the terminal check, sleep.
    pub fn run(&mut self) {
        loop {
            for event in self.surface.poll_events() {
                if event == InputEvent::Quit {
                    log::info!("quit requested, leaving the loop");
                    self.stop_music();
                    return;
                }
                for effect in self.session.handle(event) {
                    self.run_effect(effect);
                }
            }

            let plan = self.session.plan();
            self.presenter.draw(&mut self.surface, &self.resolver, &plan);

            self.session.tick();

            if !self.frame_interval.is_zero() {
                std::thread::sleep(self.frame_interval);
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PlayMusic(name) => self.play_music(&name),
        }
    }

    /// Stop old, load new, play new. If the new track fails to load the old
    /// one is already gone and nothing plays; the failure is logged and the
    /// game continues.
    fn play_music(&mut self, name: &str) {
        self.stop_music();

        let Some(path) = self.resolver.resolve_music(name) else {
            log::warn!("no file found for theme music '{name}'");
            return;
        };

        match self.audio.load_looping(&path) {
            Ok(track) => {
                self.audio.play(&track);
                self.current_track = Some(track);
            }
            Err(err) => log::warn!("skipping theme music: {err}"),
        }
    }

    fn stop_music(&mut self) {
        if let Some(track) = self.current_track.take() {
            self.audio.stop(track);
        }
    }
}
