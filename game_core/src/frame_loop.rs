//! Frame-driven game loop
//!
//! One `tick` per display refresh. The loop asks its scheduler for the next
//! frame only while the session is Playing, so reaching Finished stops it.
//! `start` cancels any outstanding frame before running the first one, so
//! restarting never leaves two loops running.

use crate::{draw_frame, AudioCues, DrawSurface, Score, Session, SessionState};

/// Requests and cancels display-refresh callbacks
pub trait FrameScheduler {
    /// Ask for `tick` to be called on the next frame
    fn request_frame(&mut self);
    /// Drop any outstanding request
    fn cancel_frame(&mut self);
}

/// Score labels and the start/restart control outside the canvas
pub trait Hud {
    fn show_scores(&mut self, score: Score);
    /// `Some(label)` shows the control with that label, `None` hides it
    fn show_start_control(&mut self, label: Option<&str>);
}

pub struct GameLoop<D, S, A, H> {
    session: Session,
    surface: D,
    scheduler: S,
    audio: A,
    hud: H,
}

impl<D, S, A, H> GameLoop<D, S, A, H>
where
    D: DrawSurface,
    S: FrameScheduler,
    A: AudioCues,
    H: Hud,
{
    pub fn new(session: Session, surface: D, scheduler: S, audio: A, hud: H) -> Self {
        Self {
            session,
            surface,
            scheduler,
            audio,
            hud,
        }
    }

    /// Show the session as it stands without advancing it (page load)
    pub fn present(&mut self) {
        self.redraw();
        self.hud.show_scores(self.session.score());
        self.hud.show_start_control(self.session.start_label());
    }

    /// Start or restart: reset the session and run the first frame now
    pub fn start(&mut self) {
        self.scheduler.cancel_frame();

        if !self.session.start().success {
            return;
        }
        self.hud.show_scores(self.session.score());
        self.hud.show_start_control(self.session.start_label());

        self.tick();
    }

    /// One display refresh: update, draw, and reschedule while Playing
    pub fn tick(&mut self) -> SessionState {
        let state = self.session.frame(&mut self.audio);
        self.redraw();
        self.hud.show_scores(self.session.score());

        if state == SessionState::Playing {
            self.scheduler.request_frame();
        } else {
            self.hud.show_start_control(self.session.start_label());
        }
        state
    }

    pub fn pointer_moved(&mut self, y: f32) {
        self.session.pointer_moved(y);
    }

    pub fn redraw(&mut self) {
        draw_frame(&self.session, &mut self.surface);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }
}
