//! Scene drawing
//!
//! The scene is fully cleared and redrawn every frame; nothing is kept
//! between frames. Backends only need a handful of 2D primitives.

use glam::Vec2;

use crate::{Params, Session, Side};

pub const PLAYER_WINS: &str = "You Win!";
pub const AI_WINS: &str = "AI Wins!";
pub const RESTART_PROMPT: &str = "Click Play to restart";

/// 2D drawing primitives, in arena units
pub trait DrawSurface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str, alpha: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], color: &str);
    /// Text horizontally centred on `at`
    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: &str);
}

/// Draw the current session state
pub fn draw_frame<D: DrawSurface + ?Sized>(session: &Session, surface: &mut D) {
    let config = session.config();
    let arena = Vec2::new(config.arena_width, config.arena_height);
    surface.clear(arena.x, arena.y);

    // Paddles
    let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);
    for side in [Side::Player, Side::Ai] {
        let paddle = session.paddle(side);
        let pos = Vec2::new(paddle.x(config), paddle.y);
        surface.fill_rect(pos, paddle_size, Params::FOREGROUND, 1.0);
    }

    // Ball
    let ball = session.ball();
    surface.fill_circle(ball.center(config), config.ball_size / 2.0, Params::FOREGROUND);

    // Center line
    surface.dashed_line(
        Vec2::new(arena.x / 2.0, 0.0),
        Vec2::new(arena.x / 2.0, arena.y),
        Params::CENTER_LINE_DASH,
        Params::CENTER_LINE,
    );

    if let Some(winner) = session.winner() {
        draw_win_overlay(winner, arena, surface);
    }
}

fn draw_win_overlay<D: DrawSurface + ?Sized>(winner: Side, arena: Vec2, surface: &mut D) {
    surface.fill_rect(Vec2::ZERO, arena, Params::OVERLAY, Params::OVERLAY_ALPHA);

    let headline = match winner {
        Side::Player => PLAYER_WINS,
        Side::Ai => AI_WINS,
    };
    let center = arena / 2.0;
    surface.fill_text(headline, center, Params::HEADLINE_FONT, Params::FOREGROUND);
    surface.fill_text(
        RESTART_PROMPT,
        center + Vec2::new(0.0, Params::PROMPT_OFFSET),
        Params::PROMPT_FONT,
        Params::FOREGROUND,
    );
}
