use glam::Vec2;

use crate::{Config, GameRng};

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Player, // left, mouse controlled
    Ai,     // right, opponent controller
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// Paddle component - fixed x per side, y is the top edge
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Left edge of this paddle
    pub fn x(&self, config: &Config) -> f32 {
        match self.side {
            Side::Player => config.player_x(),
            Side::Ai => config.ai_x(),
        }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Ball component - `pos` is the top-left corner of its bounding square
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn center(&self, config: &Config) -> Vec2 {
        self.pos + Vec2::splat(config.ball_size / 2.0)
    }

    /// Reset ball to center with a random serve
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = config.ball_spawn();

        let dir_x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let dir_y: f32 = rng.0.gen_range(-1.0..1.0);
        self.vel = Vec2::new(config.ball_speed * dir_x, config.ball_speed * dir_y);
    }
}
