use crate::Params;
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub deflection_scale: f32,
    pub ai_dead_zone: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            deflection_scale: Params::DEFLECTION_SCALE,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning for an arena of the given size (read once from the canvas)
    pub fn with_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            ..Self::default()
        }
    }

    /// Left edge of the player's paddle
    pub fn player_x(&self) -> f32 {
        self.paddle_margin
    }

    /// Left edge of the opponent's paddle
    pub fn ai_x(&self) -> f32 {
        self.arena_width - self.paddle_width - self.paddle_margin
    }

    /// Clamp paddle top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.min(self.arena_height - self.paddle_height).max(0.0)
    }

    /// Vertically centred paddle
    pub fn paddle_start_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Top-left corner of a centred ball
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0 - self.ball_size / 2.0,
            self.arena_height / 2.0 - self.ball_size / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.player_x(), 20.0, "Left paddle X position");
        assert_eq!(config.ai_x(), 765.0, "Right paddle X position");
    }

    #[rstest]
    #[case(-1000.0, 0.0)]
    #[case(0.0, 0.0)]
    #[case(200.0, 200.0)]
    #[case(420.0, 420.0)]
    #[case(421.0, 420.0)]
    #[case(f32::MAX, 420.0)]
    fn test_config_clamp_paddle_y(#[case] y: f32, #[case] expected: f32) {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(y), expected);
    }

    #[test]
    fn test_config_with_arena_keeps_tuning() {
        let config = Config::with_arena(600.0, 400.0);
        assert_eq!(config.arena_width, 600.0);
        assert_eq!(config.arena_height, 400.0);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
        assert_eq!(config.ai_x(), 565.0);
        assert_eq!(config.paddle_start_y(), 160.0);
    }

    #[test]
    fn test_ball_spawn_is_centred() {
        let config = Config::new();
        let spawn = config.ball_spawn();
        assert_eq!(spawn, Vec2::new(392.5, 242.5));
        assert_eq!(spawn.x + config.ball_size / 2.0, config.arena_width / 2.0);
    }
}
