/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between paddle and side wall
    pub const PADDLE_SPEED: f32 = 6.0; // units per frame (opponent only)

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED: f32 = 6.0; // units per frame
    pub const DEFLECTION_SCALE: f32 = 0.2; // vy gained per unit of hit offset

    // Opponent
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Theme
    pub const FOREGROUND: &'static str = "#fff";
    pub const CENTER_LINE: &'static str = "#444";
    pub const CENTER_LINE_DASH: [f32; 2] = [10.0, 10.0];
    pub const OVERLAY: &'static str = "#000";
    pub const OVERLAY_ALPHA: f32 = 0.8;
    pub const HEADLINE_FONT: &'static str = "48px Segoe UI, Arial";
    pub const PROMPT_FONT: &'static str = "28px Segoe UI, Arial";
    pub const PROMPT_OFFSET: f32 = 50.0;
}
