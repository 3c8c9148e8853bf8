pub mod audio;
pub mod components;
pub mod config;
pub mod frame_loop;
pub mod fsm;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use audio::*;
pub use components::*;
pub use config::*;
pub use frame_loop::*;
pub use fsm::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one frame of ball physics, returning the side that scored (if any)
///
/// Order is fixed: move, walls, paddles, scoring. Collisions are not
/// re-evaluated after resolution within the same frame.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Check collisions (walls, then paddles)
    check_collisions(world, config, events);

    // 3. Check scoring (ball exited arena)
    check_scoring(world, config, score, events, rng)
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
