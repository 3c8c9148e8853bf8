use hecs::World;

use crate::{Config, Paddle, Side};

/// Centre the player's paddle on the pointer, clamped to the arena
pub fn apply_pointer(world: &mut World, config: &Config, pointer_y: f32) {
    let y = config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = y;
        }
    }
}
