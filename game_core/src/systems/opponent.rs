use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Move the opponent paddle one fixed step toward the ball
///
/// Tracks the ball every frame, whichever way it is travelling, and
/// holds still inside the dead-zone so the paddle does not jitter.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_center = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.center(config).y);

    let Some(ball_center) = ball_center else {
        return; // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Ai {
            continue;
        }
        let dir = ai_direction(paddle.center_y(config), ball_center, config.ai_dead_zone);
        paddle.y = config.clamp_paddle_y(paddle.y + dir as f32 * config.paddle_speed);
    }
}

/// -1 = up, 0 = hold, 1 = down
pub fn ai_direction(paddle_center: f32, ball_center: f32, dead_zone: f32) -> i8 {
    if paddle_center < ball_center - dead_zone {
        1
    } else if paddle_center > ball_center + dead_zone {
        -1
    } else {
        0
    }
}
