use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions: walls first, then paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    check_walls(world, config, events);
    check_paddles(world, config, events);
}

/// Bounce the ball off the top and bottom walls
pub fn check_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 {
            ball.pos.y = 0.0;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall += 1;
        }
        if ball.pos.y + config.ball_size >= config.arena_height {
            ball.pos.y = config.arena_height - config.ball_size;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall += 1;
        }
    }
}

/// Bounce the ball off either paddle, player's first
pub fn check_paddles(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding a borrow on the world
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if touches_paddle(ball, paddle, config) {
                bounce_off_paddle(ball, paddle, config);
                events.ball_hit_paddle += 1;
            }
        }
    }
}

/// Ball's inner edge has reached the paddle face and the vertical spans overlap
fn touches_paddle(ball: &Ball, paddle: &Paddle, config: &Config) -> bool {
    let paddle_x = paddle.x(config);
    let overlaps_y =
        ball.pos.y + config.ball_size > paddle.y && ball.pos.y < paddle.y + config.paddle_height;
    let reaches_x = match paddle.side {
        Side::Player => ball.pos.x <= paddle_x + config.paddle_width,
        Side::Ai => ball.pos.x + config.ball_size >= paddle_x,
    };
    reaches_x && overlaps_y
}

fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    let paddle_x = paddle.x(config);
    ball.pos.x = match paddle.side {
        Side::Player => paddle_x + config.paddle_width,
        Side::Ai => paddle_x - config.ball_size,
    };
    ball.vel.x = -ball.vel.x;

    // Off-centre hits steer the return angle
    let offset = ball.center(config).y - paddle.center_y(config);
    ball.vel.y += offset * config.deflection_scale;
}
