use crate::{Ball, Config, Events, GameRng, Paddle, Score, Side};
use hecs::World;

/// Check if ball left the arena; credits the scorer and re-serves
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let scorer = world
        .query::<&Ball>()
        .iter()
        .find_map(|(_e, ball)| exited_side(ball, config).map(Side::opponent));

    if let Some(side) = scorer {
        score.increment(side);
        events.scored = Some(side);
        log::debug!("{:?} scored, {}-{}", side, score.player, score.ai);

        reset_positions(world, config, rng);
    }

    scorer
}

/// Which side's boundary the ball has fully crossed, if any
fn exited_side(ball: &Ball, config: &Config) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Player)
    } else if ball.pos.x + config.ball_size > config.arena_width {
        Some(Side::Ai)
    } else {
        None
    }
}

/// Put paddles and ball back to the start layout with a fresh serve
pub fn reset_positions(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.paddle_start_y();
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, events, rng)
    }

    #[test]
    fn test_ai_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 240.0), Vec2::new(-6.0, 0.0));

        let scorer = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(scorer, Some(Side::Ai));
        assert_eq!(score, Score { player: 0, ai: 1 });
        assert_eq!(events.scored, Some(Side::Ai));
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(785.5, 240.0), Vec2::new(6.0, 0.0));

        let scorer = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(scorer, Some(Side::Player));
        assert_eq!(score, Score { player: 1, ai: 0 });
        assert_eq!(events.scored, Some(Side::Player));
    }

    #[test]
    fn test_ball_on_boundary_is_still_in_play() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(0.0, 240.0), Vec2::new(-6.0, 0.0));
        create_ball(&mut world, Vec2::new(785.0, 240.0), Vec2::new(6.0, 0.0));

        let scorer = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(scorer, None);
        assert_eq!(score, Score::new());
        assert_eq!(events.scored, None);
    }

    #[test]
    fn test_positions_reset_after_scoring() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let player = create_paddle(&mut world, Side::Player, 0.0);
        let ai = create_paddle(&mut world, Side::Ai, 420.0);
        let ball = create_ball(&mut world, Vec2::new(-20.0, 12.0), Vec2::new(-6.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(world.get::<&Paddle>(player).unwrap().y, config.paddle_start_y());
        assert_eq!(world.get::<&Paddle>(ai).unwrap().y, config.paddle_start_y());
        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, config.ball_spawn(), "Ball should reset to center");
        assert_eq!(ball.vel.x.abs(), config.ball_speed, "Ball should be served again");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let ball = create_ball(&mut world, Vec2::ZERO, Vec2::ZERO);

        for _ in 0..3 {
            world.get::<&mut Ball>(ball).unwrap().pos.x = config.arena_width;
            events.clear();
            check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);
        }

        assert_eq!(score.player, 3, "Scores should accumulate");
        assert_eq!(score.ai, 0);
    }
}
