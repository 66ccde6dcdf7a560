use hecs::World;

use crate::{Ball, Config, Events, GameMap, Score};

/// Check if ball left the arena (scoring)
///
/// Past the left edge the right player scores; past the right edge the left
/// player scores. Either way the ball is served again from the centre.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounds();
        if bounds.min.x < 0.0 {
            score.increment_right();
            events.right_scored = true;
            ball.reset(config.ball_spawn());
        } else if bounds.min.x > map.width {
            score.increment_left();
            events.left_scored = true;
            ball.reset(config.ball_spawn());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, GameMap, Score, Events) {
        let config = Config::new();
        let map = GameMap::new(&config);
        (World::new(), config, map, Score::new(), Events::new())
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, map, mut score, mut events) = setup_world();
        create_ball(
            &mut world,
            &config,
            Vec2::new(-0.1, 300.0),
            Vec2::new(-300.0, 300.0),
        );

        check_scoring(&mut world, &map, &config, &mut score, &mut events);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, map, mut score, mut events) = setup_world();
        create_ball(
            &mut world,
            &config,
            Vec2::new(map.width + 0.1, 300.0),
            Vec2::new(300.0, 300.0),
        );

        check_scoring(&mut world, &map, &config, &mut score, &mut events);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, map, mut score, mut events) = setup_world();
        let ball = create_ball(
            &mut world,
            &config,
            Vec2::new(-5.0, 120.0),
            Vec2::new(-300.0, 300.0),
        );

        check_scoring(&mut world, &map, &config, &mut score, &mut events);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, config.ball_spawn(), "Ball should reset to centre");
        assert_eq!(
            ball.vel,
            Vec2::new(300.0, 300.0),
            "Serve heads towards the player who scored"
        );
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, map, mut score, mut events) = setup_world();
        // Right edge of the ball past the window is still in play
        create_ball(
            &mut world,
            &config,
            Vec2::new(map.width - 5.0, 300.0),
            Vec2::new(300.0, 300.0),
        );

        check_scoring(&mut world, &map, &config, &mut score, &mut events);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert!(!events.left_scored && !events.right_scored, "No scoring events");
    }
}
