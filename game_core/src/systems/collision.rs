use hecs::World;

use crate::{Aabb, Ball, Events, Paddle};

/// Check ball collisions with paddles.
///
/// Every overlapping paddle flips the horizontal velocity, whatever direction
/// the ball is travelling. A ball still overlapping a paddle on the next step
/// flips again.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle bounds first so the ball can be borrowed mutably
    let paddles: Vec<Aabb> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.bounds())
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if ball.bounds().intersects(paddle) {
                ball.bounce_x();
                events.ball_hit_paddle = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, Side};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left);
        // Paddle spans x 30..50, y 250..350
        let ball = create_ball(
            &mut world,
            &config,
            Vec2::new(45.0, 290.0),
            Vec2::new(-300.0, 300.0),
        );

        check_collisions(&mut world, &mut events);

        assert_eq!(world.get::<&Ball>(ball).unwrap().vel, Vec2::new(300.0, 300.0));
        assert!(events.ball_hit_paddle, "Should trigger ball_hit_paddle event");
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Right);
        // Paddle spans x 590..610
        let ball = create_ball(
            &mut world,
            &config,
            Vec2::new(575.0, 300.0),
            Vec2::new(300.0, -300.0),
        );

        check_collisions(&mut world, &mut events);

        assert_eq!(world.get::<&Ball>(ball).unwrap().vel.x, -300.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_apart() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);
        let ball = create_ball(
            &mut world,
            &config,
            config.ball_spawn(),
            config.ball_velocity(),
        );

        check_collisions(&mut world, &mut events);

        assert_eq!(world.get::<&Ball>(ball).unwrap().vel, config.ball_velocity());
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_edge_contact_is_not_a_hit() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left);
        // Ball's left edge sits exactly on the paddle's right edge (x = 50)
        create_ball(
            &mut world,
            &config,
            Vec2::new(50.0, 290.0),
            Vec2::new(-300.0, 0.0),
        );

        check_collisions(&mut world, &mut events);

        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_overlap_on_consecutive_steps_retriggers() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left);
        let ball = create_ball(
            &mut world,
            &config,
            Vec2::new(40.0, 290.0),
            Vec2::new(-300.0, 0.0),
        );

        check_collisions(&mut world, &mut events);
        assert_eq!(world.get::<&Ball>(ball).unwrap().vel.x, 300.0);

        // Still overlapping: no side check, so it flips back towards the paddle
        check_collisions(&mut world, &mut events);
        assert_eq!(world.get::<&Ball>(ball).unwrap().vel.x, -300.0);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left);

        check_collisions(&mut world, &mut events);

        assert!(!events.ball_hit_paddle);
    }
}
