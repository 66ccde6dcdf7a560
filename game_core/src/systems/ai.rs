use hecs::World;

use crate::{Ball, Paddle, PaddleIntent, Side};

/// Steer the paddle on `side` towards the ball.
///
/// Compares vertical centres only: no prediction, no dead zone, no reaction
/// delay. The paddle moves at full speed until the centres line up.
pub fn drive_ai_paddle(world: &mut World, side: Side) {
    let Some(ball_y) = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.center().y)
    else {
        return;
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == side {
            intent.dir = calculate_ai_input(ball_y, paddle.center().y);
        }
    }
}

/// Direction that brings the paddle centre towards the ball centre
pub fn calculate_ai_input(ball_y: f32, paddle_y: f32) -> i8 {
    if ball_y < paddle_y {
        -1
    } else if ball_y > paddle_y {
        1
    } else {
        0
    }
}
