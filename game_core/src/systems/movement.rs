use hecs::World;

use crate::{Ball, Events, GameMap, Paddle, PaddleIntent, Time};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, map: &GameMap) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir < 0 {
            paddle.move_up(time.dt);
        } else if intent.dir > 0 {
            paddle.move_down(time.dt, map);
        }
    }
}

/// Move ball based on velocity, bouncing off the top and bottom walls
pub fn move_ball(world: &mut World, time: &Time, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.update(time.dt, map) {
            events.ball_hit_wall = true;
        }
    }
}
