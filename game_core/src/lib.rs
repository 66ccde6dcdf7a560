pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game;
pub mod high_score;
pub mod map;
pub mod menu;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use game::*;
pub use high_score::*;
pub use map::*;
pub use menu::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance one fixed physics step of a running match
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    map: &GameMap,
    config: &Config,
    mode: GameMode,
    controls: &Controls,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of step
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_controls(world, controls, mode);

    // 2. AI picks a direction for the right paddle
    if mode == GameMode::VsAi {
        drive_ai_paddle(world, Side::Right);
    }

    // 3. Move paddles based on intents
    move_paddles(world, time, map);

    // 4. Move ball (bounces off top/bottom walls)
    move_ball(world, time, map, events);

    // 5. Check collisions (ball vs paddles)
    check_collisions(world, events);

    // 6. Check scoring (ball exited arena)
    check_scoring(world, map, config, score, events);
}

/// Helper to create a paddle entity at its spawn point
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_spawn(side),
        glam::Vec2::new(config.paddle_width, config.paddle_height),
        config.paddle_speed,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    config: &Config,
    pos: glam::Vec2,
    vel: glam::Vec2,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_radius),))
}
