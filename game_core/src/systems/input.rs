use hecs::World;

use crate::{Controls, GameMode, Paddle, PaddleIntent, Side};

/// Copy the human controls onto paddle intents.
///
/// The right paddle only listens to the keyboard in vs-player mode; in vs-AI
/// mode its intent is owned by [`crate::systems::drive_ai_paddle`].
pub fn ingest_controls(world: &mut World, controls: &Controls, mode: GameMode) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        let human = match paddle.side {
            Side::Left => true,
            Side::Right => mode == GameMode::VsPlayer,
        };
        if human {
            intent.dir = controls.dir(paddle.side);
        }
    }
}
