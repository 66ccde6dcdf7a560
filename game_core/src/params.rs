/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const WINDOW_WIDTH: f32 = 640.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 300.0; // pixels per second
    pub const PADDLE_MARGIN: f32 = 30.0; // gap between window edge and paddle

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_VELOCITY_X: f32 = -300.0; // first serve goes right after the opening reset
    pub const BALL_VELOCITY_Y: f32 = 300.0;

    // Match
    pub const TARGET_SCORE: u32 = 10; // first to 10 in vs-player mode
    pub const STARTING_LIVES: u32 = 3; // vs-AI mode only

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
