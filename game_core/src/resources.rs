use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn has_winner(&self, target: u32) -> Option<Side> {
        if self.left >= target {
            Some(Side::Left)
        } else if self.right >= target {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Scoreboard text, e.g. `3 : 1`
    pub fn text(&self) -> String {
        format!("{} : {}", self.left, self.right)
    }
}

/// Remaining misses before a vs-AI game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lives {
    pub remaining: u32,
}

impl Lives {
    pub fn new(remaining: u32) -> Self {
        Self { remaining }
    }

    pub fn lose_one(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    pub fn text(&self) -> String {
        format!("Lives: {}", self.remaining)
    }
}

/// Who drives the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    VsAi,
    VsPlayer,
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Human paddle input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: i8,  // -1 = up, 0 = stop, 1 = down
    pub right: i8, // ignored in vs-AI mode
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combine an up/down key pair into a direction; both held cancel out
    pub fn axis(up: bool, down: bool) -> i8 {
        match (up, down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }

    pub fn dir(&self, side: Side) -> i8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}
