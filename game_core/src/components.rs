use glam::Vec2;

use crate::{Aabb, GameMap};

/// Which end of the court a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - a player's bat, moving only along Y
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // Top-left corner
    pub size: Vec2, // Fixed at spawn
    pub speed: f32, // Pixels per second
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
        }
    }

    /// Move towards the top of the window.
    ///
    /// Only moves while the paddle is below the top edge; the result is clamped
    /// so a long frame cannot carry it past the edge.
    pub fn move_up(&mut self, dt: f32) {
        if self.pos.y > 0.0 {
            self.pos.y = (self.pos.y - self.speed * dt).max(0.0);
        }
    }

    /// Move towards the bottom of the window, stopping at the map's bottom edge
    pub fn move_down(&mut self, dt: f32, map: &GameMap) {
        if self.pos.y + self.size.y < map.height {
            self.pos.y = map.clamp_y(self.pos.y + self.speed * dt, self.size.y);
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner of the bounds
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Integrate one step and bounce off the top/bottom walls.
    ///
    /// The position is not pulled back inside after a bounce, so the ball can
    /// sit slightly past a wall for a frame. Returns true when it bounced.
    pub fn update(&mut self, dt: f32, map: &GameMap) -> bool {
        self.pos += self.vel * dt;

        let bounds = self.bounds();
        if bounds.min.y <= 0.0 || bounds.max.y >= map.height {
            self.bounce_y();
            return true;
        }
        false
    }

    /// Teleport to `pos` and serve the other way
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel.x = -self.vel.x;
    }

    pub fn bounce_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.radius * 2.0))
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
