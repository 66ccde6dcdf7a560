use glam::Vec2;
use serde::Deserialize;

use crate::{ConfigError, Params, Side};

/// Game configuration
///
/// Built once and handed to [`crate::Game::new`]; nothing mutates it afterwards.
/// Every field has a default from [`Params`], so a TOML file only needs the
/// values it wants to change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_velocity_x: f32,
    pub ball_velocity_y: f32,
    pub target_score: u32,
    pub starting_lives: u32,
    pub fixed_dt: f32,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_velocity_x: Params::BALL_VELOCITY_X,
            ball_velocity_y: Params::BALL_VELOCITY_Y,
            target_score: Params::TARGET_SCORE,
            starting_lives: Params::STARTING_LIVES,
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("fixed_dt", self.fixed_dt),
            ("max_dt", self.max_dt),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.paddle_height >= self.window_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                window_height: self.window_height,
            });
        }
        if self.ball_radius * 2.0 >= self.window_height {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
                window_height: self.window_height,
            });
        }
        if self.target_score == 0 {
            return Err(ConfigError::ZeroTargetScore);
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::ZeroStartingLives);
        }
        Ok(())
    }

    /// Get X position (left edge) for the paddle on a side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.window_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Where paddles start: vertically centred
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(
            self.paddle_x(side),
            (self.window_height - self.paddle_height) / 2.0,
        )
    }

    /// Ball spawn point (top-left of its bounds) at the window centre
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.window_width / 2.0, self.window_height / 2.0)
    }

    pub fn ball_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_velocity_x, self.ball_velocity_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 30.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 590.0, "Right paddle X position");
    }

    #[test]
    fn test_config_paddle_spawn_is_centred() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn(Side::Left), Vec2::new(30.0, 250.0));
        assert_eq!(config.paddle_spawn(Side::Right), Vec2::new(590.0, 250.0));
    }

    #[test]
    fn test_config_ball_spawn() {
        let config = Config::new();
        assert_eq!(config.ball_spawn(), Vec2::new(320.0, 300.0));
        assert_eq!(config.ball_velocity(), Vec2::new(-300.0, 300.0));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            paddle_speed: 0.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "paddle_speed",
                value: 0.0
            })
        );

        let config = Config {
            paddle_height: 600.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));

        let config = Config {
            target_score: 0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTargetScore));

        let config = Config {
            starting_lives: 0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroStartingLives));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("target_score = 5\nwindow_width = 800.0\n").unwrap();
        assert_eq!(config.target_score, 5);
        assert_eq!(config.window_width, 800.0);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
        assert_eq!(config.starting_lives, Params::STARTING_LIVES);
    }
}
