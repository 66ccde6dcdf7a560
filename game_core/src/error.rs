use std::fmt;
use std::io;
use std::path::PathBuf;

/// Configuration values the game refuses to run with
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NotPositive { field: &'static str, value: f32 },
    PaddleTooTall { paddle_height: f32, window_height: f32 },
    BallTooLarge { radius: f32, window_height: f32 },
    ZeroTargetScore,
    ZeroStartingLives,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { field, value } => {
                write!(f, "{field} must be a positive number, got {value}")
            }
            Self::PaddleTooTall {
                paddle_height,
                window_height,
            } => write!(
                f,
                "paddle height {paddle_height} does not fit in window height {window_height}"
            ),
            Self::BallTooLarge {
                radius,
                window_height,
            } => write!(
                f,
                "ball radius {radius} does not fit in window height {window_height}"
            ),
            Self::ZeroTargetScore => write!(f, "target_score must be at least 1"),
            Self::ZeroStartingLives => write!(f, "starting_lives must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure reading or writing the persisted high score
#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, content: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "high score file {}: {source}", path.display())
            }
            Self::Parse { path, content } => write!(
                f,
                "high score file {} does not hold a non-negative integer: {content:?}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. } => None,
        }
    }
}
