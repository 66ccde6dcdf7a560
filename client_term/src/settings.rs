//! Optional `pong.toml` settings
//!
//! ```toml
//! [game]
//! target_score = 5
//!
//! [client]
//! high_score_path = "highscore.txt"
//! frame_rate = 60
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use game_core::Config;
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "pong.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub high_score_path: PathBuf,
    pub log_path: PathBuf,
    pub frame_rate: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from("highscore.txt"),
            log_path: PathBuf::from("pong.log"),
            frame_rate: 60,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: Config,
    pub client: ClientSettings,
}

impl Settings {
    /// Read settings from `path`; `Ok(None)` when the file does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        };

        let settings: Settings =
            toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))?;
        settings.validate()?;
        Ok(Some(settings))
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate().context("invalid [game] settings")?;
        ensure!(self.client.frame_rate > 0, "frame_rate must be at least 1");
        Ok(())
    }
}
