//! Keyboard and mouse input handling
//!
//! Terminals report key presses, not key state. When keyboard enhancement is
//! available we also get release events and a key is held until released.
//! Otherwise a key counts as held for a short window after each press; the
//! first window is longer to bridge the terminal's auto-repeat delay.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use game_core::Controls;

const FIRST_PRESS_WINDOW: Duration = Duration::from_millis(550);
const REPEAT_WINDOW: Duration = Duration::from_millis(120);

/// Discrete actions for the frame, separate from held movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Confirm,
    Click { column: u16, row: u16 },
}

#[derive(Debug, Clone, Copy)]
struct Held {
    last_seen: Instant,
    repeated: bool,
}

/// Tracks which movement keys are down
#[derive(Debug, Default)]
pub struct KeyTracker {
    held: HashMap<KeyCode, Held>,
    release_events: bool,
}

impl KeyTracker {
    pub fn new(release_events: bool) -> Self {
        Self {
            held: HashMap::new(),
            release_events,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) {
        let code = normalize(key.code);
        match key.kind {
            KeyEventKind::Release => {
                self.held.remove(&code);
            }
            KeyEventKind::Press | KeyEventKind::Repeat => {
                let repeated = self.is_held(code, now);
                self.held.insert(
                    code,
                    Held {
                        last_seen: now,
                        repeated,
                    },
                );
            }
        }
    }

    pub fn is_held(&self, code: KeyCode, now: Instant) -> bool {
        let Some(held) = self.held.get(&normalize(code)) else {
            return false;
        };
        if self.release_events {
            return true;
        }
        let window = if held.repeated {
            REPEAT_WINDOW
        } else {
            FIRST_PRESS_WINDOW
        };
        now.saturating_duration_since(held.last_seen) <= window
    }

    /// W/S drive the left paddle, Up/Down the right one
    pub fn controls(&self, now: Instant) -> Controls {
        Controls {
            left: Controls::axis(
                self.is_held(KeyCode::Char('w'), now),
                self.is_held(KeyCode::Char('s'), now),
            ),
            right: Controls::axis(
                self.is_held(KeyCode::Up, now),
                self.is_held(KeyCode::Down, now),
            ),
        }
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Feed one terminal event to the tracker and return any discrete command
pub fn translate(event: &Event, keys: &mut KeyTracker, now: Instant) -> Option<Command> {
    match event {
        Event::Key(key) => {
            keys.handle_key(key, now);
            if key.kind != KeyEventKind::Press {
                return None;
            }
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Command::Quit)
                }
                KeyCode::Enter => Some(Command::Confirm),
                _ => None,
            }
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Command::Click {
            column: *column,
            row: *row,
        }),
        _ => None,
    }
}
