//! Screen State Machine
//!
//! Menu, match and game-over screens, and the actions that move between them.

/// Screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenState {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    StartVsAi,
    StartVsPlayer,
    GameOver,
    Confirm,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: ScreenState,
    pub to_state: ScreenState,
    pub action: GameAction,
}

/// Screen Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct ScreenFsm {
    state: ScreenState,
}

impl ScreenFsm {
    pub fn new() -> Self {
        Self {
            state: ScreenState::Menu,
        }
    }

    /// Get current state
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            tracing::info!(?from_state, to_state = ?next_state, ?action, "screen transition");
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            tracing::debug!(?from_state, ?action, "ignored invalid screen transition");
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<ScreenState> {
        match (self.state, action) {
            // From Menu
            (ScreenState::Menu, GameAction::StartVsAi) => Some(ScreenState::Playing),
            (ScreenState::Menu, GameAction::StartVsPlayer) => Some(ScreenState::Playing),

            // From Playing
            (ScreenState::Playing, GameAction::GameOver) => Some(ScreenState::GameOver),

            // From GameOver
            (ScreenState::GameOver, GameAction::Confirm) => Some(ScreenState::Menu),

            // Invalid transition
            _ => None,
        }
    }

    /// Back to the menu from any screen
    pub fn reset(&mut self) {
        if self.state != ScreenState::Menu {
            tracing::info!(from_state = ?self.state, "screen reset");
        }
        self.state = ScreenState::Menu;
    }

    pub fn is_playing(&self) -> bool {
        self.state == ScreenState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == ScreenState::GameOver
    }
}
