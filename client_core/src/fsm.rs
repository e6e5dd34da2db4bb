//! Game State Machine
//!
//! Menu, match, pause and end-of-match screens. The session is frozen in
//! every state except `Playing`.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Menu,
    Playing,
    Paused,
    /// The AI reached the winning score
    Death,
    /// The player reached the winning score
    Win,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Pause,
    Resume,
    Quit,
    PlayerLost,
    PlayerWon,
    FocusLost,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Menu,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
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
            log::debug!("{:?} --{:?}--> {:?}", from_state, action, next_state);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            // From Menu
            (FsmState::Menu, GameAction::Start) => Some(FsmState::Playing),

            // From Playing
            (FsmState::Playing, GameAction::Pause) => Some(FsmState::Paused),
            (FsmState::Playing, GameAction::FocusLost) => Some(FsmState::Paused),
            (FsmState::Playing, GameAction::PlayerLost) => Some(FsmState::Death),
            (FsmState::Playing, GameAction::PlayerWon) => Some(FsmState::Win),

            // From Paused
            (FsmState::Paused, GameAction::Pause) => Some(FsmState::Playing),
            (FsmState::Paused, GameAction::Resume) => Some(FsmState::Playing),
            (FsmState::Paused, GameAction::Quit) => Some(FsmState::Menu),

            // From Death / Win
            (FsmState::Death | FsmState::Win, GameAction::Start) => Some(FsmState::Playing),
            (FsmState::Death | FsmState::Win, GameAction::Quit) => Some(FsmState::Menu),

            // Invalid transition
            _ => None,
        }
    }

    /// Reset to Menu state
    pub fn reset(&mut self) {
        self.state = FsmState::Menu;
    }

    /// Check if a match is running
    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }

    /// Check if a match has ended
    pub fn is_game_over(&self) -> bool {
        matches!(self.state, FsmState::Death | FsmState::Win)
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
