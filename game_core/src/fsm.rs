//! Session State Machine
//!
//! Idle -> Playing -> Finished, with restart re-entering Playing directly.

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Before the first game; play control visible
    Idle,
    /// Loop running, input sampled, physics evaluated
    Playing,
    /// A side reached the win score; frozen until restart
    Finished,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    Win,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: SessionState,
    pub to_state: SessionState,
    pub action: SessionAction,
}

/// Session Finite State Machine
#[derive(Debug, Clone)]
pub struct SessionFsm {
    state: SessionState,
}

impl SessionFsm {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: SessionAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                log::info!("session {:?} --{:?}--> {:?}", from_state, action, next_state);
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => {
                log::warn!("session rejected {:?} in {:?}", action, from_state);
                TransitionResult {
                    success: false,
                    from_state,
                    to_state: from_state,
                    action,
                }
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: SessionAction) -> Option<SessionState> {
        match (self.state, action) {
            (SessionState::Idle, SessionAction::Start) => Some(SessionState::Playing),

            // Restart mid-game is allowed, it resets like any other start
            (SessionState::Playing, SessionAction::Start) => Some(SessionState::Playing),
            (SessionState::Playing, SessionAction::Win) => Some(SessionState::Finished),

            (SessionState::Finished, SessionAction::Start) => Some(SessionState::Playing),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }
}

impl Default for SessionFsm {
    fn default() -> Self {
        Self::new()
    }
}
