//! State transitions - FSM transition logic
//!
//! Implements the state machine that handles event-driven state transitions.
//! There is no failure path: every simulated operation succeeds, so the
//! machine has no error states and unknown (state, event) pairs simply
//! keep the current state.

use super::events::AuthEvent;
use super::states::AuthState;

/// Represents a state transition result.
#[derive(Debug, Clone)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: AuthState,
    /// The state after the transition.
    pub to: AuthState,
    /// The event that triggered the transition.
    pub event: AuthEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// State machine for a single auth form.
#[derive(Debug, Clone)]
pub struct StateMachine {
    /// Current state.
    current_state: AuthState,
    /// Transition history (limited).
    history: Vec<StateTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine in the editable Form state.
    pub fn new() -> Self {
        Self::with_state(AuthState::Form)
    }

    /// Create a state machine with a specific initial state.
    pub fn with_state(state: AuthState) -> Self {
        Self {
            current_state: state,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> AuthState {
        self.current_state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Handle an event and transition to a new state.
    pub fn handle_event(&mut self, event: AuthEvent) -> StateTransition {
        let old_state = self.current_state;
        let new_state = self.compute_next_state(old_state, &event);
        let changed = old_state != new_state;

        tracing::debug!(
            from = ?old_state,
            to = ?new_state,
            event = ?event,
            "auth FSM: handle_event"
        );

        self.current_state = new_state;

        let transition = StateTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
        };

        // Add to history
        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    /// Compute the next state given current state and event.
    fn compute_next_state(&self, state: AuthState, event: &AuthEvent) -> AuthState {
        use AuthEvent::*;
        use AuthState::*;

        match (state, event) {
            // ========== Submit (login or register) ==========
            (Form, SubmitRequested { .. }) => Submitting,
            (Submitting, CodeDispatched) => OtpPending,

            // ========== OTP step ==========
            // Back returns to the editable form; entered field values are
            // owned by the controller and survive untouched.
            (OtpPending, BackRequested) => Form,
            (OtpPending, CodeEntered) => VerifyingOtp,
            (VerifyingOtp, CodeAccepted) => Authenticated,

            // ========== Default: no transition ==========
            _ => state,
        }
    }

    /// Check if a transition is valid without executing it.
    pub fn can_transition(&self, event: &AuthEvent) -> bool {
        self.compute_next_state(self.current_state, event) != self.current_state
    }

    /// Reset to the editable Form state.
    pub fn reset(&mut self) {
        self.current_state = AuthState::Form;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brainbuddy_core::AuthMode;

    #[test]
    fn test_login_flow() {
        let mut sm = StateMachine::new();
        assert_eq!(sm.state(), AuthState::Form);

        let t1 = sm.handle_event(AuthEvent::SubmitRequested {
            mode: AuthMode::Login,
        });
        assert!(t1.changed);
        assert_eq!(sm.state(), AuthState::Submitting);

        let t2 = sm.handle_event(AuthEvent::CodeDispatched);
        assert!(t2.changed);
        assert_eq!(sm.state(), AuthState::OtpPending);

        sm.handle_event(AuthEvent::CodeEntered);
        assert_eq!(sm.state(), AuthState::VerifyingOtp);

        let t4 = sm.handle_event(AuthEvent::CodeAccepted);
        assert!(t4.changed);
        assert_eq!(sm.state(), AuthState::Authenticated);
        assert!(sm.state().is_terminal());
    }

    #[test]
    fn test_back_returns_to_form() {
        let mut sm = StateMachine::with_state(AuthState::OtpPending);
        let t = sm.handle_event(AuthEvent::BackRequested);
        assert!(t.changed);
        assert_eq!(sm.state(), AuthState::Form);
    }

    #[test]
    fn test_submit_while_busy_is_ignored() {
        let mut sm = StateMachine::with_state(AuthState::Submitting);
        let t = sm.handle_event(AuthEvent::SubmitRequested {
            mode: AuthMode::Register,
        });
        assert!(!t.changed);
        assert_eq!(sm.state(), AuthState::Submitting);
        assert!(!sm.can_transition(&AuthEvent::SubmitRequested {
            mode: AuthMode::Register,
        }));
    }

    #[test]
    fn test_authenticated_is_sticky() {
        let mut sm = StateMachine::with_state(AuthState::Authenticated);
        for event in [
            AuthEvent::SubmitRequested {
                mode: AuthMode::Login,
            },
            AuthEvent::BackRequested,
            AuthEvent::CodeEntered,
        ] {
            let t = sm.handle_event(event);
            assert!(!t.changed);
        }
        assert_eq!(sm.state(), AuthState::Authenticated);
    }

    #[test]
    fn test_history_tracking() {
        let mut sm = StateMachine::new();
        sm.handle_event(AuthEvent::SubmitRequested {
            mode: AuthMode::Login,
        });
        sm.handle_event(AuthEvent::CodeDispatched);

        assert_eq!(sm.history().len(), 2);
        assert_eq!(sm.history()[0].from, AuthState::Form);
        assert_eq!(sm.history()[1].to, AuthState::OtpPending);
    }
}
