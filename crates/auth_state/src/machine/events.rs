//! Auth events - Defines events that trigger state transitions

use brainbuddy_core::AuthMode;
use serde::{Deserialize, Serialize};

/// Defines the events that can trigger state transitions in the FSM.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthEvent {
    /// The user submitted the login or registration form.
    SubmitRequested { mode: AuthMode },

    /// The OTP dispatch completed (simulated round-trip finished).
    CodeDispatched,

    /// The user went back from the OTP step to the editable form.
    BackRequested,

    /// The user submitted an OTP code.
    CodeEntered,

    /// The code was accepted and the session written.
    CodeAccepted,
}

impl AuthEvent {
    /// Check if this event is user-initiated (as opposed to an operation
    /// completion).
    pub fn is_user_event(&self) -> bool {
        matches!(
            self,
            Self::SubmitRequested { .. } | Self::BackRequested | Self::CodeEntered
        )
    }
}
