//! Auth states - Defines all possible states of an auth form

use serde::{Deserialize, Serialize};

/// Defines the possible states of a single auth form's lifecycle.
///
/// One machine exists per form instance; there is no shared state between
/// the teacher and student portals.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    /// The form is editable, awaiting a submit.
    Form,

    /// A submit is in flight; the submit control is disabled until the
    /// OTP dispatch completes.
    Submitting,

    /// An OTP was dispatched; awaiting code entry (or Back).
    OtpPending,

    /// A code is being verified; input is disabled.
    VerifyingOtp,

    /// Verification succeeded and the session was written (terminal).
    Authenticated,
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState::Form
    }
}

impl AuthState {
    /// Check if this is a terminal state (no more transitions expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Check if an operation is in flight. While busy, submit and verify
    /// are no-ops; this is what keeps at most one operation outstanding
    /// per form.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting | Self::VerifyingOtp)
    }

    /// Check if this state accepts user input.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Form | Self::OtpPending)
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &str {
        match self {
            Self::Form => "Ready for input",
            Self::Submitting => "Sending OTP",
            Self::OtpPending => "Waiting for code entry",
            Self::VerifyingOtp => "Verifying",
            Self::Authenticated => "Authenticated",
        }
    }
}
