//! auth_state - State machine for the auth flow
//!
//! This crate provides the state machine that tracks a single auth form
//! through submit, OTP entry and verification.

pub mod machine;

// Re-export commonly used types
pub use machine::{AuthEvent, AuthState, StateMachine, StateTransition};
