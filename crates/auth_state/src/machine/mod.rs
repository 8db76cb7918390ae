//! State machine module
//!
//! Contains the FSM for the login/registration/OTP lifecycle.

mod events;
mod states;
mod transitions;

pub use events::AuthEvent;
pub use states::AuthState;
pub use transitions::{StateMachine, StateTransition};
