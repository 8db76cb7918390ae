//! auth_flow - Drives the auth state machine against an OTP gateway
//!
//! The prototype simulated its network round-trips with fixed timers; here
//! that becomes an injectable async gateway. The controller enforces the
//! one-outstanding-operation-per-form invariant and resolves stale
//! completions (user navigated away mid-flight) as no-ops via a
//! cancellation token.

pub mod controller;
pub mod error;
pub mod gateway;

// Re-export commonly used types
pub use controller::{AuthFlowController, AuthForm, SubmitOutcome, VerifyOutcome};
pub use error::FlowError;
pub use gateway::{GatewayError, OtpGateway, SimulatedGateway};
