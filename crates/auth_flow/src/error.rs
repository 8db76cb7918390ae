//! Auth flow error types

use crate::gateway::GatewayError;
use session_store::SessionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

pub type Result<T> = std::result::Result<T, FlowError>;
