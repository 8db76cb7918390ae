//! OTP gateway trait and the simulated implementation

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Error kind the gateway seam exposes. The simulated gateway never
/// produces one; a real delivery backend would.
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    #[error("OTP gateway unavailable: {0}")]
    Unavailable(String),
}

/// The async request/response exchange behind the auth form: dispatching
/// a code to a mobile number, and checking an entered code.
#[async_trait]
pub trait OtpGateway: Send + Sync {
    /// Request that a code be sent to the given mobile number.
    async fn request_code(&self, mobile: &str) -> Result<(), GatewayError>;

    /// Verify an entered code for the given mobile number.
    async fn verify_code(&self, mobile: &str, code: &str) -> Result<(), GatewayError>;
}

/// Gateway reproducing the prototype's timers: sleep a fixed delay, then
/// succeed unconditionally. No code is actually delivered or compared -
/// any input, including an empty code, verifies.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        // The prototype's setTimeout interval.
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl OtpGateway for SimulatedGateway {
    async fn request_code(&self, mobile: &str) -> Result<(), GatewayError> {
        tracing::debug!(mobile = %mobile, "simulating OTP dispatch");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    async fn verify_code(&self, mobile: &str, _code: &str) -> Result<(), GatewayError> {
        tracing::debug!(mobile = %mobile, "simulating OTP verification");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
