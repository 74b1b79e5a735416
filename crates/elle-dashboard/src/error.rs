//! Errors surfaced by the dashboard binary.
//!
//! Telemetry, chat and advisory failures never reach this type: they are
//! recovered on the UI loop. What is left is terminal setup and teardown
//! ([`DashboardError::Io`]), drawing ([`DashboardError::Terminal`]) and
//! client construction ([`DashboardError::Sdk`]).

use elle_sdk::SdkError;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("chat client error: {0}")]
    Sdk(#[from] SdkError),

    /// Drawing failed on the terminal backend.
    #[error("terminal draw error: {0}")]
    Terminal(String),
}
