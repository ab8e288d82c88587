//! Errors surfaced while draining the action queue.
use thiserror::Error;

use tbr_core::{ErrorSeverity, GameError};

pub type Result<T> = std::result::Result<T, DriverError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error("action '{action}' kept replacing itself: chain reached depth {depth}")]
    ReplacementChainTooDeep { action: &'static str, depth: usize },

    #[error("drain exceeded {limit} steps with actions still queued")]
    StepLimitExceeded { limit: usize },
}

impl GameError for DriverError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DriverError::ReplacementChainTooDeep { .. } => ErrorSeverity::Internal,
            DriverError::StepLimitExceeded { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            DriverError::ReplacementChainTooDeep { .. } => "DRIVER_REPLACEMENT_CHAIN_TOO_DEEP",
            DriverError::StepLimitExceeded { .. } => "DRIVER_STEP_LIMIT_EXCEEDED",
        }
    }
}
