use thiserror::Error;

/// Error types for scheduling operations
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum SchedulerError {
    #[error("Invalid card state: {message}")]
    InvalidState { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl SchedulerError {
    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        SchedulerError::InvalidState {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        SchedulerError::InvalidConfiguration {
            message: message.into(),
        }
    }
}
