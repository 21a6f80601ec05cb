//! Frontend Errors
//!
//! Remote failures and rejected board actions.

use thiserror::Error;

use crate::models::TaskId;

/// Failures talking to the board server
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never got a response (offline, CORS, aborted)
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),
}

/// Why a board action did not change the board
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Task text is empty")]
    EmptyText,

    #[error("Task text is longer than {max} characters")]
    TextTooLong { max: usize },

    #[error("Section {0} does not exist")]
    SectionOutOfRange(usize),

    #[error("Task #{0} is no longer on the board")]
    TaskNotFound(TaskId),

    #[error("Removal was not confirmed")]
    NotConfirmed,
}

impl ActionError {
    /// Errors that come from the user's input rather than the server
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ActionError::EmptyText | ActionError::TextTooLong { .. } | ActionError::NotConfirmed
        )
    }
}
