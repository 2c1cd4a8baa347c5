//! Errors in the library.
use thiserror::Error;

/// Errors raised by the experience buffer.
#[derive(Error, Debug)]
pub enum BufferError {
    /// A required argument is missing or out of range.
    ///
    /// Raised before the buffer is mutated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure reported by a state, action or action-set encoder.
    #[error(transparent)]
    Encoder(#[from] anyhow::Error),
}

impl BufferError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns `true` if the error is [`BufferError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
