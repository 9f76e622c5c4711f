//! Error types
//!
//! Every dispatched call settles with either a value or an [`Error`]. Failures
//! raised before the network is touched are [`ValidationError`]s; anything the
//! transport produces is carried through untouched as [`Error::Transport`].

/// A precondition failure detected before any request is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Failure outcome of a dispatched call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing required argument; the transport was never invoked.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Opaque failure from the transport, passed through unchanged.
    #[error(transparent)]
    Transport(anyhow::Error),

    /// The call was made outside of a tokio runtime.
    #[error("no async runtime available to dispatch the request")]
    NoRuntime,

    /// The dispatch task ended without settling the call.
    #[error("request was dropped before it settled")]
    Canceled,
}

impl Error {
    /// Returns the human-readable error message.
    pub fn message(&self) -> String {
        match self {
            Error::Validation(e) => e.message.clone(),
            other => other.to_string(),
        }
    }

    /// Returns true if this failure came from argument validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Returns the transport error if this failure came from the transport.
    pub fn as_transport(&self) -> Option<&anyhow::Error> {
        match self {
            Error::Transport(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
