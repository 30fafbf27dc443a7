use thiserror::Error;

/// Errors that can occur while reading input for the Fibonacci computer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FibError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FibError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        FibError::InvalidArgument(msg.into())
    }
}
