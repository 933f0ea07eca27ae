use super::{InvalidInput, OrderError};

/// Describes possible Errors that may occur when calling methods in this crate
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs, reason = "Wrapped errors document themselves")]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error(transparent)]
    OrderError(#[from] OrderError),
}

/// This is defined as a convenience.
pub type Result<T> = std::result::Result<T, Error>;
