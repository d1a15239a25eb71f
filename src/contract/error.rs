//! Error-condition values for stream operations.
//!
//! Verification itself has no error path; an unmet contract is just
//! `false`. These types exist because the contracts mention them: the sync
//! stream shapes carry an [`ErrorCode`] out-parameter, and the completion
//! signature delivers one.

use core::fmt;
use thiserror::Error;

/// Why a transfer stopped short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("end of stream")]
    Eof,
    #[error("operation canceled")]
    Canceled,
    #[error("connection reset by peer")]
    Reset,
    #[error("operation would block")]
    WouldBlock,
}

/// Error slot for the non-panicking stream operations.
///
/// The default value means success; an operation reports failure by setting
/// a [`TransferError`] into the slot it was handed.
///
/// ```
/// use netcaps::contract::{ErrorCode, TransferError};
///
/// let mut ec = ErrorCode::default();
/// assert!(!ec.is_err());
///
/// ec.set(TransferError::Eof);
/// assert_eq!(ec.error(), Some(TransferError::Eof));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorCode(Option<TransferError>);

impl ErrorCode {
    /// The success value.
    pub const fn ok() -> Self {
        Self(None)
    }

    pub const fn from_error(err: TransferError) -> Self {
        Self(Some(err))
    }

    pub fn set(&mut self, err: TransferError) {
        self.0 = Some(err);
    }

    /// Reset the slot to success.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub const fn error(&self) -> Option<TransferError> {
        self.0
    }

    pub const fn is_err(&self) -> bool {
        self.0.is_some()
    }
}

impl From<TransferError> for ErrorCode {
    fn from(err: TransferError) -> Self {
        Self::from_error(err)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("ok"),
            Some(err) => write!(f, "{err}"),
        }
    }
}
