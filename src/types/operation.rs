//! Call type marker used by Safe transactions and MultiSend entries

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Safe operation type: how the Safe (or MultiSend) invokes the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum SafeOperation {
    /// Regular call (default)
    #[default]
    Call = 0,
    /// Delegate call (executes in context of the caller)
    DelegateCall = 1,
}

impl SafeOperation {
    /// Returns the operation as a u8 value
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Creates an operation from its wire byte
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(SafeOperation::Call),
            1 => Some(SafeOperation::DelegateCall),
            _ => None,
        }
    }
}

impl From<SafeOperation> for u8 {
    fn from(op: SafeOperation) -> Self {
        op.as_u8()
    }
}

impl TryFrom<u8> for SafeOperation {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        SafeOperation::from_u8(value).ok_or(DecodeError::InvalidOperation(value))
    }
}
