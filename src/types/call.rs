//! Call types shared by MultiSend packing and the submission handoff

use alloy::primitives::{Address, Bytes, U256};
use serde::Serialize;

use super::SafeOperation;

/// Trait for anything a Safe can execute as one packed transaction
pub trait SafeCall {
    /// Returns the target address
    fn to(&self) -> Address;

    /// Returns the value to send (in wei)
    fn value(&self) -> U256;

    /// Returns the calldata
    fn data(&self) -> Bytes;

    /// Returns the operation type (Call or DelegateCall)
    fn operation(&self) -> SafeOperation;
}

/// A raw call with explicit to, value, data, and operation
///
/// This is also the shape of one entry unpacked from a MultiSend stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Call {
    /// Call or DelegateCall
    pub operation: SafeOperation,
    /// Target address
    pub to: Address,
    /// Value to send
    pub value: U256,
    /// Calldata
    pub data: Bytes,
}

impl Call {
    /// Creates a new Call with the given parameters
    pub fn new(to: Address, value: U256, data: impl Into<Bytes>) -> Self {
        Self {
            operation: SafeOperation::Call,
            to,
            value,
            data: data.into(),
        }
    }

    /// Creates a new Call with zero value
    pub fn call(to: Address, data: impl Into<Bytes>) -> Self {
        Self::new(to, U256::ZERO, data)
    }

    /// Creates a new delegate call
    pub fn delegate_call(to: Address, data: impl Into<Bytes>) -> Self {
        Self::call(to, data).with_operation(SafeOperation::DelegateCall)
    }

    /// Sets the operation type
    pub fn with_operation(mut self, operation: SafeOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Sets the value
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }
}

impl SafeCall for Call {
    fn to(&self) -> Address {
        self.to
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn data(&self) -> Bytes {
        self.data.clone()
    }

    fn operation(&self) -> SafeOperation {
        self.operation
    }
}

/// One transaction unpacked from a MultiSend payload
pub type MultiSendEntry = Call;
