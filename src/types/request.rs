//! Timelock operation values and the encoder output

use alloy::primitives::{Address, Bytes, B256, U256};
use serde::Serialize;

use super::{Call, SafeCall, SafeOperation};
use crate::encoding::{hash_operation, hash_operation_batch};
use crate::error::{Error, Result};

/// A timelock operation containing a single transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub target: Address,
    pub value: U256,
    pub data: Bytes,
    /// Id of the operation that must be done first (zero for none)
    pub predecessor: B256,
    pub salt: B256,
}

impl Operation {
    /// Creates an operation with no predecessor and a zero salt
    pub fn new(target: Address, value: U256, data: impl Into<Bytes>) -> Self {
        Self {
            target,
            value,
            data: data.into(),
            predecessor: B256::ZERO,
            salt: B256::ZERO,
        }
    }

    pub fn with_predecessor(mut self, predecessor: B256) -> Self {
        self.predecessor = predecessor;
        self
    }

    pub fn with_salt(mut self, salt: B256) -> Self {
        self.salt = salt;
        self
    }

    /// The operation id, as the timelock computes it
    pub fn id(&self) -> B256 {
        hash_operation(
            self.target,
            self.value,
            &self.data,
            self.predecessor,
            self.salt,
        )
    }
}

/// A timelock operation containing a batch of transactions
///
/// Index `i` across `targets`, `values` and `payloads` describes call `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOperation {
    pub targets: Vec<Address>,
    pub values: Vec<U256>,
    pub payloads: Vec<Bytes>,
    pub predecessor: B256,
    pub salt: B256,
}

impl BatchOperation {
    /// Creates a batch, rejecting arrays of differing lengths
    pub fn new(targets: Vec<Address>, values: Vec<U256>, payloads: Vec<Bytes>) -> Result<Self> {
        ensure_batch_lengths(&targets, &values, &payloads)?;
        Ok(Self {
            targets,
            values,
            payloads,
            predecessor: B256::ZERO,
            salt: B256::ZERO,
        })
    }

    /// Creates a batch from a list of calls (operation types are ignored)
    pub fn from_calls(calls: &[impl SafeCall]) -> Self {
        Self {
            targets: calls.iter().map(SafeCall::to).collect(),
            values: calls.iter().map(SafeCall::value).collect(),
            payloads: calls.iter().map(SafeCall::data).collect(),
            predecessor: B256::ZERO,
            salt: B256::ZERO,
        }
    }

    pub fn with_predecessor(mut self, predecessor: B256) -> Self {
        self.predecessor = predecessor;
        self
    }

    pub fn with_salt(mut self, salt: B256) -> Self {
        self.salt = salt;
        self
    }

    /// Number of calls in the batch
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Checks that the three arrays line up
    pub fn validate(&self) -> Result<()> {
        ensure_batch_lengths(&self.targets, &self.values, &self.payloads)
    }

    /// The operation id, as the timelock computes it
    pub fn id(&self) -> B256 {
        hash_operation_batch(
            &self.targets,
            &self.values,
            &self.payloads,
            self.predecessor,
            self.salt,
        )
    }
}

pub(crate) fn ensure_batch_lengths(
    targets: &[Address],
    values: &[U256],
    payloads: &[Bytes],
) -> Result<()> {
    if targets.len() != values.len() || targets.len() != payloads.len() {
        return Err(Error::LengthMismatch {
            targets: targets.len(),
            values: values.len(),
            payloads: payloads.len(),
        });
    }
    Ok(())
}

/// Calldata produced by one of the timelock encoders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedCall {
    pub calldata: Bytes,
    /// Derived operation id; `None` for `cancel` and `updateDelay`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<B256>,
}

impl EncodedCall {
    /// Wraps the calldata into a transaction addressed to `timelock`
    pub fn into_tx(self, timelock: Address) -> TimelockTx {
        TimelockTx {
            to: timelock,
            data: self.calldata,
            value: U256::ZERO,
        }
    }
}

/// The payload handed to an external signer or Safe for submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelockTx {
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
}

impl TimelockTx {
    /// Attaches native value (e.g. for `execute` of a payable target)
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }
}

impl SafeCall for TimelockTx {
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
        SafeOperation::Call
    }
}

impl From<TimelockTx> for Call {
    fn from(tx: TimelockTx) -> Self {
        Call::new(tx.to, tx.value, tx.data)
    }
}
