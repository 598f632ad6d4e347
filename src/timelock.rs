//! TimelockController calldata codec
//!
//! Encoders produce calldata plus the operation id the timelock will assign;
//! [`decode_timelock_calldata`] dispatches on the 4-byte selector into
//! [`DecodedCall`].

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::sol_types::SolCall;
use serde::Serialize;
use tracing::debug;

use crate::contracts::ITimelockController::{
    cancelCall, executeBatchCall, executeCall, scheduleBatchCall, scheduleCall, updateDelayCall,
};
use crate::encoding::{hash_operation, hash_operation_batch};
use crate::error::Result;
use crate::types::{ensure_batch_lengths, BatchOperation, EncodedCall, Operation};

/// The timelock functions this codec recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TimelockFunction {
    Schedule,
    ScheduleBatch,
    Execute,
    ExecuteBatch,
    Cancel,
    UpdateDelay,
}

impl TimelockFunction {
    pub const ALL: [TimelockFunction; 6] = [
        TimelockFunction::Schedule,
        TimelockFunction::ScheduleBatch,
        TimelockFunction::Execute,
        TimelockFunction::ExecuteBatch,
        TimelockFunction::Cancel,
        TimelockFunction::UpdateDelay,
    ];

    pub fn selector(self) -> [u8; 4] {
        match self {
            TimelockFunction::Schedule => scheduleCall::SELECTOR,
            TimelockFunction::ScheduleBatch => scheduleBatchCall::SELECTOR,
            TimelockFunction::Execute => executeCall::SELECTOR,
            TimelockFunction::ExecuteBatch => executeBatchCall::SELECTOR,
            TimelockFunction::Cancel => cancelCall::SELECTOR,
            TimelockFunction::UpdateDelay => updateDelayCall::SELECTOR,
        }
    }

    /// Canonical signature, e.g. `cancel(bytes32)`
    pub fn signature(self) -> &'static str {
        match self {
            TimelockFunction::Schedule => scheduleCall::SIGNATURE,
            TimelockFunction::ScheduleBatch => scheduleBatchCall::SIGNATURE,
            TimelockFunction::Execute => executeCall::SIGNATURE,
            TimelockFunction::ExecuteBatch => executeBatchCall::SIGNATURE,
            TimelockFunction::Cancel => cancelCall::SIGNATURE,
            TimelockFunction::UpdateDelay => updateDelayCall::SIGNATURE,
        }
    }

    /// Solidity function name, e.g. `scheduleBatch`
    pub fn name(self) -> &'static str {
        match self {
            TimelockFunction::Schedule => "schedule",
            TimelockFunction::ScheduleBatch => "scheduleBatch",
            TimelockFunction::Execute => "execute",
            TimelockFunction::ExecuteBatch => "executeBatch",
            TimelockFunction::Cancel => "cancel",
            TimelockFunction::UpdateDelay => "updateDelay",
        }
    }

    pub fn from_selector(selector: [u8; 4]) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.selector() == selector)
    }
}

/// A decoded timelock call
///
/// `Execute`/`ExecuteBatch` carry the same fields as their schedule
/// counterparts minus the delay. `Cancel` carries the id it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "function", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DecodedCall {
    Schedule {
        operation: Operation,
        delay: U256,
        operation_id: B256,
    },
    ScheduleBatch {
        batch: BatchOperation,
        delay: U256,
        operation_id: B256,
    },
    Execute {
        operation: Operation,
        operation_id: B256,
    },
    ExecuteBatch {
        batch: BatchOperation,
        operation_id: B256,
    },
    Cancel {
        operation_id: B256,
    },
    UpdateDelay {
        new_delay: U256,
    },
}

impl DecodedCall {
    pub fn function(&self) -> TimelockFunction {
        match self {
            DecodedCall::Schedule { .. } => TimelockFunction::Schedule,
            DecodedCall::ScheduleBatch { .. } => TimelockFunction::ScheduleBatch,
            DecodedCall::Execute { .. } => TimelockFunction::Execute,
            DecodedCall::ExecuteBatch { .. } => TimelockFunction::ExecuteBatch,
            DecodedCall::Cancel { .. } => TimelockFunction::Cancel,
            DecodedCall::UpdateDelay { .. } => TimelockFunction::UpdateDelay,
        }
    }

    /// The operation this call refers to (`None` for `updateDelay`)
    pub fn operation_id(&self) -> Option<B256> {
        match self {
            DecodedCall::Schedule { operation_id, .. }
            | DecodedCall::ScheduleBatch { operation_id, .. }
            | DecodedCall::Execute { operation_id, .. }
            | DecodedCall::ExecuteBatch { operation_id, .. }
            | DecodedCall::Cancel { operation_id } => Some(*operation_id),
            DecodedCall::UpdateDelay { .. } => None,
        }
    }

    /// Scheduling delay in seconds, for the schedule variants
    pub fn delay(&self) -> Option<U256> {
        match self {
            DecodedCall::Schedule { delay, .. } | DecodedCall::ScheduleBatch { delay, .. } => {
                Some(*delay)
            }
            _ => None,
        }
    }
}

/// Encodes `schedule(target, value, data, predecessor, salt, delay)`
pub fn encode_schedule(
    target: Address,
    value: U256,
    data: Bytes,
    predecessor: B256,
    salt: B256,
    delay: U256,
) -> EncodedCall {
    let operation_id = hash_operation(target, value, &data, predecessor, salt);
    let calldata = scheduleCall {
        target,
        value,
        data,
        predecessor,
        salt,
        delay,
    }
    .abi_encode();

    EncodedCall {
        calldata: calldata.into(),
        operation_id: Some(operation_id),
    }
}

/// Encodes `scheduleBatch(targets, values, payloads, predecessor, salt, delay)`
pub fn encode_schedule_batch(
    targets: Vec<Address>,
    values: Vec<U256>,
    payloads: Vec<Bytes>,
    predecessor: B256,
    salt: B256,
    delay: U256,
) -> Result<EncodedCall> {
    ensure_batch_lengths(&targets, &values, &payloads)?;

    let operation_id = hash_operation_batch(&targets, &values, &payloads, predecessor, salt);
    let calldata = scheduleBatchCall {
        targets,
        values,
        payloads,
        predecessor,
        salt,
        delay,
    }
    .abi_encode();

    Ok(EncodedCall {
        calldata: calldata.into(),
        operation_id: Some(operation_id),
    })
}

/// Encodes `execute(target, value, payload, predecessor, salt)`
pub fn encode_execute(
    target: Address,
    value: U256,
    data: Bytes,
    predecessor: B256,
    salt: B256,
) -> EncodedCall {
    let operation_id = hash_operation(target, value, &data, predecessor, salt);
    let calldata = executeCall {
        target,
        value,
        payload: data,
        predecessor,
        salt,
    }
    .abi_encode();

    EncodedCall {
        calldata: calldata.into(),
        operation_id: Some(operation_id),
    }
}

/// Encodes `executeBatch(targets, values, payloads, predecessor, salt)`
pub fn encode_execute_batch(
    targets: Vec<Address>,
    values: Vec<U256>,
    payloads: Vec<Bytes>,
    predecessor: B256,
    salt: B256,
) -> Result<EncodedCall> {
    ensure_batch_lengths(&targets, &values, &payloads)?;

    let operation_id = hash_operation_batch(&targets, &values, &payloads, predecessor, salt);
    let calldata = executeBatchCall {
        targets,
        values,
        payloads,
        predecessor,
        salt,
    }
    .abi_encode();

    Ok(EncodedCall {
        calldata: calldata.into(),
        operation_id: Some(operation_id),
    })
}

/// Encodes `cancel(id)`; the id is passed through, not derived
pub fn encode_cancel(operation_id: B256) -> EncodedCall {
    EncodedCall {
        calldata: cancelCall { id: operation_id }.abi_encode().into(),
        operation_id: None,
    }
}

/// Encodes `updateDelay(newDelay)`
///
/// The timelock only accepts this from itself, so it is normally wrapped in a
/// scheduled operation targeting the timelock address.
pub fn encode_update_delay(new_delay: U256) -> EncodedCall {
    EncodedCall {
        calldata: updateDelayCall {
            newDelay: new_delay,
        }
        .abi_encode()
        .into(),
        operation_id: None,
    }
}

impl Operation {
    /// Encodes a `schedule` call for this operation
    pub fn schedule(&self, delay: U256) -> EncodedCall {
        encode_schedule(
            self.target,
            self.value,
            self.data.clone(),
            self.predecessor,
            self.salt,
            delay,
        )
    }

    /// Encodes an `execute` call for this operation
    pub fn execute(&self) -> EncodedCall {
        encode_execute(
            self.target,
            self.value,
            self.data.clone(),
            self.predecessor,
            self.salt,
        )
    }
}

impl BatchOperation {
    /// Encodes a `scheduleBatch` call for this batch
    pub fn schedule(&self, delay: U256) -> Result<EncodedCall> {
        encode_schedule_batch(
            self.targets.clone(),
            self.values.clone(),
            self.payloads.clone(),
            self.predecessor,
            self.salt,
            delay,
        )
    }

    /// Encodes an `executeBatch` call for this batch
    pub fn execute(&self) -> Result<EncodedCall> {
        encode_execute_batch(
            self.targets.clone(),
            self.values.clone(),
            self.payloads.clone(),
            self.predecessor,
            self.salt,
        )
    }
}

/// Decodes timelock calldata, reporting why recognized calldata failed
///
/// Returns `Ok(None)` for input shorter than a selector or with an unknown
/// selector, and `Err` when a recognized selector is followed by arguments
/// that do not decode, are not strictly encoded (an address word with
/// non-zero upper bytes, a bool above 1), or hold batch arrays of differing
/// lengths. The timelock reverts on all of these.
pub fn try_decode_timelock_calldata(calldata: &[u8]) -> Result<Option<DecodedCall>> {
    let Some(selector) = calldata.get(..4).and_then(|s| <[u8; 4]>::try_from(s).ok()) else {
        return Ok(None);
    };
    let Some(function) = TimelockFunction::from_selector(selector) else {
        return Ok(None);
    };
    let args = &calldata[4..];

    let decoded = match function {
        TimelockFunction::Schedule => {
            let call = scheduleCall::abi_decode_raw_validate(args)?;
            let operation = Operation {
                target: call.target,
                value: call.value,
                data: call.data,
                predecessor: call.predecessor,
                salt: call.salt,
            };
            DecodedCall::Schedule {
                operation_id: operation.id(),
                operation,
                delay: call.delay,
            }
        }
        TimelockFunction::ScheduleBatch => {
            let call = scheduleBatchCall::abi_decode_raw_validate(args)?;
            let batch = BatchOperation {
                targets: call.targets,
                values: call.values,
                payloads: call.payloads,
                predecessor: call.predecessor,
                salt: call.salt,
            };
            batch.validate()?;
            DecodedCall::ScheduleBatch {
                operation_id: batch.id(),
                batch,
                delay: call.delay,
            }
        }
        TimelockFunction::Execute => {
            let call = executeCall::abi_decode_raw_validate(args)?;
            let operation = Operation {
                target: call.target,
                value: call.value,
                data: call.payload,
                predecessor: call.predecessor,
                salt: call.salt,
            };
            DecodedCall::Execute {
                operation_id: operation.id(),
                operation,
            }
        }
        TimelockFunction::ExecuteBatch => {
            let call = executeBatchCall::abi_decode_raw_validate(args)?;
            let batch = BatchOperation {
                targets: call.targets,
                values: call.values,
                payloads: call.payloads,
                predecessor: call.predecessor,
                salt: call.salt,
            };
            batch.validate()?;
            DecodedCall::ExecuteBatch {
                operation_id: batch.id(),
                batch,
            }
        }
        TimelockFunction::Cancel => {
            let call = cancelCall::abi_decode_raw_validate(args)?;
            DecodedCall::Cancel {
                operation_id: call.id,
            }
        }
        TimelockFunction::UpdateDelay => {
            let call = updateDelayCall::abi_decode_raw_validate(args)?;
            DecodedCall::UpdateDelay {
                new_delay: call.newDelay,
            }
        }
    };

    Ok(Some(decoded))
}

/// Decodes timelock calldata, returning `None` for anything unrecognized
///
/// Never fails: truncated or garbage arguments behind a known selector are
/// logged and reported as `None`.
pub fn decode_timelock_calldata(calldata: &[u8]) -> Option<DecodedCall> {
    match try_decode_timelock_calldata(calldata) {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!(%err, len = calldata.len(), "undecodable timelock calldata");
            None
        }
    }
}
