//! On-chain operation status queries
//!
//! The only input is the operation id produced by the encoders, passed through
//! byte-for-byte.

use alloy::network::{AnyNetwork, Network};
use alloy::primitives::{Address, B256, U256};
use alloy::providers::Provider;
use serde::Serialize;
use tracing::debug;

use crate::contracts::ITimelockController;
use crate::error::{Error, Result};

/// Timestamp the timelock stores for executed operations
pub const DONE_TIMESTAMP: U256 = U256::from_limbs([1, 0, 0, 0]);

/// Lifecycle state of a timelock operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationState {
    /// Never scheduled, or cancelled
    Unset,
    /// Scheduled, delay not yet elapsed
    Waiting,
    /// Scheduled and executable
    Ready,
    /// Executed
    Done,
}

impl OperationState {
    /// Derives the state from the stored timestamp, as the timelock does
    pub fn from_timestamp(timestamp: U256, now: U256) -> Self {
        if timestamp.is_zero() {
            OperationState::Unset
        } else if timestamp == DONE_TIMESTAMP {
            OperationState::Done
        } else if timestamp > now {
            OperationState::Waiting
        } else {
            OperationState::Ready
        }
    }
}

/// Raw status flags reported by the timelock for one operation id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationStatus {
    pub id: B256,
    pub exists: bool,
    pub pending: bool,
    pub ready: bool,
    pub done: bool,
    /// Unix time the operation becomes ready (1 once done, 0 if unset)
    pub timestamp: U256,
}

impl OperationStatus {
    pub fn state(&self) -> OperationState {
        if self.done {
            OperationState::Done
        } else if self.ready {
            OperationState::Ready
        } else if self.pending {
            OperationState::Waiting
        } else {
            OperationState::Unset
        }
    }
}

/// Read-only client for a deployed TimelockController
pub struct TimelockReader<P> {
    provider: P,
    address: Address,
}

impl<P> TimelockReader<P> {
    pub fn new(provider: P, address: Address) -> Self {
        Self { provider, address }
    }

    /// Returns the timelock address
    pub fn address(&self) -> Address {
        self.address
    }
}

impl<P: Provider<AnyNetwork>> TimelockReader<P> {
    /// Reads the status flags and timestamp of an operation
    pub async fn status(&self, id: B256) -> Result<OperationStatus> {
        fetch_operation_status(&self.provider, self.address, id).await
    }

    /// Reads the current minimum delay in seconds
    pub async fn min_delay(&self) -> Result<U256> {
        fetch_min_delay(&self.provider, self.address).await
    }
}

fn fetch_error(what: &'static str) -> impl FnOnce(alloy::contract::Error) -> Error {
    move |e| Error::Fetch {
        what,
        reason: e.to_string(),
    }
}

/// Reads `isOperation`, `isOperationPending`, `isOperationReady`,
/// `isOperationDone` and `getTimestamp` for `id`
pub async fn fetch_operation_status<P: Provider<N>, N: Network>(
    provider: &P,
    timelock: Address,
    id: B256,
) -> Result<OperationStatus> {
    let contract = ITimelockController::new(timelock, provider);

    let exists = contract
        .isOperation(id)
        .call()
        .await
        .map_err(fetch_error("isOperation"))?;
    let pending = contract
        .isOperationPending(id)
        .call()
        .await
        .map_err(fetch_error("isOperationPending"))?;
    let ready = contract
        .isOperationReady(id)
        .call()
        .await
        .map_err(fetch_error("isOperationReady"))?;
    let done = contract
        .isOperationDone(id)
        .call()
        .await
        .map_err(fetch_error("isOperationDone"))?;
    let timestamp = contract
        .getTimestamp(id)
        .call()
        .await
        .map_err(fetch_error("getTimestamp"))?;

    debug!(%timelock, %id, exists, pending, ready, done, "fetched operation status");

    Ok(OperationStatus {
        id,
        exists,
        pending,
        ready,
        done,
        timestamp,
    })
}

/// Reads `getMinDelay`
pub async fn fetch_min_delay<P: Provider<N>, N: Network>(
    provider: &P,
    timelock: Address,
) -> Result<U256> {
    ITimelockController::new(timelock, provider)
        .getMinDelay()
        .call()
        .await
        .map_err(fetch_error("getMinDelay"))
}
