//! Locating timelock calldata inside a Safe transaction

use alloy::primitives::{Address, Bytes};
use tracing::trace;

use crate::config::{MultiSendRegistry, TimelockConfig};
use crate::encoding::decode_multisend;
use crate::error::Result;
use crate::parse::{parse_address, parse_bytes};

/// Returns the bytes a Safe transaction sends to the timelock, if any
///
/// A transaction addressed to the timelock yields its data unchanged. A
/// transaction addressed to a registered MultiSend yields the data of the first
/// packed entry targeting the timelock. Anything else yields `None`. The
/// returned bytes are not decoded.
pub fn extract_timelock_calldata(
    to: Address,
    data: &Bytes,
    timelock: Address,
    registry: &MultiSendRegistry,
) -> Option<Bytes> {
    if to == timelock {
        trace!(%to, "transaction calls the timelock directly");
        return Some(data.clone());
    }

    if !registry.contains(&to) {
        return None;
    }

    let found = decode_multisend(data)
        .into_iter()
        .find(|entry| entry.to == timelock)
        .map(|entry| entry.data);
    trace!(%to, found = found.is_some(), "searched multiSend batch for timelock call");
    found
}

/// [`extract_timelock_calldata`] over hex strings
///
/// Malformed addresses or hex are reported as errors rather than treated as
/// "not found".
pub fn extract_timelock_calldata_str(
    to: &str,
    data: &str,
    timelock: &str,
    registry: &MultiSendRegistry,
) -> Result<Option<Bytes>> {
    let to = parse_address(to)?;
    let data = parse_bytes(data)?;
    let timelock = parse_address(timelock)?;
    Ok(extract_timelock_calldata(to, &data, timelock, registry))
}

impl TimelockConfig {
    /// Extracts timelock calldata using this configuration
    pub fn extract(&self, to: Address, data: &Bytes) -> Option<Bytes> {
        extract_timelock_calldata(to, data, self.timelock, &self.multi_send)
    }
}
