//! Known MultiSend deployments and timelock configuration

use std::collections::BTreeSet;

use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parse::parse_address;

/// Canonical Safe MultiSend deployments
///
/// These addresses are the same across all supported chains (CREATE2 deployment).
pub mod canonical {
    use super::*;

    pub const MULTI_SEND_V1_1_1: Address = address!("8D29bE29923b68abfDD21e541b9374737B49cdAD");
    pub const MULTI_SEND_V1_3_0: Address = address!("A238CBeb142c10Ef7Ad8442C6D1f9E89e07e7761");
    pub const MULTI_SEND_V1_3_0_EIP155: Address =
        address!("998739BFdAAdde7C933B942a68053933098f9EDa");
    pub const MULTI_SEND_CALL_ONLY_V1_3_0: Address =
        address!("40A2aCCbd92BCA938b02010E17A5b8929b49130D");
    pub const MULTI_SEND_CALL_ONLY_V1_3_0_EIP155: Address =
        address!("A1dabEF33b3B82c7814B6D82A79e50F4AC44102B");
    pub const MULTI_SEND_V1_4_1: Address = address!("38869bf66a61cF6bDB996A6aE40D5853Fd43B526");
    pub const MULTI_SEND_CALL_ONLY_V1_4_1: Address =
        address!("9641d764fc13c8B624c04430C7356C1C7C8102e2");

    pub const ALL: [Address; 7] = [
        MULTI_SEND_V1_1_1,
        MULTI_SEND_V1_3_0,
        MULTI_SEND_V1_3_0_EIP155,
        MULTI_SEND_CALL_ONLY_V1_3_0,
        MULTI_SEND_CALL_ONLY_V1_3_0_EIP155,
        MULTI_SEND_V1_4_1,
        MULTI_SEND_CALL_ONLY_V1_4_1,
    ];
}

/// Set of addresses treated as MultiSend batch executors
///
/// Addresses are compared as bytes, so checksummed, lowercase and uppercase
/// spellings of the same address all match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiSendRegistry {
    addresses: BTreeSet<Address>,
}

impl Default for MultiSendRegistry {
    fn default() -> Self {
        Self::canonical()
    }
}

impl MultiSendRegistry {
    /// Returns the canonical Safe v1.1.1, v1.3.0 and v1.4.1 deployments
    pub fn canonical() -> Self {
        Self::from_addresses(canonical::ALL)
    }

    /// An empty registry (nothing is treated as MultiSend)
    pub fn empty() -> Self {
        Self {
            addresses: BTreeSet::new(),
        }
    }

    pub fn from_addresses(addresses: impl IntoIterator<Item = Address>) -> Self {
        Self {
            addresses: addresses.into_iter().collect(),
        }
    }

    /// Parses addresses from strings of any letter case
    pub fn from_strs<S: AsRef<str>>(addresses: impl IntoIterator<Item = S>) -> Result<Self> {
        let addresses = addresses
            .into_iter()
            .map(|s| parse_address(s.as_ref()))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { addresses })
    }

    /// Adds a deployment
    pub fn with_address(mut self, address: Address) -> Self {
        self.addresses.insert(address);
        self
    }

    pub fn extend(&mut self, addresses: impl IntoIterator<Item = Address>) {
        self.addresses.extend(addresses);
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.addresses.contains(address)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.addresses.iter()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Timelock address together with the MultiSend deployments to look through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelockConfig {
    /// TimelockController address
    pub timelock: Address,
    /// MultiSend deployments (defaults to the canonical set)
    #[serde(default)]
    pub multi_send: MultiSendRegistry,
}

impl TimelockConfig {
    /// Creates a configuration with the canonical MultiSend deployments
    pub fn new(timelock: Address) -> Self {
        Self {
            timelock,
            multi_send: MultiSendRegistry::canonical(),
        }
    }

    /// Replaces the MultiSend registry
    pub fn with_multi_send(mut self, registry: MultiSendRegistry) -> Self {
        self.multi_send = registry;
        self
    }
}
