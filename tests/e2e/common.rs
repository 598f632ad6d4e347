//! Common test utilities for E2E tests

use alloy::network::AnyNetwork;
use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::primitives::{address, Address, Bytes};
use alloy::providers::{Provider, RootProvider};

/// Macro to skip tests when no `anvil` binary is on the PATH
#[macro_export]
macro_rules! skip_if_no_anvil {
    () => {
        if std::process::Command::new("anvil")
            .arg("--version")
            .output()
            .is_err()
        {
            eprintln!("Skipping test: anvil not found");
            return;
        }
    };
}

/// Runtime code answering every call with the 32-byte word 1
///
/// PUSH1 1, PUSH1 0, MSTORE, PUSH1 32, PUSH1 0, RETURN
pub const RETURNS_ONE: [u8; 10] = [0x60, 0x01, 0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x00, 0xf3];

/// Runtime code answering every call with a zero word
///
/// PUSH1 32, PUSH1 0, RETURN
pub const RETURNS_ZERO: [u8; 5] = [0x60, 0x20, 0x60, 0x00, 0xf3];

pub const MOCK_DONE: Address = address!("0x00000000000000000000000000000000000d0e00");
pub const MOCK_UNSET: Address = address!("0x0000000000000000000000000000000000000e00");

/// Test harness that spawns Anvil and installs mock timelocks
pub struct TestHarness {
    pub provider: RootProvider<AnyNetwork>,
    pub _anvil: AnvilInstance,
}

impl TestHarness {
    pub async fn new() -> Self {
        let anvil = Anvil::new().spawn();
        let provider = RootProvider::<AnyNetwork>::new_http(anvil.endpoint_url());

        let harness = Self {
            provider,
            _anvil: anvil,
        };
        harness
            .set_code(MOCK_DONE, &RETURNS_ONE)
            .await
            .expect("Failed to install mock");
        harness
            .set_code(MOCK_UNSET, &RETURNS_ZERO)
            .await
            .expect("Failed to install mock");
        harness
    }

    pub async fn set_code(
        &self,
        address: Address,
        code: &[u8],
    ) -> Result<(), alloy::transports::TransportError> {
        self.provider
            .raw_request::<_, ()>("anvil_setCode".into(), (address, Bytes::copy_from_slice(code)))
            .await
    }
}
