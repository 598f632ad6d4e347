//! Status client E2E tests against mock timelocks

use alloy::primitives::{address, B256, U256};
use timelock_rs::status::DONE_TIMESTAMP;
use timelock_rs::{
    fetch_min_delay, fetch_operation_status, Error, Operation, OperationState, TimelockReader,
};

use crate::common::{TestHarness, MOCK_DONE, MOCK_UNSET};
use crate::skip_if_no_anvil;

fn sample_id() -> B256 {
    Operation::new(
        address!("0x1234567890123456789012345678901234567890"),
        U256::ZERO,
        Vec::<u8>::new(),
    )
    .with_salt(B256::from(U256::from(42)))
    .id()
}

#[tokio::test]
async fn test_status_of_unknown_operation() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let status = fetch_operation_status(&harness.provider, MOCK_UNSET, sample_id())
        .await
        .expect("status call failed");

    assert_eq!(status.id, sample_id());
    assert!(!status.exists);
    assert!(!status.pending);
    assert!(status.timestamp.is_zero());
    assert_eq!(status.state(), OperationState::Unset);
}

#[tokio::test]
async fn test_status_of_done_operation() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let reader = TimelockReader::new(&harness.provider, MOCK_DONE);
    assert_eq!(reader.address(), MOCK_DONE);

    let status = reader.status(sample_id()).await.expect("status call failed");
    assert!(status.exists);
    assert!(status.done);
    assert_eq!(status.timestamp, DONE_TIMESTAMP);
    assert_eq!(status.state(), OperationState::Done);
    assert_eq!(
        OperationState::from_timestamp(status.timestamp, U256::from(1_700_000_000u64)),
        OperationState::Done
    );
}

#[tokio::test]
async fn test_min_delay() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let delay = fetch_min_delay(&harness.provider, MOCK_DONE)
        .await
        .expect("getMinDelay call failed");
    assert_eq!(delay, U256::from(1));

    let delay = fetch_min_delay(&harness.provider, MOCK_UNSET)
        .await
        .expect("getMinDelay call failed");
    assert!(delay.is_zero());
}

#[tokio::test]
async fn test_status_without_contract_is_a_fetch_error() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let empty = address!("0x000000000000000000000000000000000000beef");

    let err = fetch_operation_status(&harness.provider, empty, sample_id())
        .await
        .expect_err("call to an account without code should fail");

    assert!(
        matches!(err, Error::Fetch { what: "isOperation", .. }),
        "unexpected error: {err}"
    );
}
