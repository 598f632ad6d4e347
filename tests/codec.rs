//! End-to-end codec flows over the public API, no node required

use alloy::primitives::{address, b256, Address, Bytes, B256, U256};
use alloy::sol_types::SolCall;
use timelock_rs::{
    decode_multisend, decode_timelock_calldata, encode_cancel, encode_multisend_call,
    encode_schedule, encode_schedule_batch, extract_timelock_calldata, hash_operation,
    try_decode_timelock_calldata, BatchOperation, Call, DecodedCall, Error, MultiSendRegistry,
    Operation, SafeOperation, TimelockConfig, IERC20,
};

const TIMELOCK: Address = address!("0x7777777777777777777777777777777777777777");
const TARGET: Address = address!("0x1234567890123456789012345678901234567890");
const MULTI_SEND: Address = address!("0x38869bf66a61cF6bDB996A6aE40D5853Fd43B526");

fn transfer_payload() -> Bytes {
    IERC20::transferCall {
        to: address!("0x000000000000000000000000000000000000dEaD"),
        amount: U256::from(1000),
    }
    .abi_encode()
    .into()
}

fn salt() -> B256 {
    B256::from(U256::from(42))
}

#[test]
fn test_schedule_id_matches_reference() {
    let encoded = encode_schedule(
        TARGET,
        U256::from(1_000_000_000_000_000_000u128),
        transfer_payload(),
        B256::ZERO,
        salt(),
        U256::from(86_400),
    );

    assert_eq!(
        encoded.operation_id,
        Some(b256!("0xd05603b4a72d5f0ff11f1cafe27218411e01e1f84b7c93441dbe0fe078056f5d"))
    );
    assert_eq!(&encoded.calldata[..4], &[0x01, 0xd5, 0x06, 0x2a]);
}

#[test]
fn test_schedule_then_cancel_same_id() {
    let op = Operation::new(TARGET, U256::ZERO, transfer_payload()).with_salt(salt());
    let scheduled = op.schedule(U256::from(3600));
    let id = scheduled.operation_id.unwrap();

    let cancel = encode_cancel(id);
    match decode_timelock_calldata(&cancel.calldata) {
        Some(DecodedCall::Cancel { operation_id }) => assert_eq!(operation_id, id),
        other => panic!("expected cancel, got {other:?}"),
    }
}

#[test]
fn test_safe_batch_proposal_flow() {
    // A Safe bundles an ERC20 approval with the scheduleBatch call
    let batch = BatchOperation::new(
        vec![TARGET, TARGET],
        vec![U256::ZERO, U256::from(5)],
        vec![transfer_payload(), Bytes::new()],
    )
    .unwrap()
    .with_salt(salt());
    let scheduled = batch.schedule(U256::from(172_800)).unwrap();

    let safe_calls = vec![
        Call::call(TARGET, transfer_payload()),
        Call::from(scheduled.clone().into_tx(TIMELOCK)),
    ];
    let safe_data = encode_multisend_call(&safe_calls);

    let config = TimelockConfig::new(TIMELOCK);
    let inner = config.extract(MULTI_SEND, &safe_data).expect("timelock call found");
    assert_eq!(inner, scheduled.calldata);

    let decoded = decode_timelock_calldata(&inner).expect("decodes");
    assert_eq!(decoded.operation_id(), scheduled.operation_id);
    assert_eq!(decoded.delay(), Some(U256::from(172_800)));
    match decoded {
        DecodedCall::ScheduleBatch { batch: decoded, .. } => assert_eq!(decoded, batch),
        other => panic!("expected scheduleBatch, got {other:?}"),
    }
}

#[test]
fn test_multisend_entries_preserve_order_and_operation() {
    let calls = vec![
        Call::call(TARGET, vec![0x01]),
        Call::delegate_call(TIMELOCK, vec![0x02, 0x03]).with_value(U256::from(9)),
    ];
    let entries = decode_multisend(&encode_multisend_call(&calls));

    assert_eq!(entries, calls);
    assert_eq!(entries[1].operation, SafeOperation::DelegateCall);
}

#[test]
fn test_extract_ignores_unregistered_executor() {
    let data = encode_multisend_call(&[Call::call(TIMELOCK, vec![0xaa])]);
    let registry = MultiSendRegistry::empty();
    assert_eq!(
        extract_timelock_calldata(MULTI_SEND, &data, TIMELOCK, &registry),
        None
    );
}

#[test]
fn test_mismatched_batch_is_rejected_on_encode() {
    let result = encode_schedule_batch(
        vec![TARGET, TARGET],
        vec![U256::ZERO],
        vec![Bytes::new(), Bytes::new()],
        B256::ZERO,
        B256::ZERO,
        U256::ZERO,
    );

    assert!(matches!(
        result,
        Err(Error::LengthMismatch {
            targets: 2,
            values: 1,
            payloads: 2
        })
    ));
}

#[test]
fn test_truncated_calldata() {
    let encoded = encode_schedule(TARGET, U256::ZERO, transfer_payload(), B256::ZERO, salt(), U256::ZERO);
    // Cut into the payload itself, not just its padding
    let truncated = &encoded.calldata[..encoded.calldata.len() - 32];

    assert_eq!(decode_timelock_calldata(truncated), None);
    assert!(try_decode_timelock_calldata(truncated).is_err());
    assert_eq!(decode_timelock_calldata(&encoded.calldata[..3]), None);
    assert!(matches!(try_decode_timelock_calldata(&[0xde, 0xad, 0xbe, 0xef]), Ok(None)));
}

#[test]
fn test_hash_matches_decoded_id() {
    let payload = transfer_payload();
    let encoded = Operation::new(TARGET, U256::from(7), payload.clone())
        .with_predecessor(B256::repeat_byte(0x11))
        .execute();

    let expected = hash_operation(TARGET, U256::from(7), &payload, B256::repeat_byte(0x11), B256::ZERO);
    assert_eq!(encoded.operation_id, Some(expected));
    assert_eq!(
        decode_timelock_calldata(&encoded.calldata).and_then(|d| d.operation_id()),
        Some(expected)
    );
}

#[test]
fn test_decoded_call_json_shape() {
    let encoded = encode_cancel(B256::repeat_byte(0xab));
    let decoded = decode_timelock_calldata(&encoded.calldata).unwrap();
    let json = serde_json::to_value(&decoded).unwrap();

    assert_eq!(json["function"], "cancel");
    assert_eq!(
        json["operationId"],
        "0xabababababababababababababababababababababababababababababababab"
    );
}
