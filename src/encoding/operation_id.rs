//! Operation id derivation
//!
//! Mirrors `TimelockController.hashOperation` / `hashOperationBatch`:
//!
//! ```text
//! id = keccak256(abi.encode(target, value, data, predecessor, salt))
//! id = keccak256(abi.encode(targets, values, payloads, predecessor, salt))
//! ```
//!
//! `abi.encode` of several arguments is the parameter-sequence encoding: no
//! selector and no outer tuple offset. The delay is not part of the id.

use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use alloy::sol_types::SolValue;

/// Computes the id of a single-transaction operation
pub fn hash_operation(
    target: Address,
    value: U256,
    data: &Bytes,
    predecessor: B256,
    salt: B256,
) -> B256 {
    let encoded = (target, value, data.clone(), predecessor, salt).abi_encode_params();
    keccak256(encoded)
}

/// Computes the id of a batch operation
///
/// Arrays of differing lengths still hash; length checks belong to the encoders.
pub fn hash_operation_batch(
    targets: &[Address],
    values: &[U256],
    payloads: &[Bytes],
    predecessor: B256,
    salt: B256,
) -> B256 {
    let encoded = (
        targets.to_vec(),
        values.to_vec(),
        payloads.to_vec(),
        predecessor,
        salt,
    )
        .abi_encode_params();
    keccak256(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::cursor::{address_word, padding, u256_word, usize_word};
    use alloy::primitives::{address, b256, hex};

    const TARGET: Address = address!("0x1234567890123456789012345678901234567890");

    fn transfer_data() -> Bytes {
        // transfer(0x...dEaD, 1000)
        Bytes::from(hex!("a9059cbb000000000000000000000000000000000000000000000000000000000000dead00000000000000000000000000000000000000000000000000000000000003e8"))
    }

    fn salt() -> B256 {
        B256::from(U256::from(42))
    }

    /// Builds the abi.encode preimage word by word
    fn manual_preimage(target: Address, value: U256, data: &[u8], predecessor: B256, salt: B256) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&address_word(target));
        out.extend_from_slice(&u256_word(value));
        out.extend_from_slice(&usize_word(5 * 32));
        out.extend_from_slice(predecessor.as_slice());
        out.extend_from_slice(salt.as_slice());
        out.extend_from_slice(&usize_word(data.len()));
        out.extend_from_slice(data);
        out.extend(std::iter::repeat(0u8).take(padding(data.len())));
        out
    }

    #[test]
    fn test_known_vector() {
        let value = U256::from(1_000_000_000_000_000_000u64);
        let data = transfer_data();

        let id = hash_operation(TARGET, value, &data, B256::ZERO, salt());

        let expected = keccak256(manual_preimage(TARGET, value, &data, B256::ZERO, salt()));
        assert_eq!(id, expected);
        assert_eq!(
            id,
            b256!("0xd05603b4a72d5f0ff11f1cafe27218411e01e1f84b7c93441dbe0fe078056f5d")
        );
    }

    #[test]
    fn test_empty_data_zero_value() {
        let id = hash_operation(TARGET, U256::ZERO, &Bytes::new(), B256::ZERO, salt());
        assert_eq!(
            id,
            b256!("0x0413525e1f46eeca685778eb9c8c2fe0e8956f404bdb954cb8761929c5280006")
        );
    }

    #[test]
    fn test_deterministic() {
        let data = transfer_data();
        let a = hash_operation(TARGET, U256::from(1), &data, B256::ZERO, salt());
        let b = hash_operation(TARGET, U256::from(1), &data, B256::ZERO, salt());
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_field_changes_id() {
        let data = transfer_data();
        let base = hash_operation(TARGET, U256::from(1), &data, B256::ZERO, salt());

        let other_target = address!("0x0000000000000000000000000000000000000001");
        assert_ne!(base, hash_operation(other_target, U256::from(1), &data, B256::ZERO, salt()));
        assert_ne!(base, hash_operation(TARGET, U256::from(2), &data, B256::ZERO, salt()));
        assert_ne!(
            base,
            hash_operation(TARGET, U256::from(1), &Bytes::from(vec![0x01]), B256::ZERO, salt())
        );
        assert_ne!(base, hash_operation(TARGET, U256::from(1), &data, salt(), salt()));
        assert_ne!(base, hash_operation(TARGET, U256::from(1), &data, B256::ZERO, B256::ZERO));
    }

    #[test]
    fn test_empty_batch() {
        let a = hash_operation_batch(&[], &[], &[], B256::ZERO, salt());
        let b = hash_operation_batch(&[], &[], &[], B256::ZERO, salt());
        assert_eq!(a, b);
        assert_eq!(
            a,
            b256!("0x03c61216bdf9b33a02424723c1a623ba6a12753bd1fb70c99827ffd4d268ad85")
        );
    }

    #[test]
    fn test_batch_differs_from_single() {
        let data = transfer_data();
        let single = hash_operation(TARGET, U256::ZERO, &data, B256::ZERO, salt());
        let batch = hash_operation_batch(&[TARGET], &[U256::ZERO], &[data], B256::ZERO, salt());
        assert_ne!(single, batch);
    }
}
