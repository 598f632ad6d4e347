//! MultiSend transaction packing and unpacking
//!
//! The MultiSend contract expects transactions to be encoded in a packed format:
//! - operation: 1 byte (0 = Call, 1 = DelegateCall)
//! - to: 20 bytes
//! - value: 32 bytes
//! - data length: 32 bytes
//! - data: variable length
//!
//! Entries follow each other with no separator, so the end of one entry is only
//! known from its length word.

use alloy::primitives::Bytes;
use alloy::sol_types::SolCall;
use tracing::{debug, trace};

use super::cursor::{usize_word, ByteCursor};
use crate::contracts::IMultiSend;
use crate::error::DecodeError;
use crate::types::{MultiSendEntry, SafeCall, SafeOperation};

/// Bytes taken by an entry before its data
pub const ENTRY_HEADER_LEN: usize = 1 + 20 + 32 + 32;

/// Encodes a single transaction for MultiSend packed format
///
/// Format: operation (1 byte) | to (20 bytes) | value (32 bytes) | data length (32 bytes) | data
pub fn encode_transaction(call: &impl SafeCall) -> Vec<u8> {
    let data = call.data();

    let mut encoded = Vec::with_capacity(ENTRY_HEADER_LEN + data.len());
    encoded.push(call.operation().as_u8());
    encoded.extend_from_slice(call.to().as_slice());
    encoded.extend_from_slice(&call.value().to_be_bytes::<32>());
    encoded.extend_from_slice(&usize_word(data.len()));
    encoded.extend_from_slice(&data);

    encoded
}

/// Encodes multiple transactions for MultiSend
pub fn encode_multisend_data(calls: &[impl SafeCall]) -> Bytes {
    let mut encoded = Vec::new();

    for call in calls {
        encoded.extend(encode_transaction(call));
    }

    Bytes::from(encoded)
}

/// Builds full `multiSend(bytes)` calldata for the given calls
pub fn encode_multisend_call(calls: &[impl SafeCall]) -> Bytes {
    IMultiSend::multiSendCall {
        transactions: encode_multisend_data(calls),
    }
    .abi_encode()
    .into()
}

/// Walks a packed transaction stream, failing on the first malformed entry
pub fn unpack_transactions(stream: &[u8]) -> Result<Vec<MultiSendEntry>, DecodeError> {
    let mut cursor = ByteCursor::new(stream);
    let mut entries = Vec::new();

    while !cursor.is_empty() {
        entries.push(read_entry(&mut cursor)?);
    }

    Ok(entries)
}

fn read_entry(cursor: &mut ByteCursor<'_>) -> Result<MultiSendEntry, DecodeError> {
    let operation = SafeOperation::try_from(cursor.read_u8()?)?;
    let to = cursor.read_address()?;
    let value = cursor.read_u256()?;
    let len = cursor.read_len()?;
    let data = Bytes::copy_from_slice(cursor.read_bytes(len)?);

    Ok(MultiSendEntry {
        operation,
        to,
        value,
        data,
    })
}

/// Unpacks the transactions of `multiSend(bytes)` calldata
///
/// Used to probe arbitrary calldata, so it never fails: a foreign selector or
/// an undecodable `bytes` argument yields an empty list, and a malformed entry
/// ends the walk with the entries read before it.
pub fn decode_multisend(calldata: &[u8]) -> Vec<MultiSendEntry> {
    if !calldata.starts_with(&IMultiSend::multiSendCall::SELECTOR) {
        return Vec::new();
    }

    let stream = match IMultiSend::multiSendCall::abi_decode_raw(&calldata[4..]) {
        Ok(call) => call.transactions,
        Err(err) => {
            debug!(%err, "multiSend argument is not valid ABI bytes");
            return Vec::new();
        }
    };

    let mut cursor = ByteCursor::new(&stream);
    let mut entries = Vec::new();

    while !cursor.is_empty() {
        let start = cursor.offset();
        match read_entry(&mut cursor) {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                debug!(%err, offset = start, parsed = entries.len(), "stopping at malformed multiSend entry");
                break;
            }
        }
    }

    trace!(count = entries.len(), "unpacked multiSend transactions");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Call;
    use alloy::primitives::{address, U256};

    fn sample_calls() -> Vec<Call> {
        vec![
            Call::new(
                address!("0x1111111111111111111111111111111111111111"),
                U256::from(1000),
                vec![0xa9, 0x05, 0x9c, 0xbb],
            ),
            Call::delegate_call(
                address!("0x2222222222222222222222222222222222222222"),
                Bytes::new(),
            ),
        ]
    }

    #[test]
    fn test_encode_single_transaction() {
        let call = Call::new(
            address!("0x1234567890123456789012345678901234567890"),
            U256::from(1000),
            vec![0xa9, 0x05, 0x9c, 0xbb], // transfer selector
        );

        let encoded = encode_transaction(&call);

        // Check operation byte
        assert_eq!(encoded[0], 0); // Call

        // Check address (bytes 1-20)
        assert_eq!(
            &encoded[1..21],
            address!("0x1234567890123456789012345678901234567890").as_slice()
        );

        // Check value (bytes 21-52)
        let value_bytes = &encoded[21..53];
        assert_eq!(value_bytes[31], 0xe8); // 1000 = 0x3e8
        assert_eq!(value_bytes[30], 0x03);

        // Check data length (bytes 53-84)
        assert_eq!(encoded[84], 4);

        assert_eq!(&encoded[85..], &[0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn test_encode_empty_data() {
        let call = Call::call(
            address!("0x1234567890123456789012345678901234567890"),
            Bytes::new(),
        );

        let encoded = encode_transaction(&call);
        assert_eq!(encoded.len(), ENTRY_HEADER_LEN);
        assert!(encoded[53..85].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_round_trip_zero_one_two_entries() {
        let calls = sample_calls();

        for n in 0..=2 {
            let calldata = encode_multisend_call(&calls[..n]);
            assert_eq!(decode_multisend(&calldata), calls[..n].to_vec());
        }
    }

    #[test]
    fn test_foreign_selector_is_empty() {
        let mut calldata = encode_multisend_call(&sample_calls()).to_vec();
        calldata[0] ^= 0xff;
        assert!(decode_multisend(&calldata).is_empty());
        assert!(decode_multisend(&[]).is_empty());
        assert!(decode_multisend(&[0x8d, 0x80]).is_empty());
    }

    #[test]
    fn test_bad_bytes_wrapper_is_empty() {
        // Selector followed by an offset pointing far outside the buffer
        let mut calldata = IMultiSend::multiSendCall::SELECTOR.to_vec();
        calldata.extend_from_slice(&usize_word(0x1000));
        assert!(decode_multisend(&calldata).is_empty());
    }

    #[test]
    fn test_truncated_entry_keeps_earlier_entries() {
        let calls = sample_calls();
        let mut stream = encode_multisend_data(&calls).to_vec();
        // Second entry claims 100 bytes of data it does not have
        stream[89 + 53 + 31] = 100;

        let calldata: Bytes = IMultiSend::multiSendCall {
            transactions: stream.clone().into(),
        }
        .abi_encode()
        .into();

        assert_eq!(decode_multisend(&calldata), vec![calls[0].clone()]);
        assert!(matches!(
            unpack_transactions(&stream),
            Err(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn test_invalid_operation_byte_stops_walk() {
        let mut stream = encode_multisend_data(&sample_calls()).to_vec();
        stream[0] = 2;
        assert_eq!(
            unpack_transactions(&stream),
            Err(DecodeError::InvalidOperation(2))
        );
    }

    #[test]
    fn test_encode_multisend_data_length() {
        let calls = vec![
            Call::call(
                address!("0x1111111111111111111111111111111111111111"),
                vec![0x01],
            ),
            Call::call(
                address!("0x2222222222222222222222222222222222222222"),
                vec![0x02],
            ),
        ];

        // 2 * (1 + 20 + 32 + 32 + 1)
        assert_eq!(encode_multisend_data(&calls).len(), 172);
    }
}
