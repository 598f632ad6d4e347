//! Encoding utilities for timelock and MultiSend calldata

pub mod cursor;
mod multisend;
mod operation_id;

pub use multisend::{
    decode_multisend, encode_multisend_call, encode_multisend_data, encode_transaction,
    unpack_transactions, ENTRY_HEADER_LEN,
};
pub use operation_id::{hash_operation, hash_operation_batch};
