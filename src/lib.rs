//! # timelock-rs
//!
//! Calldata codec for OpenZeppelin `TimelockController` contracts owned by a
//! Safe.
//!
//! ## Features
//!
//! - Encoders for `schedule`, `scheduleBatch`, `execute`, `executeBatch`,
//!   `cancel` and `updateDelay`
//! - Selector-dispatched decoder returning a typed [`DecodedCall`]
//! - Operation ids matching `TimelockController.hashOperation` byte-for-byte
//! - MultiSend packing and unpacking, and extraction of the call a Safe
//!   transaction makes to the timelock
//! - Read-only status queries over any alloy provider
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use timelock_rs::{decode_timelock_calldata, Operation, U256};
//!
//! let encoded = Operation::new(target, U256::ZERO, calldata)
//!     .with_salt(salt)
//!     .schedule(U256::from(86_400));
//!
//! // Hand the payload to a Safe for signing
//! let tx = encoded.clone().into_tx(timelock);
//!
//! // Decode it back
//! let decoded = decode_timelock_calldata(&encoded.calldata).unwrap();
//! assert_eq!(decoded.operation_id(), encoded.operation_id);
//! ```
//!
//! ## Finding the timelock call in a Safe transaction
//!
//! ```rust,ignore
//! use timelock_rs::{extract_timelock_calldata, MultiSendRegistry};
//!
//! let registry = MultiSendRegistry::canonical();
//! if let Some(inner) = extract_timelock_calldata(tx.to, &tx.data, timelock, &registry) {
//!     println!("{:?}", timelock_rs::decode_timelock_calldata(&inner));
//! }
//! ```

pub mod config;
pub mod contracts;
pub mod encoding;
pub mod error;
pub mod extract;
pub mod parse;
pub mod status;
pub mod timelock;
pub mod types;

// Re-export main types at crate root
pub use config::{MultiSendRegistry, TimelockConfig};
pub use contracts::{IMultiSend, ITimelockController, IERC20};
pub use encoding::{
    decode_multisend, encode_multisend_call, encode_multisend_data, hash_operation,
    hash_operation_batch, unpack_transactions,
};
pub use error::{DecodeError, Error, Result};
pub use extract::{extract_timelock_calldata, extract_timelock_calldata_str};
pub use parse::{parse_address, parse_b256, parse_bytes, parse_u256};
pub use status::{
    fetch_min_delay, fetch_operation_status, OperationState, OperationStatus, TimelockReader,
};
pub use timelock::{
    decode_timelock_calldata, encode_cancel, encode_execute, encode_execute_batch,
    encode_schedule, encode_schedule_batch, encode_update_delay, try_decode_timelock_calldata,
    DecodedCall, TimelockFunction,
};
pub use types::{
    BatchOperation, Call, EncodedCall, MultiSendEntry, Operation, SafeCall, SafeOperation,
    TimelockTx,
};

// Re-export alloy types that are commonly used
pub use alloy::network::AnyNetwork;
pub use alloy::primitives::{Address, Bytes, B256, U256};
pub use alloy::providers::Provider;
