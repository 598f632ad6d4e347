//! Type definitions for timelock operations and Safe calls

mod call;
mod operation;
mod request;

pub use call::{Call, MultiSendEntry, SafeCall};
pub use operation::SafeOperation;
pub use request::{BatchOperation, EncodedCall, Operation, TimelockTx};

pub(crate) use request::ensure_batch_lengths;
