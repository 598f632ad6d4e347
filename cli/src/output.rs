use alloy::primitives::{Bytes, FixedBytes, B256, U256};
use serde::Serialize;
use timelock_rs::{
    BatchOperation, DecodedCall, EncodedCall, MultiSendEntry, Operation, OperationState,
    OperationStatus, TimelockFunction, TimelockTx,
};

fn print_json(value: &impl Serialize) {
    println!("{}", serde_json::to_string_pretty(value).unwrap());
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeOutput {
    pub function: TimelockFunction,
    #[serde(flatten)]
    pub encoded: EncodedCall,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx: Option<TimelockTx>,
}

impl EncodeOutput {
    pub fn print(&self, json: bool) {
        if json {
            print_json(self);
        } else {
            println!("Function: {}", self.function.signature());
            if let Some(id) = self.encoded.operation_id {
                println!("Operation Id: {}", id);
            }
            println!("Calldata: {}", self.encoded.calldata);
            if let Some(tx) = &self.tx {
                println!("Transaction:");
                println!("  To: {}", tx.to);
                println!("  Value: {} wei", tx.value);
                println!("  Data: {} bytes", tx.data.len());
            }
        }
    }
}

/// Result of `timelock decode`; the selector is reported even when unknown
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeOutput {
    /// `None` when the calldata is shorter than a selector
    pub selector: Option<FixedBytes<4>>,
    pub recognized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<DecodedCall>,
}

impl DecodeOutput {
    pub fn new(calldata: &[u8], decoded: Option<DecodedCall>) -> Self {
        Self {
            selector: calldata.get(..4).map(FixedBytes::from_slice),
            recognized: decoded.is_some(),
            decoded,
        }
    }

    pub fn print(&self, json: bool) {
        if json {
            print_json(self);
            return;
        }

        match (&self.decoded, self.selector) {
            (Some(decoded), _) => print_decoded(decoded),
            (None, Some(selector)) => {
                println!("Selector: {}", selector);
                println!("  Status: unknown (not a timelock function)");
            }
            (None, None) => println!("Calldata is shorter than a 4-byte selector"),
        }
    }
}

/// Prints the fields of a decoded call
pub fn print_decoded(decoded: &DecodedCall) {
    println!("Selector: {}", FixedBytes::<4>::from(decoded.function().selector()));
    println!("Function: {}", decoded.function().signature());
    match decoded {
        DecodedCall::Schedule { operation, delay, .. } => {
            print_operation(operation);
            println!("  Delay: {} s", delay);
        }
        DecodedCall::ScheduleBatch { batch, delay, .. } => {
            print_batch(batch);
            println!("  Delay: {} s", delay);
        }
        DecodedCall::Execute { operation, .. } => print_operation(operation),
        DecodedCall::ExecuteBatch { batch, .. } => print_batch(batch),
        DecodedCall::Cancel { .. } => {}
        DecodedCall::UpdateDelay { new_delay } => println!("  New Delay: {} s", new_delay),
    }
    if let Some(id) = decoded.operation_id() {
        println!("  Operation Id: {}", id);
    }
}

fn print_operation(operation: &Operation) {
    println!("  Target: {}", operation.target);
    println!("  Value: {} wei", operation.value);
    println!("  Data: {}", operation.data);
    println!("  Predecessor: {}", operation.predecessor);
    println!("  Salt: {}", operation.salt);
}

fn print_batch(batch: &BatchOperation) {
    println!("  Calls ({}):", batch.len());
    for (i, ((target, value), payload)) in batch
        .targets
        .iter()
        .zip(&batch.values)
        .zip(&batch.payloads)
        .enumerate()
    {
        println!("    {}. Target: {}", i + 1, target);
        if !value.is_zero() {
            println!("       Value: {} wei", value);
        }
        println!("       Data: {}", payload);
    }
    println!("  Predecessor: {}", batch.predecessor);
    println!("  Salt: {}", batch.salt);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashOutput {
    pub operation_id: B256,
    pub batch: bool,
}

impl HashOutput {
    pub fn print(&self, json: bool) {
        if json {
            print_json(self);
        } else {
            println!("{}", self.operation_id);
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOutput {
    pub calldata: Option<Bytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<DecodedCall>,
}

impl ExtractOutput {
    pub fn print(&self, json: bool) {
        if json {
            print_json(self);
            return;
        }

        match &self.calldata {
            Some(calldata) => {
                println!("Timelock Calldata: {}", calldata);
                if let Some(decoded) = &self.decoded {
                    print_decoded(decoded);
                }
            }
            None => println!("Transaction does not call the timelock"),
        }
    }
}

pub fn print_entries(entries: &[MultiSendEntry], json: bool) {
    if json {
        print_json(&entries);
        return;
    }

    println!("Entries ({}):", entries.len());
    for (i, entry) in entries.iter().enumerate() {
        println!("  {}. {:?} {}", i + 1, entry.operation, entry.to);
        if !entry.value.is_zero() {
            println!("     Value: {} wei", entry.value);
        }
        println!("     Data: {}", entry.data);
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusOutput {
    #[serde(flatten)]
    pub status: OperationStatus,
    pub state: OperationState,
    pub min_delay: U256,
}

impl StatusOutput {
    pub fn print(&self, json: bool) {
        if json {
            print_json(self);
        } else {
            println!("Operation: {}", self.status.id);
            println!("  State: {:?}", self.state);
            println!("  Timestamp: {}", self.status.timestamp);
            println!("  Min Delay: {} s", self.min_delay);
        }
    }
}
