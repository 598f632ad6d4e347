//! Conversion of command-line strings into library types

use alloy::primitives::{Address, Bytes, B256};
use color_eyre::eyre::{eyre, Result};
use timelock_rs::{parse_address, parse_b256, parse_bytes, parse_u256, BatchOperation, Call, Operation};

use crate::bundle::load_bundle;
use crate::cli::{BatchArgs, IdArgs, SingleArgs};
use crate::sig_parser::{encode_function_call, parse_call_spec};

/// Parses an optional bytes32, defaulting to zero
pub fn optional_b256(input: Option<&str>) -> Result<B256> {
    match input {
        Some(s) => Ok(parse_b256(s)?),
        None => Ok(B256::ZERO),
    }
}

pub fn predecessor_and_salt(ids: &IdArgs) -> Result<(B256, B256)> {
    Ok((
        optional_b256(ids.predecessor.as_deref())?,
        optional_b256(ids.salt.as_deref())?,
    ))
}

/// Builds the target payload from either `--data` or `--sig`/`--arg`
pub fn payload(data: Option<&str>, sig: Option<&str>, args: &[String]) -> Result<Bytes> {
    match (data, sig) {
        (Some(data), _) => Ok(parse_bytes(data)?),
        (None, Some(sig)) => encode_function_call(sig, args),
        (None, None) => Ok(Bytes::new()),
    }
}

pub fn single_operation(args: &SingleArgs) -> Result<Operation> {
    let target: Address = parse_address(&args.target)?;
    let value = parse_u256(&args.value)?;
    let data = payload(args.data.as_deref(), args.sig.as_deref(), &args.args)?;
    let (predecessor, salt) = predecessor_and_salt(&args.ids)?;

    Ok(Operation::new(target, value, data)
        .with_predecessor(predecessor)
        .with_salt(salt))
}

/// Collects `--bundle` entries followed by `--call` entries
pub fn batch_calls(bundle: Option<&str>, specs: &[String]) -> Result<Vec<Call>> {
    let mut calls = match bundle {
        Some(path) => load_bundle(path)?,
        None => Vec::new(),
    };

    for spec in specs {
        let (to, data) = parse_call_spec(spec)?;
        calls.push(Call::call(to, data));
    }

    Ok(calls)
}

pub fn batch_operation(args: &BatchArgs) -> Result<BatchOperation> {
    let calls = batch_calls(args.bundle.as_deref(), &args.calls)?;
    if calls.is_empty() {
        return Err(eyre!("No calls specified (use --call or --bundle)"));
    }
    let (predecessor, salt) = predecessor_and_salt(&args.ids)?;

    Ok(BatchOperation::from_calls(&calls)
        .with_predecessor(predecessor)
        .with_salt(salt))
}
