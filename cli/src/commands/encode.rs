use color_eyre::eyre::Result;
use timelock_rs::{
    encode_cancel, encode_update_delay, parse_address, parse_b256, parse_u256, EncodedCall,
    TimelockFunction,
};
use tracing::debug;

use crate::cli::{EncodeCommand, TxArgs};
use crate::inputs::{batch_operation, single_operation};
use crate::output::EncodeOutput;

pub fn run(command: EncodeCommand, json: bool) -> Result<()> {
    let (function, encoded, out) = match command {
        EncodeCommand::Schedule { op, delay, out } => {
            let encoded = single_operation(&op)?.schedule(parse_u256(&delay.delay)?);
            (TimelockFunction::Schedule, encoded, out)
        }
        EncodeCommand::ScheduleBatch { batch, delay, out } => {
            let encoded = batch_operation(&batch)?.schedule(parse_u256(&delay.delay)?)?;
            (TimelockFunction::ScheduleBatch, encoded, out)
        }
        EncodeCommand::Execute { op, out } => {
            let encoded = single_operation(&op)?.execute();
            (TimelockFunction::Execute, encoded, out)
        }
        EncodeCommand::ExecuteBatch { batch, out } => {
            let encoded = batch_operation(&batch)?.execute()?;
            (TimelockFunction::ExecuteBatch, encoded, out)
        }
        EncodeCommand::Cancel { id, out } => {
            (TimelockFunction::Cancel, encode_cancel(parse_b256(&id)?), out)
        }
        EncodeCommand::UpdateDelay { delay, out } => (
            TimelockFunction::UpdateDelay,
            encode_update_delay(parse_u256(&delay)?),
            out,
        ),
    };

    debug!(
        function = function.name(),
        len = encoded.calldata.len(),
        "encoded timelock call"
    );

    output(function, encoded, &out)?.print(json);
    Ok(())
}

fn output(function: TimelockFunction, encoded: EncodedCall, out: &TxArgs) -> Result<EncodeOutput> {
    let tx = match &out.timelock {
        Some(timelock) => Some(encoded.clone().into_tx(parse_address(timelock)?)),
        None => None,
    };

    Ok(EncodeOutput {
        function,
        encoded,
        tx,
    })
}
