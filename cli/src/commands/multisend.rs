use alloy::sol_types::SolCall;
use color_eyre::eyre::{eyre, Result};
use timelock_rs::{decode_multisend, parse_bytes, unpack_transactions, IMultiSend};

use crate::cli::MultisendArgs;
use crate::output::print_entries;

pub fn run(args: MultisendArgs, json: bool) -> Result<()> {
    let calldata = parse_bytes(&args.calldata)?;

    let entries = if args.strict {
        let call = IMultiSend::multiSendCall::abi_decode_validate(&calldata)
            .map_err(|e| eyre!("Not a multiSend(bytes) call: {}", e))?;
        unpack_transactions(&call.transactions)?
    } else {
        decode_multisend(&calldata)
    };

    print_entries(&entries, json);
    Ok(())
}
