use color_eyre::eyre::{eyre, Result};
use timelock_rs::{hash_operation, parse_address, parse_bytes, parse_u256, BatchOperation};

use crate::cli::HashArgs;
use crate::inputs::{batch_calls, predecessor_and_salt};
use crate::output::HashOutput;

pub fn run(args: HashArgs, json: bool) -> Result<()> {
    let (predecessor, salt) = predecessor_and_salt(&args.ids)?;

    let output = match &args.target {
        Some(target) => HashOutput {
            operation_id: hash_operation(
                parse_address(target)?,
                parse_u256(&args.value)?,
                &parse_bytes(&args.data)?,
                predecessor,
                salt,
            ),
            batch: false,
        },
        None if args.bundle.is_some() || !args.calls.is_empty() => {
            let calls = batch_calls(args.bundle.as_deref(), &args.calls)?;
            let batch = BatchOperation::from_calls(&calls)
                .with_predecessor(predecessor)
                .with_salt(salt);
            HashOutput {
                operation_id: batch.id(),
                batch: true,
            }
        }
        None => return Err(eyre!("Specify --target, or --call/--bundle for a batch")),
    };

    output.print(json);
    Ok(())
}
