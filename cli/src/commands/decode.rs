use color_eyre::eyre::Result;
use timelock_rs::{parse_bytes, try_decode_timelock_calldata};

use crate::cli::DecodeArgs;
use crate::output::DecodeOutput;

pub fn run(args: DecodeArgs, json: bool) -> Result<()> {
    let calldata = parse_bytes(&args.calldata)?;

    // Recognized selectors with malformed arguments surface as errors here
    let decoded = try_decode_timelock_calldata(&calldata)?;
    DecodeOutput::new(&calldata, decoded).print(json);

    Ok(())
}
