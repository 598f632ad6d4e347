use color_eyre::eyre::Result;
use timelock_rs::{
    decode_timelock_calldata, extract_timelock_calldata, parse_address, parse_bytes,
    MultiSendRegistry,
};

use crate::cli::ExtractArgs;
use crate::output::ExtractOutput;

pub fn run(args: ExtractArgs, json: bool) -> Result<()> {
    let to = parse_address(&args.to)?;
    let data = parse_bytes(&args.data)?;
    let timelock = parse_address(&args.timelock)?;

    let mut registry = if args.no_canonical {
        MultiSendRegistry::empty()
    } else {
        MultiSendRegistry::canonical()
    };
    registry.extend(MultiSendRegistry::from_strs(&args.multisend)?.iter().copied());

    let calldata = extract_timelock_calldata(to, &data, timelock, &registry);
    let decoded = match (&calldata, args.decode) {
        (Some(inner), true) => decode_timelock_calldata(inner),
        _ => None,
    };

    ExtractOutput { calldata, decoded }.print(json);
    Ok(())
}
