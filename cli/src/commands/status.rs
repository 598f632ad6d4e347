use alloy::network::AnyNetwork;
use alloy::providers::ProviderBuilder;
use color_eyre::eyre::Result;
use timelock_rs::{parse_address, parse_b256, TimelockReader};

use crate::cli::StatusArgs;
use crate::output::StatusOutput;

pub async fn run(args: StatusArgs, json: bool) -> Result<()> {
    let provider = ProviderBuilder::new()
        .network::<AnyNetwork>()
        .connect_http(args.rpc_url.parse()?);

    let id = parse_b256(&args.id)?;
    let reader = TimelockReader::new(provider, parse_address(&args.timelock)?);

    let status = reader.status(id).await?;
    let min_delay = reader.min_delay().await?;

    StatusOutput {
        state: status.state(),
        status,
        min_delay,
    }
    .print(json);

    Ok(())
}
