// CLI-specific lint overrides
#![allow(clippy::print_stdout, reason = "CLI tools print to stdout")]
#![allow(clippy::print_stderr, reason = "CLI tools print to stderr")]
#![allow(clippy::unwrap_used, reason = "CLI can unwrap for user-facing errors")]
#![allow(clippy::expect_used, reason = "CLI can expect for user-facing errors")]

mod bundle;
mod cli;
mod commands;
mod inputs;
mod output;
mod sig_parser;

use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encode(args) => commands::encode::run(args, cli.json),
        Commands::Decode(args) => commands::decode::run(args, cli.json),
        Commands::Hash(args) => commands::hash::run(args, cli.json),
        Commands::Extract(args) => commands::extract::run(args, cli.json),
        Commands::Multisend(args) => commands::multisend::run(args, cli.json),
        Commands::Status(args) => commands::status::run(args, cli.json).await,
    }
}

/// Logs go to stderr so `--json` output stays parseable. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "timelock_rs=debug,timelock=debug",
        _ => "timelock_rs=trace,timelock=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
