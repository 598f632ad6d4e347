use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "timelock")]
#[command(about = "Encode, decode and inspect TimelockController calldata", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build calldata for a timelock function
    #[command(subcommand)]
    Encode(EncodeCommand),

    /// Decode timelock calldata
    Decode(DecodeArgs),

    /// Compute an operation id
    Hash(HashArgs),

    /// Find the timelock call inside a Safe transaction
    Extract(ExtractArgs),

    /// List the entries of a multiSend call
    Multisend(MultisendArgs),

    /// Query the on-chain state of an operation
    Status(StatusArgs),
}

#[derive(Subcommand)]
pub enum EncodeCommand {
    /// schedule(address,uint256,bytes,bytes32,bytes32,uint256)
    Schedule {
        #[command(flatten)]
        op: SingleArgs,
        #[command(flatten)]
        delay: DelayArgs,
        #[command(flatten)]
        out: TxArgs,
    },

    /// scheduleBatch(address[],uint256[],bytes[],bytes32,bytes32,uint256)
    ScheduleBatch {
        #[command(flatten)]
        batch: BatchArgs,
        #[command(flatten)]
        delay: DelayArgs,
        #[command(flatten)]
        out: TxArgs,
    },

    /// execute(address,uint256,bytes,bytes32,bytes32)
    Execute {
        #[command(flatten)]
        op: SingleArgs,
        #[command(flatten)]
        out: TxArgs,
    },

    /// executeBatch(address[],uint256[],bytes[],bytes32,bytes32)
    ExecuteBatch {
        #[command(flatten)]
        batch: BatchArgs,
        #[command(flatten)]
        out: TxArgs,
    },

    /// cancel(bytes32)
    Cancel {
        /// Operation id to cancel
        #[arg(long)]
        id: String,
        #[command(flatten)]
        out: TxArgs,
    },

    /// updateDelay(uint256)
    UpdateDelay {
        /// New minimum delay in seconds
        #[arg(long)]
        delay: String,
        #[command(flatten)]
        out: TxArgs,
    },
}

/// A single-target operation
#[derive(Args, Clone)]
pub struct SingleArgs {
    /// Target address of the scheduled call
    #[arg(long)]
    pub target: String,

    /// ETH value forwarded to the target (in wei)
    #[arg(long, default_value = "0")]
    pub value: String,

    /// Raw calldata for the target
    #[arg(long, conflicts_with = "sig")]
    pub data: Option<String>,

    /// Function signature to encode for the target (e.g., "transfer(address,uint256)")
    #[arg(long)]
    pub sig: Option<String>,

    /// Function arguments for --sig (repeatable)
    #[arg(long = "arg", value_name = "ARG", requires = "sig")]
    pub args: Vec<String>,

    #[command(flatten)]
    pub ids: IdArgs,
}

/// A multi-target operation
#[derive(Args, Clone)]
pub struct BatchArgs {
    /// Call specification (format: "0xAddr:sig(types):arg1,arg2"), repeatable
    #[arg(long = "call", value_name = "CALL")]
    pub calls: Vec<String>,

    /// Path to Safe TX Builder JSON file
    #[arg(long)]
    pub bundle: Option<String>,

    #[command(flatten)]
    pub ids: IdArgs,
}

/// Fields shared by every operation id
#[derive(Args, Clone)]
pub struct IdArgs {
    /// Operation that must be done first (bytes32, zero for none)
    #[arg(long)]
    pub predecessor: Option<String>,

    /// Salt distinguishing otherwise identical operations (bytes32)
    #[arg(long)]
    pub salt: Option<String>,
}

#[derive(Args, Clone)]
pub struct DelayArgs {
    /// Delay in seconds before the operation becomes ready
    #[arg(long)]
    pub delay: String,
}

/// Optional handoff of the calldata as a transaction to the timelock
#[derive(Args, Clone)]
pub struct TxArgs {
    /// Timelock address; when set the output includes the transaction to sign
    #[arg(long, env = "TIMELOCK_ADDRESS")]
    pub timelock: Option<String>,
}

#[derive(Args, Clone)]
pub struct DecodeArgs {
    /// Calldata sent to the timelock
    #[arg(value_name = "CALLDATA")]
    pub calldata: String,
}

#[derive(Args, Clone)]
pub struct HashArgs {
    /// Target address (single operation)
    #[arg(long, conflicts_with_all = ["calls", "bundle"])]
    pub target: Option<String>,

    /// ETH value (single operation, in wei)
    #[arg(long, default_value = "0")]
    pub value: String,

    /// Raw calldata (single operation)
    #[arg(long, default_value = "0x")]
    pub data: String,

    /// Call specification for a batch operation, repeatable
    #[arg(long = "call", value_name = "CALL")]
    pub calls: Vec<String>,

    /// Path to Safe TX Builder JSON file for a batch operation
    #[arg(long)]
    pub bundle: Option<String>,

    #[command(flatten)]
    pub ids: IdArgs,
}

#[derive(Args, Clone)]
pub struct ExtractArgs {
    /// Destination of the Safe transaction
    #[arg(long)]
    pub to: String,

    /// Data of the Safe transaction
    #[arg(long)]
    pub data: String,

    /// Timelock address
    #[arg(long, env = "TIMELOCK_ADDRESS")]
    pub timelock: String,

    /// Additional MultiSend deployment to recognize (repeatable)
    #[arg(long = "multisend", value_name = "ADDR")]
    pub multisend: Vec<String>,

    /// Only recognize the --multisend addresses, not the canonical deployments
    #[arg(long)]
    pub no_canonical: bool,

    /// Decode the extracted calldata
    #[arg(long)]
    pub decode: bool,
}

#[derive(Args, Clone)]
pub struct MultisendArgs {
    /// multiSend(bytes) calldata
    #[arg(value_name = "CALLDATA")]
    pub calldata: String,

    /// Fail on a malformed entry instead of stopping at it
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Clone)]
pub struct StatusArgs {
    /// Operation id
    #[arg(long)]
    pub id: String,

    /// Timelock address
    #[arg(long, env = "TIMELOCK_ADDRESS")]
    pub timelock: String,

    /// RPC endpoint URL
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,
}
