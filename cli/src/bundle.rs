use color_eyre::eyre::{eyre, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use timelock_rs::{parse_address, parse_bytes, parse_u256, Call, SafeOperation};

/// Safe TX Builder JSON format
#[derive(Debug, Deserialize)]
pub struct BundleTransaction {
    pub to: String,
    #[serde(default)]
    pub value: String,
    /// Missing means empty; `null` is what Transaction Builder writes for
    /// contract-method entries, whose calldata it never encodes
    #[serde(default = "empty_data")]
    pub data: Option<String>,
    #[serde(default)]
    pub operation: u8,
}

fn empty_data() -> Option<String> {
    Some(String::new())
}

/// Loads a bundle file and converts to Vec<Call>
pub fn load_bundle(path: &str) -> Result<Vec<Call>> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(eyre!("Bundle file not found: {}", path.display()));
    }

    let content = fs::read_to_string(path)?;
    parse_bundle(&content)
}

/// Parses bundle JSON content
///
/// Accepts either a bare array of transactions or the Transaction Builder
/// export, which nests them under `transactions`.
pub fn parse_bundle(content: &str) -> Result<Vec<Call>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Bundle {
        List(Vec<BundleTransaction>),
        Export { transactions: Vec<BundleTransaction> },
    }

    let transactions = match serde_json::from_str(content)
        .map_err(|e| eyre!("Invalid bundle JSON: {}", e))?
    {
        Bundle::List(txs) | Bundle::Export { transactions: txs } => txs,
    };

    transactions
        .into_iter()
        .enumerate()
        .map(|(index, tx)| convert_transaction(index, tx))
        .collect()
}

fn convert_transaction(index: usize, tx: BundleTransaction) -> Result<Call> {
    let to = parse_address(&tx.to)?;

    let value = match tx.value.trim() {
        "" => Default::default(),
        v => parse_u256(v)?,
    };

    let data = match tx.data.as_deref().map(str::trim) {
        None => {
            return Err(eyre!(
                "Bundle transaction {} (to {}) has \"data\": null; re-export it with \
                 encoded calldata or pass it with --call \"{}:<sig>:<args>\"",
                index,
                to,
                to
            ))
        }
        Some("") => Default::default(),
        Some(d) => parse_bytes(d)?,
    };

    let operation = SafeOperation::try_from(tx.operation)?;
    if operation != SafeOperation::Call {
        return Err(eyre!(
            "Transaction to {} is a delegatecall; the timelock can only call",
            to
        ));
    }

    Ok(Call::new(to, value, data))
}
