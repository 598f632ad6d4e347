use alloy::primitives::{keccak256, Address, Bytes};
use alloy_dyn_abi::{DynSolType, DynSolValue};
use color_eyre::eyre::{eyre, Result};

/// Parses a function signature and encodes it with arguments
/// e.g., "transfer(address,uint256)" with args ["0x...", "1000"]
pub fn encode_function_call(sig: &str, args: &[String]) -> Result<Bytes> {
    let sig = sig.replace(' ', "");
    let param_types = parse_param_types(&sig)?;

    if param_types.len() != args.len() {
        return Err(eyre!(
            "Expected {} arguments for {}, got {}",
            param_types.len(),
            sig,
            args.len()
        ));
    }

    let values = param_types
        .iter()
        .zip(args)
        .map(|(ty, arg)| parse_arg(ty, arg))
        .collect::<Result<Vec<_>>>()?;

    let mut calldata = keccak256(sig.as_bytes())[..4].to_vec();
    if !values.is_empty() {
        calldata.extend(DynSolValue::Tuple(values).abi_encode_params());
    }

    Ok(Bytes::from(calldata))
}

/// Extracts parameter types from a function signature
/// e.g., "transfer(address,uint256)" -> ["address", "uint256"]
fn parse_param_types(sig: &str) -> Result<Vec<String>> {
    let open_paren = sig.find('(').ok_or_else(|| eyre!("Invalid signature: missing '('"))?;
    let close_paren = sig.rfind(')').ok_or_else(|| eyre!("Invalid signature: missing ')'"))?;

    if close_paren <= open_paren || open_paren == 0 {
        return Err(eyre!("Invalid signature format: {}", sig));
    }

    Ok(split_params(&sig[open_paren + 1..close_paren]))
}

/// Splits on top-level commas, leaving tuple and array contents intact
fn split_params(params: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in params.chars() {
        match c {
            '(' | '[' => {
                depth += 1;
                current.push(c);
            }
            ')' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => {
                out.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    let last = current.trim();
    if !last.is_empty() || !out.is_empty() {
        out.push(last.to_string());
    }
    out
}

/// Parses a single argument according to its Solidity type
fn parse_arg(ty: &str, arg: &str) -> Result<DynSolValue> {
    let sol_type: DynSolType = ty.parse().map_err(|e| eyre!("Invalid type '{}': {}", ty, e))?;
    sol_type
        .coerce_str(arg.trim())
        .map_err(|e| eyre!("Invalid {} argument '{}': {}", ty, arg, e))
}

/// Parses a call specification like "0xAddr:sig(types):arg1,arg2"
pub fn parse_call_spec(spec: &str) -> Result<(Address, Bytes)> {
    let parts: Vec<&str> = spec.splitn(3, ':').collect();
    if parts.len() < 2 {
        return Err(eyre!(
            "Invalid call spec format. Expected '0xAddr:sig(types)' or '0xAddr:sig(types):args'"
        ));
    }

    let to: Address = parts[0]
        .parse()
        .map_err(|e| eyre!("Invalid address '{}': {}", parts[0], e))?;

    let args = match parts.get(2) {
        Some(raw) if !raw.is_empty() => split_params(raw),
        _ => Vec::new(),
    };

    let data = encode_function_call(parts[1], &args)?;
    Ok((to, data))
}
