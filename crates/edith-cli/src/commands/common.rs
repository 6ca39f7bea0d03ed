use edith_core::{TokenomicsConfig, TokenomicsEngine};
use serde::Serialize;
use std::path::Path;

/// Shared engine loader. Reads `path` (TOML, or JSON by extension) when
/// given, otherwise falls back to the built-in reference configuration.
/// Used by every subcommand.
pub fn load_engine(path: Option<&Path>) -> Result<TokenomicsEngine, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(format!("Config not found at {}", path.display()).into());
            }
            log::info!("Loading tokenomics config from {}", path.display());
            TokenomicsConfig::load_from_file(path)?
        }
        None => {
            log::debug!("No config given, using reference tokenomics");
            TokenomicsConfig::reference()
        }
    };
    Ok(TokenomicsEngine::new(config)?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Whole tokens with thousands separators: `12037037.04` -> `12,037,037`.
pub fn format_tokens(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0.0 {
        out.insert(0, '-');
    }
    out
}

/// USD with thousands separators and cents.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    let whole = (cents / 100.0).trunc();
    let frac = (cents - whole * 100.0).abs() as u64;
    format!("${}.{:02}", format_tokens(whole), frac)
}
