use crate::{print_info, print_success};
use colored::*;
use edith_core::TokenomicsEngine;
use serde::Serialize;

use super::common::{format_tokens, print_json};

#[derive(Serialize)]
struct ValidationReport<'a> {
    valid: bool,
    token_symbol: &'a str,
    total_supply: u64,
    categories: usize,
    projection_months: u32,
    tge_circulating_percent: f64,
}

pub fn handle(engine: &TokenomicsEngine, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = engine.config();

    if json {
        return print_json(&ValidationReport {
            valid: true,
            token_symbol: &config.token_symbol,
            total_supply: config.total_supply,
            categories: config.categories.len(),
            projection_months: config.projection_months,
            tge_circulating_percent: engine.tge_circulating_percent(),
        });
    }

    print_success(&format!(
        "Configuration valid: {} categories, {} {} total supply",
        config.categories.len(),
        format_tokens(config.total_supply as f64),
        config.token_symbol
    ));
    print_info(&format!(
        "Projection horizon: {} months",
        config.projection_months
    ));
    println!(
        "{} {}",
        "Circulating at TGE:".bold(),
        format!("{:.2}%", engine.tge_circulating_percent()).cyan()
    );
    Ok(())
}
