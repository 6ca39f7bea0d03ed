use colored::*;
use edith_core::TokenomicsEngine;

use super::common::{format_tokens, print_json};

pub fn handle(engine: &TokenomicsEngine, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shares = engine.allocation_shares();
    if json {
        return print_json(&shares);
    }

    println!(
        "{:<24} {:>16} {:>8}  {}",
        "Category".bold(),
        "Allocation".bold(),
        "Share".bold(),
        "Policy".bold()
    );
    println!("{}", "─".repeat(76));
    for share in &shares {
        println!(
            "{:<24} {:>16} {:>7.2}%  {}",
            share.name,
            format_tokens(share.allocation as f64),
            share.percent,
            share.policy.dimmed()
        );
    }
    println!("{}", "─".repeat(76));
    println!(
        "{:<24} {:>16} {:>7.2}%",
        "Total".bold(),
        format_tokens(engine.total_supply() as f64).green(),
        shares.iter().map(|s| s.percent).sum::<f64>()
    );
    Ok(())
}
