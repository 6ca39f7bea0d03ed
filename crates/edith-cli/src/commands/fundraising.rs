use crate::print_info;
use colored::*;
use edith_core::fundraising::{listing_fdv, summarize, total_raised, RoundSummary};
use edith_core::TokenomicsEngine;
use serde::Serialize;

use super::common::{format_tokens, format_usd, print_json};

#[derive(Serialize)]
struct FundraisingReport {
    rounds: Vec<RoundSummary>,
    total_raised: f64,
    listing_fdv: Option<f64>,
    implied_price: Option<ImpliedPrice>,
}

#[derive(Serialize)]
struct ImpliedPrice {
    month: u32,
    market_cap: f64,
    price: Option<f64>,
}

pub fn handle(engine: &TokenomicsEngine, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = engine.config();
    let implied_price = match config.projected_market_cap {
        Some(projection) => Some(ImpliedPrice {
            month: projection.month,
            market_cap: projection.market_cap,
            price: projection.implied_price(engine)?,
        }),
        None => None,
    };
    let report = FundraisingReport {
        rounds: summarize(&config.fundraising, config.total_supply),
        total_raised: total_raised(&config.fundraising),
        listing_fdv: listing_fdv(&config.fundraising, config.total_supply),
        implied_price,
    };

    if json {
        return print_json(&report);
    }

    if report.rounds.is_empty() {
        print_info("No fundraising rounds configured");
    } else {
        println!(
            "{:<16} {:>14} {:>10} {:>16} {:>18}",
            "Round".bold(),
            "Tokens".bold(),
            "Price".bold(),
            "Raised".bold(),
            "FDV".bold()
        );
        println!("{}", "─".repeat(78));
        for round in &report.rounds {
            println!(
                "{:<16} {:>14} {:>10} {:>16} {:>18}",
                round.name,
                format_tokens(round.tokens as f64),
                format!("${:.3}", round.price_per_token),
                format_usd(round.amount_raised),
                format_usd(round.fully_diluted_valuation)
            );
        }
        println!("{}", "─".repeat(78));
        println!(
            "{} {}",
            "Total raised:".bold(),
            format_usd(report.total_raised).green()
        );
    }

    if let Some(fdv) = report.listing_fdv {
        println!("{} {}", "Listing FDV:".bold(), format_usd(fdv).cyan());
    }

    if let Some(implied) = &report.implied_price {
        match implied.price {
            Some(price) => println!(
                "{} ${:.4} per {} at month {} ({} market cap)",
                "Implied price:".bold(),
                price,
                config.token_symbol,
                implied.month,
                format_usd(implied.market_cap)
            ),
            None => print_info(&format!(
                "Nothing circulates at month {}, no implied price",
                implied.month
            )),
        }
    }
    Ok(())
}
