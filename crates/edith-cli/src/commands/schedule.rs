use crate::print_info;
use colored::*;
use edith_core::{TokenomicsEngine, UnlockRow};

use super::common::{format_tokens, print_json};

const MIN_COLUMN: usize = 12;

pub fn handle(
    engine: &TokenomicsEngine,
    months: u32,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = engine.unlock_table(months)?;
    if json {
        return print_json(&table);
    }

    print_info(&format!(
        "Unlocks per category, months 0..={} (month 0 = TGE)",
        months
    ));
    println!();
    print_table(engine, &table);
    Ok(())
}

fn print_table(engine: &TokenomicsEngine, table: &[UnlockRow]) {
    let widths: Vec<usize> = engine
        .categories()
        .iter()
        .map(|c| c.name.len().max(MIN_COLUMN))
        .collect();

    let mut header = format!("{:>5}", "Month");
    for (category, width) in engine.categories().iter().zip(&widths) {
        header.push_str(&format!(" {:>w$}", category.name, w = width));
    }
    header.push_str(&format!(" {:>14} {:>9}", "Total", "Circ %"));
    println!("{}", header.bold());
    println!("{}", "─".repeat(header.chars().count()));

    for row in table {
        let mut line = format!("{:>5}", row.month);
        for (unlock, width) in row.categories.iter().zip(&widths) {
            let cell = format_tokens(unlock.amount);
            if unlock.amount > 0.0 {
                line.push_str(&format!(" {:>w$}", cell, w = width));
            } else {
                line.push_str(&format!(" {:>w$}", cell.dimmed(), w = width));
            }
        }
        line.push_str(&format!(
            " {:>14} {:>8.2}%",
            format_tokens(row.total_unlocked),
            row.circulating_percent
        ));
        println!("{}", line);
    }
}
