use crate::{print_info, print_success};
use colored::*;
use edith_core::shock::peak_shock;
use edith_core::{supply_shocks, ShockPoint, SupplyPoint, TokenomicsEngine};
use serde::Serialize;

use super::common::{format_tokens, print_json};

pub fn handle_series(
    engine: &TokenomicsEngine,
    months: u32,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let series = engine.supply_series(months)?;
    if json {
        return print_json(&series);
    }

    print_info(&format!(
        "Circulating supply of {} over {} months",
        engine.config().token_symbol,
        months
    ));
    println!();
    println!(
        "{:>5} {:>18} {:>16} {:>9}",
        "Month".bold(),
        "Circulating".bold(),
        "Unlocked".bold(),
        "Circ %".bold()
    );
    println!("{}", "─".repeat(51));
    for point in &series {
        println!(
            "{:>5} {:>18} {:>16} {:>8.2}%",
            point.month,
            format_tokens(point.circulating_tokens),
            format_tokens(point.monthly_unlock),
            point.circulating_percent
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct ShockReport {
    threshold: f64,
    shocks: Vec<ShockPoint>,
    high_risk_months: Vec<u32>,
}

pub fn handle_shocks(
    engine: &TokenomicsEngine,
    months: u32,
    threshold: f64,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let series = engine.supply_series(months)?;
    let shocks = supply_shocks(&series);
    let high_risk_months = high_risk_months(&shocks, threshold);

    if json {
        return print_json(&ShockReport {
            threshold,
            shocks,
            high_risk_months,
        });
    }

    print_info(&format!(
        "Supply shocks, months 1..={} (high risk above {:.2}%)",
        months, threshold
    ));
    println!();
    println!(
        "{:>5} {:>9} {:>16} {:>10}",
        "Month".bold(),
        "Circ %".bold(),
        "Unlocked".bold(),
        "Shock %".bold()
    );
    println!("{}", "─".repeat(43));
    print_shock_rows(&series, &shocks, threshold);
    println!();

    if high_risk_months.is_empty() {
        print_success("No month exceeds the shock threshold");
    } else {
        let months: Vec<String> = high_risk_months.iter().map(u32::to_string).collect();
        println!(
            "{} {}",
            "High-risk months:".red().bold(),
            months.join(", ")
        );
    }
    if let Some(peak) = peak_shock(&shocks) {
        println!(
            "{} month {} ({:.2}%)",
            "Peak shock:".bold(),
            peak.month,
            peak.shock_percent
        );
    }
    Ok(())
}

fn high_risk_months(shocks: &[ShockPoint], threshold: f64) -> Vec<u32> {
    shocks
        .iter()
        .filter(|s| s.exceeds(threshold))
        .map(|s| s.month)
        .collect()
}

fn print_shock_rows(series: &[SupplyPoint], shocks: &[ShockPoint], threshold: f64) {
    // series[i + 1] pairs with shocks[i]; month 0 has no shock
    for (point, shock) in series.iter().skip(1).zip(shocks) {
        let cell = format!("{:>9.2}%", shock.shock_percent);
        let cell = if shock.exceeds(threshold) {
            cell.red().bold()
        } else {
            cell.normal()
        };
        println!(
            "{:>5} {:>8.2}% {:>16} {}",
            point.month,
            point.circulating_percent,
            format_tokens(point.monthly_unlock),
            cell
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edith_core::{TokenomicsConfig, HIGH_RISK_SHOCK_PERCENT};

    #[test]
    fn test_high_risk_months_reference() {
        let engine = TokenomicsEngine::new(TokenomicsConfig::reference()).unwrap();
        let shocks = supply_shocks(&engine.supply_series(48).unwrap());
        assert_eq!(
            high_risk_months(&shocks, HIGH_RISK_SHOCK_PERCENT),
            vec![1, 2, 3, 4, 7, 13]
        );
        assert_eq!(high_risk_months(&shocks, 1_000.0), Vec::<u32>::new());
    }
}
