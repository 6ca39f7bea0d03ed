//! Supply shocks: month-over-month relative change in circulating supply.
//!
//! `shock[m] = (c[m] - c[m-1]) / c[m-1] * 100`, and 0 when `c[m-1]` is 0.
//! Month 0 has no shock, so the output is one element shorter than the input.

use serde::Serialize;

use crate::supply::SupplyPoint;
use crate::PERCENT_SCALE;

/// Shock level conventionally flagged as high dilution risk. Callers apply
/// it; `supply_shocks` only reports raw values.
pub const HIGH_RISK_SHOCK_PERCENT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShockPoint {
    pub month: u32,
    pub shock_percent: f64,
}

impl ShockPoint {
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.shock_percent > threshold
    }
}

/// Relative change from `previous` to `current`, in percent.
pub fn shock_between(previous: f64, current: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * PERCENT_SCALE
    } else {
        0.0
    }
}

pub fn supply_shocks(series: &[SupplyPoint]) -> Vec<ShockPoint> {
    series
        .windows(2)
        .map(|pair| ShockPoint {
            month: pair[1].month,
            shock_percent: shock_between(pair[0].circulating_percent, pair[1].circulating_percent),
        })
        .collect()
}

/// Largest shock in the series, if any.
pub fn peak_shock(shocks: &[ShockPoint]) -> Option<ShockPoint> {
    shocks
        .iter()
        .copied()
        .fold(None, |peak: Option<ShockPoint>, point| match peak {
            Some(p) if p.shock_percent >= point.shock_percent => Some(p),
            _ => Some(point),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: u32, circulating_percent: f64) -> SupplyPoint {
        SupplyPoint {
            month,
            circulating_percent,
            circulating_tokens: circulating_percent * 10_000_000.0,
            monthly_unlock: 0.0,
        }
    }

    #[test]
    fn test_shock_formula() {
        let shocks = supply_shocks(&[point(0, 10.0), point(1, 12.0), point(2, 12.0)]);
        assert_eq!(shocks.len(), 2);
        assert_eq!(shocks[0].month, 1);
        assert!((shocks[0].shock_percent - 20.0).abs() < 1e-12);
        assert_eq!(shocks[1].shock_percent, 0.0);
    }

    #[test]
    fn test_zero_prior_supply_yields_zero_shock() {
        let shocks = supply_shocks(&[point(0, 0.0), point(1, 0.0), point(2, 5.0), point(3, 10.0)]);
        assert_eq!(shocks[0].shock_percent, 0.0);
        assert_eq!(shocks[1].shock_percent, 0.0);
        assert!((shocks[2].shock_percent - 100.0).abs() < 1e-12);
        assert!(shocks.iter().all(|s| s.shock_percent.is_finite()));
    }

    #[test]
    fn test_short_series() {
        assert!(supply_shocks(&[]).is_empty());
        assert!(supply_shocks(&[point(0, 3.0)]).is_empty());
    }

    #[test]
    fn test_threshold_is_external() {
        let shock = ShockPoint {
            month: 1,
            shock_percent: 5.0,
        };
        assert!(!shock.exceeds(HIGH_RISK_SHOCK_PERCENT));
        assert!(shock.exceeds(4.99));
    }

    #[test]
    fn test_peak_shock() {
        let shocks = supply_shocks(&[point(0, 10.0), point(1, 11.0), point(2, 15.0), point(3, 15.5)]);
        let peak = peak_shock(&shocks).unwrap();
        assert_eq!(peak.month, 2);
        assert_eq!(peak_shock(&[]), None);
    }

    #[test]
    fn test_reference_first_year_shocks() {
        let engine =
            crate::TokenomicsEngine::new(crate::TokenomicsConfig::reference()).unwrap();
        let shocks = supply_shocks(&engine.supply_series(14).unwrap());
        assert!((shocks[0].shock_percent - 30.630_631).abs() < 1e-5);
        assert!((shocks[4].shock_percent - 3.112_45).abs() < 1e-5);
        // VC catch-up at month 7, Team/Advisors/Treasury catch-up at month 13
        assert!(shocks[6].exceeds(HIGH_RISK_SHOCK_PERCENT));
        assert!(!shocks[7].exceeds(HIGH_RISK_SHOCK_PERCENT));
        assert!((shocks[12].shock_percent - 24.778_583).abs() < 1e-5);
    }
}
