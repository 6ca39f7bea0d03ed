// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EDITH (ED) — SUPPLY AGGREGATOR
//
// Sums every category's monthly release and accumulates it into circulating
// supply. Circulating supply is cumulative: tokens are never re-locked, so
// the series is non-decreasing month over month. A category that has finished
// its schedule counts as exactly its allocation, and the total never exceeds
// total supply.
//
// The engine owns a validated configuration and is immutable afterwards;
// share it freely across threads.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::Serialize;

use crate::config::{Category, TokenomicsConfig};
use crate::error::{Result, TokenomicsError};
use crate::{MAX_HORIZON_MONTHS, PERCENT_SCALE};

/// Circulating supply at the end of a month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupplyPoint {
    pub month: u32,
    /// Cumulative unlocked tokens as a percentage of total supply
    pub circulating_percent: f64,
    pub circulating_tokens: f64,
    /// Tokens released in this month alone
    pub monthly_unlock: f64,
}

/// One category's release in one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryUnlock {
    pub name: String,
    pub amount: f64,
}

/// Per-category breakdown of one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnlockRow {
    pub month: u32,
    pub categories: Vec<CategoryUnlock>,
    /// Sum of `categories` (this month only)
    pub total_unlocked: f64,
    pub circulating_tokens: f64,
    pub circulating_percent: f64,
}

impl UnlockRow {
    pub fn amount_for(&self, name: &str) -> Option<f64> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.amount)
    }
}

impl From<&UnlockRow> for SupplyPoint {
    fn from(row: &UnlockRow) -> Self {
        SupplyPoint {
            month: row.month,
            circulating_percent: row.circulating_percent,
            circulating_tokens: row.circulating_tokens,
            monthly_unlock: row.total_unlocked,
        }
    }
}

/// A category's share of total supply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationShare {
    pub name: String,
    pub allocation: u64,
    pub percent: f64,
    pub policy: &'static str,
}

#[derive(Debug, Clone)]
pub struct TokenomicsEngine {
    config: TokenomicsConfig,
}

impl TokenomicsEngine {
    /// Validate `config` and build an engine over it.
    pub fn new(config: TokenomicsConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "Tokenomics engine ready: {} {} supply across {} categories",
            config.total_supply,
            config.token_symbol,
            config.categories.len()
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &TokenomicsConfig {
        &self.config
    }

    pub fn total_supply(&self) -> u64 {
        self.config.total_supply
    }

    pub fn categories(&self) -> &[Category] {
        &self.config.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.config.category(name)
    }

    fn require(&self, name: &str) -> Result<&Category> {
        self.category(name)
            .ok_or_else(|| TokenomicsError::UnknownCategory(name.to_string()))
    }

    /// Tokens `name` releases in `month`.
    pub fn unlock(&self, name: &str, month: u32) -> Result<f64> {
        check_horizon(month)?;
        Ok(self.require(name)?.unlock(month))
    }

    /// Tokens `name` has released from TGE through `month`.
    pub fn unlocked_through(&self, name: &str, month: u32) -> Result<f64> {
        check_horizon(month)?;
        Ok(self.require(name)?.unlocked_through(month))
    }

    /// Tokens released across all categories in `month`.
    pub fn total_unlock(&self, month: u32) -> f64 {
        self.categories().iter().map(|c| c.unlock(month)).sum()
    }

    pub fn to_percent(&self, tokens: f64) -> f64 {
        tokens / self.total_supply() as f64 * PERCENT_SCALE
    }

    /// Cumulative circulating tokens at the end of `month`.
    pub fn circulating_tokens(&self, month: u32) -> Result<f64> {
        check_horizon(month)?;
        let released: f64 = self
            .categories()
            .iter()
            .map(|c| c.unlocked_through(month))
            .sum();
        Ok(released.min(self.total_supply() as f64))
    }

    /// Circulating supply right after TGE, in percent.
    pub fn tge_circulating_percent(&self) -> f64 {
        self.to_percent(self.total_unlock(0))
    }

    /// Per-category unlock table for months `0..=through_month`.
    pub fn unlock_table(&self, through_month: u32) -> Result<Vec<UnlockRow>> {
        check_horizon(through_month)?;

        let total_supply = self.total_supply() as f64;
        // Running release per category
        let mut released = vec![0.0; self.categories().len()];
        let rows: Vec<UnlockRow> = (0..=through_month)
            .map(|month| {
                let mut categories = Vec::with_capacity(released.len());
                for (category, released) in self.categories().iter().zip(released.iter_mut()) {
                    let amount = category.unlock(month);
                    *released = if category.fully_released(month) {
                        category.allocation as f64
                    } else {
                        *released + amount
                    };
                    categories.push(CategoryUnlock {
                        name: category.name.clone(),
                        amount,
                    });
                }
                let total_unlocked: f64 = categories.iter().map(|c| c.amount).sum();
                let circulating = released.iter().sum::<f64>().min(total_supply);
                UnlockRow {
                    month,
                    categories,
                    total_unlocked,
                    circulating_tokens: circulating,
                    circulating_percent: self.to_percent(circulating),
                }
            })
            .collect();

        log::debug!("Computed unlock table for months 0..={}", through_month);
        Ok(rows)
    }

    /// Circulating supply for every month in `0..=horizon_months`.
    pub fn supply_series(&self, horizon_months: u32) -> Result<Vec<SupplyPoint>> {
        Ok(self
            .unlock_table(horizon_months)?
            .iter()
            .map(SupplyPoint::from)
            .collect())
    }

    /// Supply series over the configured projection horizon.
    pub fn projection(&self) -> Result<Vec<SupplyPoint>> {
        self.supply_series(self.config.projection_months)
    }

    pub fn allocation_shares(&self) -> Vec<AllocationShare> {
        self.categories()
            .iter()
            .map(|c| AllocationShare {
                name: c.name.clone(),
                allocation: c.allocation,
                percent: self.to_percent(c.allocation as f64),
                policy: c.schedule.kind(),
            })
            .collect()
    }
}

fn check_horizon(month: u32) -> Result<()> {
    if month > MAX_HORIZON_MONTHS {
        return Err(TokenomicsError::HorizonOutOfRange {
            requested: month,
            max: MAX_HORIZON_MONTHS,
        });
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────
