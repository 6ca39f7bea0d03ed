//! Fundraising rounds and valuation metrics.
//!
//! Raise per round is `tokens * price`; fully diluted valuation prices the
//! whole fixed supply at a round's price.

use serde::{Deserialize, Serialize};

use crate::config::TokenomicsConfig;
use crate::error::{ConfigError, Result};
use crate::supply::TokenomicsEngine;

/// One token sale round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundraisingRound {
    /// When this matches a category name, `tokens` must equal its allocation
    pub name: String,
    pub tokens: u64,
    /// Price in USD per token
    pub price_per_token: f64,
}

impl FundraisingRound {
    pub fn new(name: &str, tokens: u64, price_per_token: f64) -> Self {
        Self {
            name: name.to_string(),
            tokens,
            price_per_token,
        }
    }

    pub fn amount_raised(&self) -> f64 {
        self.tokens as f64 * self.price_per_token
    }

    pub fn fully_diluted_valuation(&self, total_supply: u64) -> f64 {
        total_supply as f64 * self.price_per_token
    }

    pub(crate) fn validate(&self, config: &TokenomicsConfig) -> std::result::Result<(), ConfigError> {
        if !self.price_per_token.is_finite() || self.price_per_token <= 0.0 {
            return Err(ConfigError::InvalidRoundPrice {
                round: self.name.clone(),
            });
        }
        if self.tokens > config.total_supply {
            return Err(ConfigError::RoundExceedsSupply {
                round: self.name.clone(),
                tokens: self.tokens,
            });
        }
        if let Some(category) = config.category(&self.name) {
            if category.allocation != self.tokens {
                return Err(ConfigError::RoundAllocationMismatch {
                    round: self.name.clone(),
                    tokens: self.tokens,
                    allocation: category.allocation,
                });
            }
        }
        Ok(())
    }
}

/// Derived per-round figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub name: String,
    pub tokens: u64,
    pub price_per_token: f64,
    pub amount_raised: f64,
    pub fully_diluted_valuation: f64,
}

pub fn summarize(rounds: &[FundraisingRound], total_supply: u64) -> Vec<RoundSummary> {
    rounds
        .iter()
        .map(|round| RoundSummary {
            name: round.name.clone(),
            tokens: round.tokens,
            price_per_token: round.price_per_token,
            amount_raised: round.amount_raised(),
            fully_diluted_valuation: round.fully_diluted_valuation(total_supply),
        })
        .collect()
}

pub fn total_raised(rounds: &[FundraisingRound]) -> f64 {
    rounds.iter().map(FundraisingRound::amount_raised).sum()
}

/// FDV at the highest round price (the public listing round).
pub fn listing_fdv(rounds: &[FundraisingRound], total_supply: u64) -> Option<f64> {
    rounds
        .iter()
        .map(|r| r.price_per_token)
        .fold(None, |best: Option<f64>, price| {
            Some(best.map_or(price, |b| b.max(price)))
        })
        .map(|price| price * total_supply as f64)
}

/// Assumed market capitalisation at a future month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketCapProjection {
    pub month: u32,
    /// USD
    pub market_cap: f64,
}

impl MarketCapProjection {
    /// Price implied by spreading the market cap over the tokens circulating
    /// at `self.month`. `None` when nothing circulates yet.
    pub fn implied_price(&self, engine: &TokenomicsEngine) -> Result<Option<f64>> {
        let circulating = engine.circulating_tokens(self.month)?;
        if circulating <= 0.0 {
            return Ok(None);
        }
        Ok(Some(self.market_cap / circulating))
    }
}
