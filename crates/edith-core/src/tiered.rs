//! Tiered (composite) categories.
//!
//! A tiered category is split into independently vesting sub-allocations,
//! e.g. Private Sale buyers grouped by contribution size. Each tier has its
//! own TGE release and its own linear window; the category's release in a
//! month is the sum over its tiers.

use serde::{Deserialize, Serialize};

use crate::vesting::VestingRule;

/// One independently vesting sub-allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub allocation: u64,
    pub tge_percent: f64,
    pub vesting_months: u32,
    /// Tiers normally have no cliff; one with a cliff follows the catch-up policy.
    #[serde(default)]
    pub cliff_months: u32,
}

impl Tier {
    pub fn new(name: &str, allocation: u64, tge_percent: f64, vesting_months: u32) -> Self {
        Self {
            name: name.to_string(),
            allocation,
            tge_percent,
            vesting_months,
            cliff_months: 0,
        }
    }

    pub fn rule(&self) -> VestingRule {
        VestingRule::new(self.tge_percent, self.cliff_months, self.vesting_months)
    }

    /// Amount released in each month of the tier's linear window. Recomputed
    /// exactly from the tier's fields, never rounded or stored in config.
    pub fn monthly_unlock(&self) -> f64 {
        self.rule().linear_monthly_amount(self.allocation)
    }

    pub fn unlock(&self, month: u32) -> f64 {
        self.rule().catchup_unlock(self.allocation, month)
    }
}

/// Tier list of a composite category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredRule {
    pub tiers: Vec<Tier>,
}

impl TieredRule {
    pub fn new(tiers: Vec<Tier>) -> Self {
        Self { tiers }
    }

    pub fn unlock(&self, month: u32) -> f64 {
        tiered_unlock(&self.tiers, month)
    }

    /// Sum of tier allocations (u128 so a bad config cannot overflow).
    pub fn total_allocation(&self) -> u128 {
        self.tiers.iter().map(|t| t.allocation as u128).sum()
    }

    /// Month by which every tier has released its whole allocation.
    pub fn release_complete_month(&self) -> u32 {
        self.tiers
            .iter()
            .map(|t| t.rule().catchup_final_month())
            .max()
            .unwrap_or(0)
    }

    /// Latest window end over all tiers.
    pub fn window_end(&self) -> u32 {
        self.tiers
            .iter()
            .map(|t| t.rule().window_end())
            .max()
            .unwrap_or(0)
    }
}

/// Tokens released in `month` across independent tiers. Tiers whose window
/// has elapsed contribute nothing.
pub fn tiered_unlock(tiers: &[Tier], month: u32) -> f64 {
    tiers.iter().map(|tier| tier.unlock(month)).sum()
}
