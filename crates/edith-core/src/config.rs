// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EDITH (ED) — TOKENOMICS CONFIGURATION
//
// Allocation categories, their unlock policies, fundraising rounds and the
// projection horizon. Loaded from TOML (or JSON) and validated once; the
// engine refuses to run on anything `validate()` rejects.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::fundraising::{FundraisingRound, MarketCapProjection};
use crate::tiered::{Tier, TieredRule};
use crate::vesting::{ActivityRule, UnlockPolicy, VestingRule};
use crate::{DEFAULT_PROJECTION_MONTHS, MAX_HORIZON_MONTHS, PERCENT_SCALE, REFERENCE_TOTAL_SUPPLY};

fn default_projection_months() -> u32 {
    DEFAULT_PROJECTION_MONTHS
}

/// One allocation category and the policy that releases it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Whole tokens assigned to this category
    pub allocation: u64,
    pub schedule: UnlockPolicy,
}

impl Category {
    pub fn new(name: &str, allocation: u64, schedule: UnlockPolicy) -> Self {
        Self {
            name: name.to_string(),
            allocation,
            schedule,
        }
    }

    /// Tokens released in `month` (not cumulative). Months past the
    /// schedule window return 0.
    pub fn unlock(&self, month: u32) -> f64 {
        self.schedule.unlock(self.allocation, month)
    }

    /// True once the schedule has released the whole allocation.
    pub fn fully_released(&self, month: u32) -> bool {
        self.schedule
            .release_complete_month()
            .is_some_and(|end| month >= end)
    }

    /// Tokens released from TGE through `month` inclusive. Exactly the
    /// allocation once the schedule is complete.
    pub fn unlocked_through(&self, month: u32) -> f64 {
        if self.fully_released(month) {
            return self.allocation as f64;
        }
        let last = month.min(self.schedule.window_end());
        (0..=last).map(|m| self.unlock(m)).sum()
    }

    pub fn tge_amount(&self) -> f64 {
        self.schedule.tge_amount(self.allocation)
    }

    pub fn window_end(&self) -> u32 {
        self.schedule.window_end()
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyCategoryName);
        }
        match &self.schedule {
            UnlockPolicy::Linear(rule) | UnlockPolicy::LinearWithCliffCatchup(rule) => {
                validate_rule(&self.name, rule)
            }
            UnlockPolicy::ActivityCapped(activity) => {
                validate_rule(&self.name, &activity.rule())?;
                if activity.monthly_amount == 0 {
                    return Err(ConfigError::ZeroActivityAmount {
                        category: self.name.clone(),
                    });
                }
                if activity.start_month == 0 {
                    return Err(ConfigError::ZeroActivityStart {
                        category: self.name.clone(),
                    });
                }
                if activity.saturates(self.allocation) {
                    log::warn!(
                        "{}: flat release of {} per month reaches the allocation inside its window; release will be clamped",
                        self.name,
                        activity.monthly_amount
                    );
                }
                Ok(())
            }
            UnlockPolicy::Tiered(tiered) => self.validate_tiers(tiered),
        }
    }

    fn validate_tiers(&self, tiered: &TieredRule) -> std::result::Result<(), ConfigError> {
        if tiered.tiers.is_empty() {
            return Err(ConfigError::EmptyTiers {
                category: self.name.clone(),
            });
        }
        let mut seen = BTreeSet::new();
        for tier in &tiered.tiers {
            if !seen.insert(tier.name.as_str()) {
                return Err(ConfigError::DuplicateTier {
                    category: self.name.clone(),
                    tier: tier.name.clone(),
                });
            }
            validate_rule(&format!("{}/{}", self.name, tier.name), &tier.rule())?;
        }
        let tiers_total = tiered.total_allocation();
        if tiers_total != self.allocation as u128 {
            return Err(ConfigError::TierAllocationMismatch {
                category: self.name.clone(),
                tiers_total,
                allocation: self.allocation,
            });
        }
        Ok(())
    }
}

fn validate_rule(category: &str, rule: &VestingRule) -> std::result::Result<(), ConfigError> {
    if !rule.tge_percent.is_finite() || !(0.0..=PERCENT_SCALE).contains(&rule.tge_percent) {
        return Err(ConfigError::TgePercentOutOfRange {
            category: category.to_string(),
            value: rule.tge_percent,
        });
    }
    if rule.vesting_months == 0 {
        return Err(ConfigError::ZeroVestingPeriod {
            category: category.to_string(),
        });
    }
    Ok(())
}

/// Complete tokenomics configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenomicsConfig {
    pub token_symbol: String,
    /// Fixed total supply in whole tokens
    pub total_supply: u64,
    /// Default horizon for `TokenomicsEngine::projection`
    #[serde(default = "default_projection_months")]
    pub projection_months: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_market_cap: Option<MarketCapProjection>,
    pub categories: Vec<Category>,
    #[serde(default)]
    pub fundraising: Vec<FundraisingRound>,
}

impl TokenomicsConfig {
    /// The EDITH (ED) reference tokenomics: 1B supply, eight categories,
    /// Private Sale split into three contribution tiers.
    pub fn reference() -> Self {
        let catchup = |tge, cliff, vesting| {
            UnlockPolicy::LinearWithCliffCatchup(VestingRule::new(tge, cliff, vesting))
        };
        let linear = |tge, cliff, vesting| UnlockPolicy::Linear(VestingRule::new(tge, cliff, vesting));

        Self {
            token_symbol: "ED".to_string(),
            total_supply: REFERENCE_TOTAL_SUPPLY,
            projection_months: DEFAULT_PROJECTION_MONTHS,
            projected_market_cap: Some(MarketCapProjection {
                month: 48,
                market_cap: 500_000_000.0,
            }),
            categories: vec![
                Category::new(
                    "Private Sale",
                    30_000_000,
                    UnlockPolicy::Tiered(TieredRule::new(vec![
                        Tier::new(">$10K", 10_000_000, 5.0, 12),
                        Tier::new("$5K-$10K", 10_000_000, 5.0, 6),
                        Tier::new("$0-$5K", 10_000_000, 5.0, 4),
                    ])),
                ),
                Category::new("VC Round", 60_000_000, catchup(5.0, 6, 18)),
                Category::new("Launchpad", 60_000_000, linear(25.0, 0, 4)),
                Category::new("Team", 100_000_000, catchup(0.0, 12, 108)),
                Category::new("Advisors", 50_000_000, catchup(0.0, 12, 108)),
                Category::new("Treasury", 200_000_000, catchup(5.0, 12, 108)),
                Category::new(
                    "Community & Ecosystem",
                    480_000_000,
                    UnlockPolicy::ActivityCapped(ActivityRule {
                        tge_percent: 5.0,
                        cliff_months: 0,
                        vesting_months: 240,
                        monthly_amount: 500_000,
                        start_month: 3,
                    }),
                ),
                Category::new("Exchange & Liquidity", 20_000_000, linear(10.0, 0, 18)),
            ],
            fundraising: vec![
                FundraisingRound::new("Private Sale", 30_000_000, 0.01),
                FundraisingRound::new("VC Round", 60_000_000, 0.015),
                FundraisingRound::new("Launchpad", 60_000_000, 0.02),
            ],
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a configuration file; `.json` is parsed as JSON, anything else as TOML.
    /// The result is NOT validated; `TokenomicsEngine::new` does that.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Save as pretty TOML.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Sum of category allocations (u128 so a bad config cannot overflow).
    pub fn allocated_total(&self) -> u128 {
        self.categories.iter().map(|c| c.allocation as u128).sum()
    }

    /// Validate the whole configuration. Fatal on the first violation.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.total_supply == 0 {
            return Err(ConfigError::ZeroTotalSupply);
        }
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        if self.projection_months > MAX_HORIZON_MONTHS {
            return Err(ConfigError::ProjectionTooLong {
                months: self.projection_months,
                max: MAX_HORIZON_MONTHS,
            });
        }

        let mut seen = BTreeSet::new();
        for category in &self.categories {
            if !seen.insert(category.name.as_str()) {
                return Err(ConfigError::DuplicateCategory(category.name.clone()));
            }
            category.validate()?;
        }

        let allocated = self.allocated_total();
        if allocated != self.total_supply as u128 {
            return Err(ConfigError::AllocationMismatch {
                allocated,
                total_supply: self.total_supply,
            });
        }

        for round in &self.fundraising {
            round.validate(self)?;
        }

        if let Some(projection) = &self.projected_market_cap {
            if !projection.market_cap.is_finite() || projection.market_cap <= 0.0 {
                return Err(ConfigError::InvalidMarketCap);
            }
            if projection.month > MAX_HORIZON_MONTHS {
                return Err(ConfigError::ProjectionTooLong {
                    months: projection.month,
                    max: MAX_HORIZON_MONTHS,
                });
            }
        }

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────
