//! Tokenomics error types

use thiserror::Error;

/// Configuration rejected at load time. Every variant is fatal: the engine
/// never runs against a configuration that produced one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Configuration has no allocation categories")]
    NoCategories,

    #[error("Total supply must be positive")]
    ZeroTotalSupply,

    #[error("Category name must not be empty")]
    EmptyCategoryName,

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Allocations sum to {allocated}, expected total supply {total_supply}")]
    AllocationMismatch { allocated: u128, total_supply: u64 },

    #[error("{category}: tge_percent {value} is outside [0, 100]")]
    TgePercentOutOfRange { category: String, value: f64 },

    #[error("{category}: vesting_months must be positive")]
    ZeroVestingPeriod { category: String },

    #[error("{category}: activity monthly_amount must be positive")]
    ZeroActivityAmount { category: String },

    #[error("{category}: activity start_month must be at least 1")]
    ZeroActivityStart { category: String },

    #[error("{category}: tiered category has no tiers")]
    EmptyTiers { category: String },

    #[error("{category}: duplicate tier {tier}")]
    DuplicateTier { category: String, tier: String },

    #[error("{category}: tiers sum to {tiers_total}, category allocation is {allocation}")]
    TierAllocationMismatch {
        category: String,
        tiers_total: u128,
        allocation: u64,
    },

    #[error("Projection horizon {months} exceeds maximum of {max} months")]
    ProjectionTooLong { months: u32, max: u32 },

    #[error("Fundraising round {round}: price per token must be positive and finite")]
    InvalidRoundPrice { round: String },

    #[error("Fundraising round {round}: {tokens} tokens exceeds total supply")]
    RoundExceedsSupply { round: String, tokens: u64 },

    #[error("Fundraising round {round}: sells {tokens} tokens, category allocation is {allocation}")]
    RoundAllocationMismatch {
        round: String,
        tokens: u64,
        allocation: u64,
    },

    #[error("Market cap projection must be positive and finite")]
    InvalidMarketCap,
}

/// Top-level engine errors
#[derive(Error, Debug)]
pub enum TokenomicsError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Month {requested} is beyond the maximum horizon of {max} months")]
    HorizonOutOfRange { requested: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, TokenomicsError>;
