// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EDITH (ED) - TOKENOMICS CORE
//
// Unlock and circulating-supply projection engine for a fixed-supply token.
// Configuration is validated once; every calculation afterwards is a pure
// function of (configuration, month). Token quantities released in a month
// are real numbers (f64); allocations are whole tokens (u64).
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub mod config;
pub mod error;
pub mod fundraising;
pub mod shock;
pub mod supply;
pub mod tiered;
pub mod vesting;

pub use config::{Category, TokenomicsConfig};
pub use error::{ConfigError, Result, TokenomicsError};
pub use fundraising::{FundraisingRound, MarketCapProjection, RoundSummary};
pub use shock::{supply_shocks, ShockPoint, HIGH_RISK_SHOCK_PERCENT};
pub use supply::{AllocationShare, CategoryUnlock, SupplyPoint, TokenomicsEngine, UnlockRow};
pub use tiered::{tiered_unlock, Tier, TieredRule};
pub use vesting::{ActivityRule, UnlockPolicy, VestingRule};

/// Reference total supply: 1,000,000,000 ED (fixed, non-inflationary)
pub const REFERENCE_TOTAL_SUPPLY: u64 = 1_000_000_000;

/// Default projection horizon: 48 months (4 years after TGE)
pub const DEFAULT_PROJECTION_MONTHS: u32 = 48;

/// Longest horizon any table or series may be requested for (100 years).
/// Anything past this is a caller bug, not a projection.
pub const MAX_HORIZON_MONTHS: u32 = 1_200;

/// Percent scale shared by every `*_percent` field.
pub const PERCENT_SCALE: f64 = 100.0;
