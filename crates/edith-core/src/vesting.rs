// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EDITH (ED) — PER-CATEGORY UNLOCK CALCULATOR
//
// Month 0 is the Token Generation Event (TGE). Every function here returns the
// tokens released IN a month, never the cumulative amount.
//
// Policies (selected per category at configuration time):
//   linear                     TGE, cliff lock, then a flat linear amount
//   linear_with_cliff_catchup  as linear, but the first post-cliff month also
//                              releases every month skipped during the cliff
//   activity_capped            TGE, then a fixed flat amount per month from
//                              `start_month`, clamped at the allocation
//   tiered                     independent sub-allocations (see tiered.rs)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};

use crate::tiered::TieredRule;
use crate::PERCENT_SCALE;

/// Default first month of activity-based release (months 1 and 2 stay locked).
pub const DEFAULT_ACTIVITY_START_MONTH: u32 = 3;

fn default_activity_start_month() -> u32 {
    DEFAULT_ACTIVITY_START_MONTH
}

// ─────────────────────────────────────────────────────────────────
// VESTING RULE
// ─────────────────────────────────────────────────────────────────

/// TGE percentage, cliff and linear vesting duration for one allocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VestingRule {
    /// Share of the allocation released at month 0 (0–100)
    pub tge_percent: f64,
    /// Months 1..=cliff release nothing
    #[serde(default)]
    pub cliff_months: u32,
    /// Months over which the post-TGE remainder unlocks, starting at cliff + 1
    pub vesting_months: u32,
}

impl VestingRule {
    pub fn new(tge_percent: f64, cliff_months: u32, vesting_months: u32) -> Self {
        Self {
            tge_percent,
            cliff_months,
            vesting_months,
        }
    }

    /// Tokens released at TGE.
    pub fn tge_amount(&self, allocation: u64) -> f64 {
        allocation as f64 * self.tge_percent / PERCENT_SCALE
    }

    /// Post-TGE remainder divided evenly over the vesting period.
    /// Zero for a zero-length period (rejected by validation anyway).
    pub fn linear_monthly_amount(&self, allocation: u64) -> f64 {
        if self.vesting_months == 0 {
            return 0.0;
        }
        allocation as f64 * (1.0 - self.tge_percent / PERCENT_SCALE) / self.vesting_months as f64
    }

    /// Last month of the schedule window (`cliff + vesting`).
    pub fn window_end(&self) -> u32 {
        self.cliff_months.saturating_add(self.vesting_months)
    }

    /// Plain linear vesting: TGE, cliff lock, `vesting_months` equal releases.
    pub fn linear_unlock(&self, allocation: u64, month: u32) -> f64 {
        if month == 0 {
            return self.tge_amount(allocation);
        }
        if month <= self.cliff_months || month > self.window_end() {
            return 0.0;
        }
        self.linear_monthly_amount(allocation)
    }

    /// Linear vesting whose first post-cliff month also releases the
    /// `cliff_months` linear amounts withheld during the cliff.
    ///
    /// The schedule still releases exactly `vesting_months` linear amounts in
    /// total, so it completes at month `max(vesting_months, cliff + 1)` and
    /// returns 0 for the rest of the `cliff + vesting` window. With no cliff
    /// this is identical to [`VestingRule::linear_unlock`].
    pub fn catchup_unlock(&self, allocation: u64, month: u32) -> f64 {
        if month == 0 {
            return self.tge_amount(allocation);
        }
        if month <= self.cliff_months {
            return 0.0;
        }
        let monthly = self.linear_monthly_amount(allocation);
        let catchup_month = self.cliff_months.saturating_add(1);
        if month == catchup_month {
            return catchup_month.min(self.vesting_months) as f64 * monthly;
        }
        if month <= self.catchup_final_month() {
            monthly
        } else {
            0.0
        }
    }

    /// Last month in which the catch-up schedule releases anything.
    pub fn catchup_final_month(&self) -> u32 {
        self.vesting_months.max(self.cliff_months.saturating_add(1))
    }
}

// ─────────────────────────────────────────────────────────────────
// ACTIVITY-CAPPED RULE
// ─────────────────────────────────────────────────────────────────

/// Activity-gated release: a fixed flat amount per month instead of a
/// proportional one. Community & Ecosystem in the reference configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityRule {
    pub tge_percent: f64,
    #[serde(default)]
    pub cliff_months: u32,
    pub vesting_months: u32,
    /// Tokens released each active month
    pub monthly_amount: u64,
    /// First month with a release; earlier post-TGE months release nothing
    #[serde(default = "default_activity_start_month")]
    pub start_month: u32,
}

impl ActivityRule {
    /// The TGE/cliff/window part of this rule.
    pub fn rule(&self) -> VestingRule {
        VestingRule::new(self.tge_percent, self.cliff_months, self.vesting_months)
    }

    /// First month that releases the flat amount (never inside the cliff).
    pub fn first_release_month(&self) -> u32 {
        self.start_month
            .max(self.cliff_months.saturating_add(1))
            .max(1)
    }

    pub fn unlock(&self, allocation: u64, month: u32) -> f64 {
        let rule = self.rule();
        if month == 0 {
            return rule.tge_amount(allocation);
        }
        let first = self.first_release_month();
        if month < first || month > rule.window_end() {
            return 0.0;
        }
        let flat = self.monthly_amount as f64;
        let released_before = rule.tge_amount(allocation) + (month - first) as f64 * flat;
        let remaining = (allocation as f64 - released_before).max(0.0);
        flat.min(remaining)
    }

    /// True when TGE plus every flat release in the window would exceed the
    /// allocation, i.e. the clamp in [`ActivityRule::unlock`] engages.
    pub fn saturates(&self, allocation: u64) -> bool {
        let rule = self.rule();
        let first = self.first_release_month();
        let active_months = if first > rule.window_end() {
            0
        } else {
            rule.window_end() - first + 1
        };
        rule.tge_amount(allocation) + active_months as f64 * self.monthly_amount as f64
            > allocation as f64
    }
}

// ─────────────────────────────────────────────────────────────────
// UNLOCK POLICY
// ─────────────────────────────────────────────────────────────────

/// How a category releases its allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum UnlockPolicy {
    Linear(VestingRule),
    LinearWithCliffCatchup(VestingRule),
    ActivityCapped(ActivityRule),
    Tiered(TieredRule),
}

impl UnlockPolicy {
    /// Tokens released in `month` for a category holding `allocation`.
    /// Tiered policies ignore `allocation`: each tier carries its own.
    pub fn unlock(&self, allocation: u64, month: u32) -> f64 {
        match self {
            UnlockPolicy::Linear(rule) => rule.linear_unlock(allocation, month),
            UnlockPolicy::LinearWithCliffCatchup(rule) => rule.catchup_unlock(allocation, month),
            UnlockPolicy::ActivityCapped(rule) => rule.unlock(allocation, month),
            UnlockPolicy::Tiered(tiers) => tiers.unlock(month),
        }
    }

    /// Tokens released at TGE.
    pub fn tge_amount(&self, allocation: u64) -> f64 {
        self.unlock(allocation, 0)
    }

    /// End of the schedule window; no policy releases anything after it.
    /// Catch-up schedules can finish earlier, at
    /// [`VestingRule::catchup_final_month`], and release 0 for the rest of
    /// the window.
    pub fn window_end(&self) -> u32 {
        match self {
            UnlockPolicy::Linear(rule) | UnlockPolicy::LinearWithCliffCatchup(rule) => {
                rule.window_end()
            }
            UnlockPolicy::ActivityCapped(rule) => rule.rule().window_end(),
            UnlockPolicy::Tiered(tiers) => tiers.window_end(),
        }
    }

    /// First month by which the whole allocation has been released.
    /// `None` for activity-capped policies, which may leave a locked residue.
    pub fn release_complete_month(&self) -> Option<u32> {
        match self {
            UnlockPolicy::Linear(rule) => Some(rule.window_end()),
            UnlockPolicy::LinearWithCliffCatchup(rule) => Some(rule.catchup_final_month()),
            UnlockPolicy::ActivityCapped(_) => None,
            UnlockPolicy::Tiered(tiers) => Some(tiers.release_complete_month()),
        }
    }

    /// Config-file name of the policy.
    pub fn kind(&self) -> &'static str {
        match self {
            UnlockPolicy::Linear(_) => "linear",
            UnlockPolicy::LinearWithCliffCatchup(_) => "linear_with_cliff_catchup",
            UnlockPolicy::ActivityCapped(_) => "activity_capped",
            UnlockPolicy::Tiered(_) => "tiered",
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn team() -> VestingRule {
        VestingRule::new(0.0, 12, 108)
    }

    fn community() -> ActivityRule {
        ActivityRule {
            tge_percent: 5.0,
            cliff_months: 0,
            vesting_months: 240,
            monthly_amount: 500_000,
            start_month: 3,
        }
    }

    #[test]
    fn test_tge_amount() {
        let rule = VestingRule::new(25.0, 0, 4);
        assert!((rule.tge_amount(60_000_000) - 15_000_000.0).abs() < EPS);
        assert!((rule.linear_unlock(60_000_000, 0) - 15_000_000.0).abs() < EPS);
    }

    #[test]
    fn test_linear_unlock_window() {
        let rule = VestingRule::new(10.0, 0, 18);
        let monthly = 20_000_000.0 * 0.9 / 18.0;
        for month in 1..=18 {
            assert!((rule.linear_unlock(20_000_000, month) - monthly).abs() < EPS);
        }
        assert_eq!(rule.linear_unlock(20_000_000, 19), 0.0);
        assert_eq!(rule.linear_unlock(20_000_000, 500), 0.0);
    }

    #[test]
    fn test_linear_unlock_with_cliff_releases_full_window() {
        let rule = VestingRule::new(5.0, 12, 108);
        for month in 1..=12 {
            assert_eq!(rule.linear_unlock(200_000_000, month), 0.0);
        }
        let total: f64 = (0..=120).map(|m| rule.linear_unlock(200_000_000, m)).sum();
        assert!((total - 200_000_000.0).abs() < 1e-3);
        assert_eq!(rule.linear_unlock(200_000_000, 121), 0.0);
    }

    #[test]
    fn test_catchup_cliff_lock() {
        let rule = team();
        for month in 0..=12 {
            assert_eq!(
                rule.catchup_unlock(100_000_000, month),
                0.0,
                "Team must release nothing through month 12 (month {})",
                month
            );
        }
    }

    #[test]
    fn test_catchup_first_month_releases_skipped_months() {
        let rule = team();
        let expected = 100_000_000.0 / 108.0 * 13.0;
        let got = rule.catchup_unlock(100_000_000, 13);
        assert!((got - expected).abs() < 1e-3, "got {}", got);
        assert!((got - 12_037_037.037).abs() < 1.0);
    }

    #[test]
    fn test_catchup_conserves_and_stops_early() {
        let rule = team();
        let total: f64 = (0..=rule.window_end())
            .map(|m| rule.catchup_unlock(100_000_000, m))
            .sum();
        assert!((total - 100_000_000.0).abs() < 1e-3);
        assert_eq!(rule.catchup_final_month(), 108);
        assert!(rule.catchup_unlock(100_000_000, 108) > 0.0);
        assert_eq!(rule.catchup_unlock(100_000_000, 109), 0.0);
        assert_eq!(rule.catchup_unlock(100_000_000, 120), 0.0);
    }

    #[test]
    fn test_catchup_cliff_longer_than_vesting_releases_everything_at_once() {
        let rule = VestingRule::new(0.0, 10, 4);
        assert!((rule.catchup_unlock(1_000, 11) - 1_000.0).abs() < EPS);
        assert_eq!(rule.catchup_unlock(1_000, 12), 0.0);
    }

    #[test]
    fn test_catchup_without_cliff_matches_linear() {
        let rule = VestingRule::new(5.0, 0, 12);
        for month in 0..=20 {
            assert_eq!(
                rule.catchup_unlock(10_000_000, month),
                rule.linear_unlock(10_000_000, month)
            );
        }
    }

    #[test]
    fn test_activity_flat_release() {
        let rule = community();
        assert!((rule.unlock(480_000_000, 0) - 24_000_000.0).abs() < EPS);
        assert_eq!(rule.unlock(480_000_000, 1), 0.0);
        assert_eq!(rule.unlock(480_000_000, 2), 0.0);
        for month in 3..=48 {
            assert_eq!(rule.unlock(480_000_000, month), 500_000.0);
        }
        assert_eq!(rule.unlock(480_000_000, 240), 500_000.0);
        assert_eq!(rule.unlock(480_000_000, 241), 0.0);
        assert!(!rule.saturates(480_000_000));
    }

    #[test]
    fn test_activity_release_clamped_at_allocation() {
        let rule = ActivityRule {
            tge_percent: 0.0,
            cliff_months: 0,
            vesting_months: 10,
            monthly_amount: 400,
            start_month: 1,
        };
        assert!(rule.saturates(1_000));
        assert_eq!(rule.unlock(1_000, 1), 400.0);
        assert_eq!(rule.unlock(1_000, 2), 400.0);
        assert_eq!(rule.unlock(1_000, 3), 200.0);
        assert_eq!(rule.unlock(1_000, 4), 0.0);
        let total: f64 = (0..=10).map(|m| rule.unlock(1_000, m)).sum();
        assert!((total - 1_000.0).abs() < EPS);
    }

    #[test]
    fn test_activity_respects_cliff() {
        let rule = ActivityRule {
            tge_percent: 0.0,
            cliff_months: 6,
            vesting_months: 12,
            monthly_amount: 10,
            start_month: 3,
        };
        assert_eq!(rule.first_release_month(), 7);
        assert_eq!(rule.unlock(1_000, 6), 0.0);
        assert_eq!(rule.unlock(1_000, 7), 10.0);
    }

    #[test]
    fn test_policy_dispatch() {
        let rule = team();
        let linear = UnlockPolicy::Linear(rule);
        let catchup = UnlockPolicy::LinearWithCliffCatchup(rule);
        let monthly = rule.linear_monthly_amount(100_000_000);
        assert!((linear.unlock(100_000_000, 13) - monthly).abs() < EPS);
        assert!((catchup.unlock(100_000_000, 13) - 13.0 * monthly).abs() < 1e-3);
        assert_eq!(linear.kind(), "linear");
        assert_eq!(catchup.kind(), "linear_with_cliff_catchup");
        assert_eq!(catchup.window_end(), 120);
    }

    #[test]
    fn test_release_complete_month() {
        let vc = UnlockPolicy::LinearWithCliffCatchup(VestingRule::new(5.0, 6, 18));
        assert_eq!(vc.window_end(), 24);
        assert_eq!(vc.release_complete_month(), Some(18));
        for month in 19..=24 {
            assert_eq!(vc.unlock(60_000_000, month), 0.0);
        }
        assert_eq!(
            UnlockPolicy::Linear(VestingRule::new(5.0, 6, 18)).release_complete_month(),
            Some(24)
        );
        assert_eq!(
            UnlockPolicy::ActivityCapped(community()).release_complete_month(),
            None
        );
    }

    #[test]
    fn test_policy_toml_tagging() {
        let policy: UnlockPolicy = toml::from_str(
            r#"
            policy = "linear_with_cliff_catchup"
            tge_percent = 5.0
            cliff_months = 6
            vesting_months = 18
            "#,
        )
        .unwrap();
        assert_eq!(
            policy,
            UnlockPolicy::LinearWithCliffCatchup(VestingRule::new(5.0, 6, 18))
        );

        let activity: UnlockPolicy = toml::from_str(
            r#"
            policy = "activity_capped"
            tge_percent = 5.0
            vesting_months = 240
            monthly_amount = 500000
            "#,
        )
        .unwrap();
        match activity {
            UnlockPolicy::ActivityCapped(rule) => {
                assert_eq!(rule.start_month, DEFAULT_ACTIVITY_START_MONTH);
                assert_eq!(rule.cliff_months, 0);
            }
            other => panic!("Expected ActivityCapped, got {:?}", other),
        }
    }
}
