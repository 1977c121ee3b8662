//! Per-tier usage limits.
//!
//! Limits are advisory at the UI level, like the rest of the engine: the
//! host shows progress bars and upsell nudges from these numbers, while hard
//! enforcement stays server-side.

use serde::{Deserialize, Serialize};

/// Fraction of a limit at which usage counts as "near the limit".
const NEAR_LIMIT_RATIO: f64 = 0.8;

/// A single usage ceiling. Serialized as an integer, `-1` meaning unlimited
/// (the convention the host config already uses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Limit {
    Unlimited,
    Max(u32),
}

impl Default for Limit {
    fn default() -> Self {
        Self::Max(0)
    }
}

impl From<i64> for Limit {
    fn from(raw: i64) -> Self {
        if raw < 0 {
            Self::Unlimited
        } else {
            Self::Max(raw.min(u32::MAX as i64) as u32)
        }
    }
}

impl From<Limit> for i64 {
    fn from(limit: Limit) -> Self {
        match limit {
            Limit::Unlimited => -1,
            Limit::Max(n) => n as i64,
        }
    }
}

/// Outcome of checking current usage against a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitCheck {
    /// Comfortably under the ceiling.
    Within { remaining: u32 },
    /// Over 80% of the ceiling; the host may show an upsell nudge.
    NearLimit { remaining: u32 },
    /// At or over the ceiling.
    Exceeded { over: u32 },
}

impl LimitCheck {
    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }
}

impl Limit {
    /// Classify `usage` against this ceiling.
    pub fn check(&self, usage: u32) -> LimitCheck {
        match *self {
            Limit::Unlimited => LimitCheck::Within { remaining: u32::MAX },
            Limit::Max(max) => {
                if usage >= max {
                    LimitCheck::Exceeded { over: usage - max }
                } else if (usage as f64) > (max as f64) * NEAR_LIMIT_RATIO {
                    LimitCheck::NearLimit { remaining: max - usage }
                } else {
                    LimitCheck::Within { remaining: max - usage }
                }
            }
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }
}

/// Usage ceilings for one tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierLimits {
    pub products: Limit,
    pub languages: Limit,
    pub qr_codes: Limit,
    pub orders_per_month: Limit,
    pub staff_accounts: Limit,
    pub venues: Limit,
}
