//! Query-time entitlement errors.

use super::error_code::{self, TavolaErrorCode};

/// Errors that can occur while resolving an entitlement query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntitlementError {
    #[error("Unknown tier '{tier}': not present in the catalog")]
    UnknownTier { tier: String },

    #[error("Unknown feature key '{key}': not a member of the feature enumeration")]
    UnknownFeatureKey { key: String },

    #[error("Invalid upgrade direction: '{from}' (rank {from_rank}) to '{to}' (rank {to_rank})")]
    InvalidUpgradeDirection {
        from: String,
        from_rank: u8,
        to: String,
        to_rank: u8,
    },
}

impl TavolaErrorCode for EntitlementError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTier { .. } => error_code::UNKNOWN_TIER,
            Self::UnknownFeatureKey { .. } => error_code::UNKNOWN_FEATURE_KEY,
            Self::InvalidUpgradeDirection { .. } => error_code::INVALID_UPGRADE_DIRECTION,
        }
    }
}
