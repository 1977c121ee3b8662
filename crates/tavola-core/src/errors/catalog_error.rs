//! Catalog construction errors.
//!
//! A malformed catalog is rejected once at load time rather than letting
//! inconsistent grants leak into query results.

use crate::types::{FeatureKey, TierLevel};

use super::error_code::{self, TavolaErrorCode};

/// Errors raised when constructing a [`TierCatalog`](crate::catalog::TierCatalog).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog has no tiers")]
    Empty,

    #[error("Tier '{tier}' appears more than once in the catalog")]
    DuplicateTier { tier: TierLevel },

    #[error("Tier ranks must be unique and contiguous from 0: expected rank {expected}, found {found} on '{tier}'")]
    BadRanks { tier: TierLevel, expected: u8, found: u8 },

    #[error("Feature '{feature}' is granted at '{granted_at}' but revoked at higher tier '{revoked_at}'")]
    NonMonotonicFeature {
        feature: FeatureKey,
        granted_at: TierLevel,
        revoked_at: TierLevel,
    },
}

impl TavolaErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => error_code::CATALOG_EMPTY,
            Self::DuplicateTier { .. } => error_code::CATALOG_DUPLICATE_TIER,
            Self::BadRanks { .. } => error_code::CATALOG_BAD_RANKS,
            Self::NonMonotonicFeature { .. } => error_code::CATALOG_NON_MONOTONIC,
        }
    }
}
