//! Event payload types.

use serde::Serialize;

use crate::types::{FeatureKey, TierLevel};

/// The active tier changed (e.g. the venue completed an upgrade purchase).
/// Every previously computed entitlement result is stale once this fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierChangedEvent {
    pub previous: TierLevel,
    pub next: TierLevel,
}

/// A catalog was installed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogLoadedEvent {
    pub tier_count: usize,
}

/// A gated surface asked for a feature the active tier does not grant.
/// Emitted by adapters for upsell analytics, never for enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntitlementDeniedEvent {
    pub feature: FeatureKey,
    pub current_tier: TierLevel,
    pub tier_required: Option<TierLevel>,
}
