//! Entitlement resolver and upgrade delta calculator.
//!
//! Pure functions over an immutable [`TierCatalog`]: no I/O, no caching, no
//! shared state. Identical inputs always produce identical results, so many
//! render-pass callers can resolve concurrently without coordination. The
//! active tier is an explicit parameter; the engine never reads it from
//! ambient state, and every previously computed result goes stale the moment
//! the host changes the active tier.

use smallvec::SmallVec;

use crate::catalog::{TierCatalog, TierConfig};
use crate::errors::EntitlementError;
use crate::types::collections::FxHashSet;
use crate::types::{FeatureKey, TierLevel};

/// The resolver's answer to "is feature F enabled for tier T?".
///
/// Not persisted anywhere: consumers re-evaluate on every render rather than
/// memoizing across a tier change.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitlementResult {
    /// Whether `current_tier` grants the queried feature.
    pub is_enabled: bool,
    /// The tier the query was resolved against.
    pub current_tier: TierLevel,
    /// The cheapest tier that grants the feature, set only on denial.
    /// `None` on denial means no tier in the catalog grants it at all — a
    /// configuration signal, not a runtime error.
    pub tier_required: Option<TierLevel>,
    /// The tier immediately above `current_tier`, independent of the
    /// queried feature. Used for generic upgrade messaging.
    pub next_tier: Option<TierLevel>,
    /// Snapshot of the current tier's catalog entry.
    pub tier_config: TierConfig,
}

/// Resolve whether `current_tier` may use `feature`, and if not, which tier
/// first grants it.
pub fn evaluate(
    catalog: &TierCatalog,
    feature: FeatureKey,
    current_tier: TierLevel,
) -> Result<EntitlementResult, EntitlementError> {
    let config = catalog.config(current_tier)?;
    let next_tier = catalog.next_tier(current_tier)?;

    if config.grants(feature) {
        return Ok(EntitlementResult {
            is_enabled: true,
            current_tier,
            tier_required: None,
            next_tier,
            tier_config: config.clone(),
        });
    }

    // First higher-ranked tier that grants the feature, if any.
    let tier_required = catalog
        .above(config.rank)
        .find(|t| t.grants(feature))
        .map(|t| t.id);

    Ok(EntitlementResult {
        is_enabled: false,
        current_tier,
        tier_required,
        next_tier,
        tier_config: config.clone(),
    })
}

/// String-keyed entry point for host-bridge callers.
///
/// A string outside the closed feature enumeration fails with
/// `UnknownFeatureKey` — a stale or misspelled key is a programming error,
/// distinct from a known key a tier simply does not grant.
pub fn evaluate_key(
    catalog: &TierCatalog,
    key: &str,
    current_tier: TierLevel,
) -> Result<EntitlementResult, EntitlementError> {
    let feature = FeatureKey::parse(key).ok_or_else(|| EntitlementError::UnknownFeatureKey {
        key: key.to_string(),
    })?;
    evaluate(catalog, feature, current_tier)
}

/// Features newly unlocked when moving from `from` up to `to`.
///
/// Non-adjacent upgrades are permitted; the result composes the per-step
/// deltas. The returned set carries no ordering — display callers should use
/// [`upgrade_features_sorted`].
pub fn upgrade_features(
    catalog: &TierCatalog,
    from: TierLevel,
    to: TierLevel,
) -> Result<FxHashSet<FeatureKey>, EntitlementError> {
    let (from_cfg, to_cfg) = check_direction(catalog, from, to)?;

    Ok(FeatureKey::ALL
        .iter()
        .copied()
        .filter(|f| to_cfg.grants(*f) && !from_cfg.grants(*f))
        .collect())
}

/// [`upgrade_features`] in feature declaration order, for display surfaces.
pub fn upgrade_features_sorted(
    catalog: &TierCatalog,
    from: TierLevel,
    to: TierLevel,
) -> Result<SmallVec<[FeatureKey; 8]>, EntitlementError> {
    let (from_cfg, to_cfg) = check_direction(catalog, from, to)?;

    // FeatureKey::ALL is already declaration order.
    Ok(FeatureKey::ALL
        .iter()
        .copied()
        .filter(|f| to_cfg.grants(*f) && !from_cfg.grants(*f))
        .collect())
}

/// Price delta of an upgrade, for "what you get" comparison surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeSavings {
    /// Additional dollars per month.
    pub monthly_difference: u32,
    /// Price increase relative to the lower tier, in whole percent.
    pub percentage_increase: u32,
}

/// Compute the price delta of moving from `from` up to `to`.
pub fn upgrade_savings(
    catalog: &TierCatalog,
    from: TierLevel,
    to: TierLevel,
) -> Result<UpgradeSavings, EntitlementError> {
    let (from_cfg, to_cfg) = check_direction(catalog, from, to)?;

    let monthly_difference = to_cfg.price.saturating_sub(from_cfg.price);
    let percentage_increase = if from_cfg.price == 0 {
        0
    } else {
        (monthly_difference as f64 / from_cfg.price as f64 * 100.0).round() as u32
    };

    Ok(UpgradeSavings {
        monthly_difference,
        percentage_increase,
    })
}

/// Validate `rank(to) > rank(from)` and return both configs.
fn check_direction<'a>(
    catalog: &'a TierCatalog,
    from: TierLevel,
    to: TierLevel,
) -> Result<(&'a TierConfig, &'a TierConfig), EntitlementError> {
    let from_cfg = catalog.config(from)?;
    let to_cfg = catalog.config(to)?;

    if to_cfg.rank <= from_cfg.rank {
        return Err(EntitlementError::InvalidUpgradeDirection {
            from: from.as_str().to_string(),
            from_rank: from_cfg.rank,
            to: to.as_str().to_string(),
            to_rank: to_cfg.rank,
        });
    }

    Ok((from_cfg, to_cfg))
}
