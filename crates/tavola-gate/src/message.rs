//! Upgrade message and call-to-action composition.

use serde::Serialize;

use tavola_core::catalog::TierCatalog;
use tavola_core::resolver::EntitlementResult;
use tavola_core::types::{FeatureKey, TierLevel};

/// Opaque handle the host wires to its actual upgrade flow (billing page
/// navigation). The engine never performs navigation or payment itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaHandle(String);

impl CtaHandle {
    pub fn upgrade_to(tier: TierLevel) -> Self {
        Self(format!("upgrade:{tier}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A composed upgrade prompt: message plus an invokable call-to-action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpgradePrompt {
    /// e.g. "Shopping Cart requires pre-ordering".
    pub message: String,
    /// e.g. "Upgrade to pre-ordering".
    pub cta_label: String,
    /// Opaque handle for the host's billing flow.
    pub cta: CtaHandle,
}

/// Payload for the inline badge decorator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpgradeBadge {
    /// Badge text of the tier that unlocks the feature.
    pub label: String,
    /// The tier the badge points at.
    pub tier: TierLevel,
}

/// Caller-supplied message overrides, honored verbatim when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageOverrides {
    pub message: Option<String>,
    pub cta_label: Option<String>,
}

/// The tier an upgrade prompt should point at: the cheapest tier granting
/// the feature, else the next tier up for generic messaging.
pub(crate) fn prompt_target(result: &EntitlementResult) -> Option<TierLevel> {
    result.tier_required.or(result.next_tier)
}

/// Compose the upgrade prompt for a denied feature.
///
/// Returns `None` when there is nothing sensible to say: the caller is
/// already at the highest tier and no tier grants the feature. Callers treat
/// that as "no fallback available" and suppress the surface.
pub fn compose_prompt(
    catalog: &TierCatalog,
    feature: FeatureKey,
    result: &EntitlementResult,
    overrides: Option<&MessageOverrides>,
) -> Option<UpgradePrompt> {
    let target = prompt_target(result)?;
    let config = catalog.config(target).ok()?;

    let message = overrides
        .and_then(|o| o.message.clone())
        .unwrap_or_else(|| format!("{} requires {}", feature.label(), config.branding.badge));
    let cta_label = overrides
        .and_then(|o| o.cta_label.clone())
        .unwrap_or_else(|| format!("Upgrade to {}", config.name));

    Some(UpgradePrompt {
        message,
        cta_label,
        cta: CtaHandle::upgrade_to(target),
    })
}

/// Compose the badge for a denied feature, pointing at the unlocking tier.
pub fn compose_badge(
    catalog: &TierCatalog,
    result: &EntitlementResult,
) -> Option<UpgradeBadge> {
    let target = prompt_target(result)?;
    let config = catalog.config(target).ok()?;

    Some(UpgradeBadge {
        label: config.branding.badge.clone(),
        tier: target,
    })
}
