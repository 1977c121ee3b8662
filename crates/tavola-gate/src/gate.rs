//! TierGate — the consumer adapter contracts.
//!
//! Every gated surface in the host (cart buttons, menu quick-adds, loyalty
//! widgets, navigation entries) goes through one of these three calls. All
//! of them delegate to the resolver and the fallback selector, and all of
//! them fail closed: an entitlement miscall logs and renders as suppressed
//! instead of crashing the surrounding view.

use tracing::warn;

use tavola_core::catalog::TierCatalog;
use tavola_core::errors::{EntitlementError, TavolaErrorCode};
use tavola_core::events::{EntitlementDeniedEvent, EventDispatcher};
use tavola_core::resolver::{self, EntitlementResult};
use tavola_core::types::{FeatureKey, TierLevel};

use crate::fallback::{select_fallback, FallbackMode, FallbackOutcome};
use crate::message::{compose_badge, MessageOverrides, UpgradeBadge};

/// A gate bound to one catalog and one resolved active tier.
///
/// Cheap to construct; hosts build a fresh gate per render pass rather than
/// caching one across tier changes.
pub struct TierGate<'a> {
    catalog: &'a TierCatalog,
    current_tier: TierLevel,
    dispatcher: Option<&'a EventDispatcher>,
}

impl<'a> TierGate<'a> {
    pub fn new(catalog: &'a TierCatalog, current_tier: TierLevel) -> Self {
        Self {
            catalog,
            current_tier,
            dispatcher: None,
        }
    }

    /// Attach an event channel so denials surface for upsell analytics.
    pub fn with_dispatcher(mut self, dispatcher: &'a EventDispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn current_tier(&self) -> TierLevel {
        self.current_tier
    }

    /// Resolve the raw entitlement for `feature`.
    pub fn evaluate(&self, feature: FeatureKey) -> Result<EntitlementResult, EntitlementError> {
        resolver::evaluate(self.catalog, feature, self.current_tier)
    }

    /// Wrapping guard: decide how the gated capability should appear.
    pub fn guard(&self, feature: FeatureKey, mode: FallbackMode) -> FallbackOutcome {
        self.guard_with(feature, mode, None)
    }

    /// [`guard`](Self::guard) with caller-supplied message overrides.
    pub fn guard_with(
        &self,
        feature: FeatureKey,
        mode: FallbackMode,
        overrides: Option<&MessageOverrides>,
    ) -> FallbackOutcome {
        let result = match self.evaluate(feature) {
            Ok(result) => result,
            Err(e) => return self.fail_closed(feature, &e),
        };

        if !result.is_enabled {
            if let Some(dispatcher) = self.dispatcher {
                dispatcher.emit_entitlement_denied(&EntitlementDeniedEvent {
                    feature,
                    current_tier: self.current_tier,
                    tier_required: result.tier_required,
                });
            }
        }

        select_fallback(self.catalog, feature, &result, mode, overrides)
    }

    /// Inline badge decorator: the unlocking tier's badge for a denied
    /// feature, `None` when the feature is entitled (no badge to show) or
    /// nothing unlocks it.
    pub fn badge(&self, feature: FeatureKey) -> Option<UpgradeBadge> {
        let result = self.evaluate(feature).ok()?;
        if result.is_enabled {
            return None;
        }
        compose_badge(self.catalog, &result)
    }

    /// Programmatic query: is `feature` entitled for the bound tier?
    /// Fails closed on resolver errors.
    pub fn is_enabled(&self, feature: FeatureKey) -> bool {
        match self.evaluate(feature) {
            Ok(result) => result.is_enabled,
            Err(e) => {
                warn!(
                    code = e.error_code(),
                    feature = feature.as_str(),
                    "Entitlement query failed; failing closed"
                );
                false
            }
        }
    }

    fn fail_closed(&self, feature: FeatureKey, error: &EntitlementError) -> FallbackOutcome {
        warn!(
            code = error.error_code(),
            feature = feature.as_str(),
            tier = self.current_tier.as_str(),
            "Entitlement guard failed; suppressing surface"
        );
        FallbackOutcome::Suppressed
    }
}
