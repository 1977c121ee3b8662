//! Fallback policy selector.
//!
//! A stateless classifier over `(EntitlementResult, FallbackMode)`: each
//! call yields exactly one outcome, and an enabled result always yields
//! [`FallbackOutcome::Proceed`] no matter which mode the caller declared.

use serde::{Deserialize, Serialize};

use tavola_core::catalog::TierCatalog;
use tavola_core::resolver::EntitlementResult;
use tavola_core::types::FeatureKey;

use crate::message::{compose_badge, compose_prompt, MessageOverrides, UpgradePrompt};

/// How a caller wants a non-entitled capability presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Render nothing; the capability is absent from the surface.
    #[default]
    Suppress,
    /// Show an upgrade message with a call-to-action.
    Prompt,
    /// Render the capability's shell, non-interactive, with a tier badge.
    Disable,
    /// Delegate to a caller-supplied alternative.
    Custom,
}

/// The selector's decision. Consumers match exhaustively; there is no
/// loosely-typed "maybe render something" value to branch on.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackOutcome {
    /// Feature is entitled: the normal capability renders and executes.
    Proceed,
    /// Render nothing.
    Suppressed,
    /// Show the upgrade message and call-to-action.
    Prompt(UpgradePrompt),
    /// Render disabled, overlaid with the unlocking tier's badge.
    Disabled { badge: String },
    /// Caller renders its own alternative from the passed-through result.
    Custom(EntitlementResult),
}

impl FallbackOutcome {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Decide how a gated capability should appear.
///
/// When the prompt or badge cannot be composed (already at the highest tier
/// and no tier grants the feature — a configuration problem, not a runtime
/// error), the outcome degrades to `Suppressed`.
pub fn select_fallback(
    catalog: &TierCatalog,
    feature: FeatureKey,
    result: &EntitlementResult,
    mode: FallbackMode,
    overrides: Option<&MessageOverrides>,
) -> FallbackOutcome {
    if result.is_enabled {
        return FallbackOutcome::Proceed;
    }

    match mode {
        FallbackMode::Suppress => FallbackOutcome::Suppressed,
        FallbackMode::Prompt => compose_prompt(catalog, feature, result, overrides)
            .map(FallbackOutcome::Prompt)
            .unwrap_or(FallbackOutcome::Suppressed),
        FallbackMode::Disable => compose_badge(catalog, result)
            .map(|badge| FallbackOutcome::Disabled { badge: badge.label })
            .unwrap_or(FallbackOutcome::Suppressed),
        FallbackMode::Custom => FallbackOutcome::Custom(result.clone()),
    }
}
