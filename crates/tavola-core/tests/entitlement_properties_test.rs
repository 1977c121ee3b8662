//! Property tests for the resolver over randomly generated (but always
//! well-formed) catalogs.
//!
//! Catalogs are generated from per-feature unlock ranks, so the monotonic
//! invariant holds by construction and every generated catalog passes
//! validation.

use proptest::prelude::*;

use tavola_core::catalog::{TierBranding, TierCatalog, TierConfig};
use tavola_core::limits::TierLimits;
use tavola_core::resolver::{evaluate, upgrade_features};
use tavola_core::types::collections::FxHashMap;
use tavola_core::types::{FeatureKey, TierLevel};

/// Rank at which each of the 9 features unlocks; 3 means "never".
fn unlock_ranks() -> impl Strategy<Value = [u8; 9]> {
    proptest::array::uniform9(0u8..=3)
}

fn any_tier() -> impl Strategy<Value = TierLevel> {
    (0..TierLevel::ALL.len()).prop_map(|i| TierLevel::ALL[i])
}

fn any_feature() -> impl Strategy<Value = FeatureKey> {
    (0..FeatureKey::ALL.len()).prop_map(|i| FeatureKey::ALL[i])
}

fn build_catalog(unlocks: &[u8; 9]) -> TierCatalog {
    let tiers = TierLevel::ALL
        .iter()
        .enumerate()
        .map(|(rank, id)| {
            let features: FxHashMap<FeatureKey, bool> = FeatureKey::ALL
                .iter()
                .enumerate()
                .map(|(i, f)| (*f, rank as u8 >= unlocks[i]))
                .collect();
            TierConfig {
                id: *id,
                rank: rank as u8,
                name: id.as_str().to_string(),
                price: 29 + 50 * rank as u32,
                tagline: String::new(),
                branding: TierBranding::default(),
                features,
                limits: TierLimits::default(),
            }
        })
        .collect();
    TierCatalog::new(tiers).expect("generated catalog is well-formed")
}

proptest! {
    #[test]
    fn evaluate_is_pure(unlocks in unlock_ranks(), tier in any_tier(), feature in any_feature()) {
        let catalog = build_catalog(&unlocks);
        let a = evaluate(&catalog, feature, tier).unwrap();
        let b = evaluate(&catalog, feature, tier).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn result_is_self_consistent(unlocks in unlock_ranks(), tier in any_tier(), feature in any_feature()) {
        let catalog = build_catalog(&unlocks);
        let result = evaluate(&catalog, feature, tier).unwrap();

        if result.is_enabled {
            prop_assert_eq!(result.tier_required, None);
        } else if let Some(required) = result.tier_required {
            let current_rank = catalog.rank(tier).unwrap();
            let required_rank = catalog.rank(required).unwrap();
            prop_assert!(required_rank > current_rank);
            prop_assert!(catalog.config(required).unwrap().grants(feature));

            // No tier between current and required grants the feature.
            for t in catalog.tiers() {
                if t.rank > current_rank && t.rank < required_rank {
                    prop_assert!(!t.grants(feature));
                }
            }
        }
    }

    #[test]
    fn entitlement_is_monotonic_in_rank(unlocks in unlock_ranks(), feature in any_feature()) {
        let catalog = build_catalog(&unlocks);
        let mut seen_enabled = false;
        for tier in TierLevel::ALL {
            let enabled = evaluate(&catalog, feature, tier).unwrap().is_enabled;
            if seen_enabled {
                prop_assert!(enabled, "grant revoked above an entitled tier");
            }
            seen_enabled |= enabled;
        }
    }

    #[test]
    fn next_tier_ignores_the_feature(unlocks in unlock_ranks(), tier in any_tier(), feature in any_feature()) {
        let catalog = build_catalog(&unlocks);
        let result = evaluate(&catalog, feature, tier).unwrap();
        prop_assert_eq!(result.next_tier, catalog.next_tier(tier).unwrap());
    }

    #[test]
    fn delta_is_exact_and_disjoint(unlocks in unlock_ranks()) {
        let catalog = build_catalog(&unlocks);
        let from = TierLevel::DigitalMenu;
        let to = TierLevel::FullSuite;
        let delta = upgrade_features(&catalog, from, to).unwrap();

        let from_cfg = catalog.config(from).unwrap();
        let to_cfg = catalog.config(to).unwrap();
        for feature in FeatureKey::ALL {
            let in_delta = delta.contains(&feature);
            prop_assert_eq!(in_delta, to_cfg.grants(feature) && !from_cfg.grants(feature));
            if in_delta {
                prop_assert!(!from_cfg.grants(feature));
            }
        }

        // Recomputation is idempotent.
        prop_assert_eq!(&delta, &upgrade_features(&catalog, from, to).unwrap());
    }

    #[test]
    fn required_tier_is_the_unlock_rank(unlocks in unlock_ranks(), feature in any_feature()) {
        let catalog = build_catalog(&unlocks);
        let idx = feature.declaration_index();
        let unlock = unlocks[idx];

        let result = evaluate(&catalog, feature, TierLevel::DigitalMenu).unwrap();
        match unlock {
            0 => prop_assert!(result.is_enabled),
            1 | 2 => {
                prop_assert!(!result.is_enabled);
                let required = result.tier_required.unwrap();
                prop_assert_eq!(catalog.rank(required).unwrap(), unlock);
            }
            _ => {
                prop_assert!(!result.is_enabled);
                prop_assert_eq!(result.tier_required, None);
            }
        }
    }
}
