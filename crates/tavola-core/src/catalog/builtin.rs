//! The three production tiers shipped with the platform.

use crate::limits::{Limit, TierLimits};
use crate::types::collections::FxHashMap;
use crate::types::{FeatureKey, TierLevel};

use super::catalog::TierCatalog;
use super::tier_config::{TierBranding, TierConfig};

fn grants(granted: &[FeatureKey]) -> FxHashMap<FeatureKey, bool> {
    FeatureKey::ALL
        .iter()
        .map(|f| (*f, granted.contains(f)))
        .collect()
}

impl TierCatalog {
    /// The built-in catalog: digital-menu, pre-ordering, full-suite.
    ///
    /// Grants are monotonic by construction; the validator still runs so a
    /// bad edit here fails loudly at startup instead of at query time.
    pub fn builtin() -> Self {
        use FeatureKey::*;

        let tiers = vec![
            TierConfig {
                id: TierLevel::DigitalMenu,
                rank: 0,
                name: "digital-menu".to_string(),
                price: 29,
                tagline: "Your menu, beautifully online".to_string(),
                branding: TierBranding {
                    badge: "digital-menu".to_string(),
                    icon: "book-open".to_string(),
                },
                features: grants(&[Search, MultiLanguage]),
                limits: TierLimits {
                    products: Limit::Max(50),
                    languages: Limit::Max(3),
                    qr_codes: Limit::Max(1),
                    orders_per_month: Limit::Max(0),
                    staff_accounts: Limit::Max(2),
                    venues: Limit::Max(1),
                },
            },
            TierConfig {
                id: TierLevel::PreOrdering,
                rank: 1,
                name: "pre-ordering".to_string(),
                price: 79,
                tagline: "Take orders before guests reach the counter".to_string(),
                branding: TierBranding {
                    badge: "pre-ordering".to_string(),
                    icon: "shopping-cart".to_string(),
                },
                features: grants(&[Search, MultiLanguage, Cart, TableOrdering, Reservations]),
                limits: TierLimits {
                    products: Limit::Max(200),
                    languages: Limit::Max(5),
                    qr_codes: Limit::Max(10),
                    orders_per_month: Limit::Max(500),
                    staff_accounts: Limit::Max(5),
                    venues: Limit::Max(1),
                },
            },
            TierConfig {
                id: TierLevel::FullSuite,
                rank: 2,
                name: "full-suite".to_string(),
                price: 149,
                tagline: "Ordering, loyalty, and analytics in one place".to_string(),
                branding: TierBranding {
                    badge: "full-suite".to_string(),
                    icon: "rocket".to_string(),
                },
                features: grants(&FeatureKey::ALL),
                limits: TierLimits {
                    products: Limit::Unlimited,
                    languages: Limit::Unlimited,
                    qr_codes: Limit::Unlimited,
                    orders_per_month: Limit::Unlimited,
                    staff_accounts: Limit::Unlimited,
                    venues: Limit::Max(5),
                },
            },
        ];

        Self::new(tiers).expect("built-in catalog is well-formed")
    }
}
