//! The closed set of gateable capabilities.

use serde::{Deserialize, Serialize};

/// All gateable capabilities in the platform.
///
/// This is a closed enumeration: a key outside this set is a programming
/// error (typo or stale key), not a runtime condition. A key that a tier
/// simply does not grant is the normal "not entitled" case and never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKey {
    Cart,
    TableOrdering,
    Engagement,
    Delivery,
    Search,
    Analytics,
    Reservations,
    MultiLanguage,
    WhiteLabel,
}

impl FeatureKey {
    /// All 9 feature keys, in declaration order.
    ///
    /// Declaration order is the canonical display order for callers that
    /// need a stable sort of an otherwise unordered feature set.
    pub const ALL: [FeatureKey; 9] = [
        Self::Cart,
        Self::TableOrdering,
        Self::Engagement,
        Self::Delivery,
        Self::Search,
        Self::Analytics,
        Self::Reservations,
        Self::MultiLanguage,
        Self::WhiteLabel,
    ];

    /// Feature key as string (for config, logging, host bridge).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::TableOrdering => "table_ordering",
            Self::Engagement => "engagement",
            Self::Delivery => "delivery",
            Self::Search => "search",
            Self::Analytics => "analytics",
            Self::Reservations => "reservations",
            Self::MultiLanguage => "multi_language",
            Self::WhiteLabel => "white_label",
        }
    }

    /// Parse a feature key from its string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cart" => Some(Self::Cart),
            "table_ordering" => Some(Self::TableOrdering),
            "engagement" => Some(Self::Engagement),
            "delivery" => Some(Self::Delivery),
            "search" => Some(Self::Search),
            "analytics" => Some(Self::Analytics),
            "reservations" => Some(Self::Reservations),
            "multi_language" => Some(Self::MultiLanguage),
            "white_label" => Some(Self::WhiteLabel),
            _ => None,
        }
    }

    /// Human-readable label, used only for upgrade message composition.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cart => "Shopping Cart",
            Self::TableOrdering => "Table Ordering",
            Self::Engagement => "Loyalty & Engagement",
            Self::Delivery => "Delivery Orders",
            Self::Search => "Menu Search",
            Self::Analytics => "Sales Analytics",
            Self::Reservations => "Table Reservations",
            Self::MultiLanguage => "Multi-language Menu",
            Self::WhiteLabel => "White-label Branding",
        }
    }

    /// Position in declaration order, for stable display sorting.
    pub fn declaration_index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(usize::MAX)
    }
}

impl std::fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
