//! Subscription tier identifiers.

use serde::{Deserialize, Serialize};

/// Subscription tier for a venue.
///
/// The identifier is deliberately decoupled from its rank: ordering and
/// display metadata live in the [`TierCatalog`](crate::catalog::TierCatalog),
/// not on the identifier itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TierLevel {
    /// Browse-only digital menu.
    #[default]
    DigitalMenu,
    /// Menu plus cart and pre-ordering.
    PreOrdering,
    /// The full ordering, loyalty, and analytics suite.
    FullSuite,
}

impl TierLevel {
    /// All tiers, in catalog declaration order.
    pub const ALL: [TierLevel; 3] = [Self::DigitalMenu, Self::PreOrdering, Self::FullSuite];

    /// Tier id as string (for config, logging, host bridge).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DigitalMenu => "digital-menu",
            Self::PreOrdering => "pre-ordering",
            Self::FullSuite => "full-suite",
        }
    }

    /// Parse a tier id from its string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "digital-menu" => Some(Self::DigitalMenu),
            "pre-ordering" => Some(Self::PreOrdering),
            "full-suite" => Some(Self::FullSuite),
            _ => None,
        }
    }
}

impl std::fmt::Display for TierLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
