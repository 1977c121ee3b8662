//! # tavola-core
//!
//! Foundation crate for the Tavola tier entitlement engine.
//! Defines the tier catalog, feature keys, the entitlement resolver,
//! usage limits, errors, config, events, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod events;
pub mod limits;
pub mod resolver;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use catalog::{TierBranding, TierCatalog, TierConfig};
pub use config::VenueConfig;
pub use errors::error_code::TavolaErrorCode;
pub use events::dispatcher::EventDispatcher;
pub use events::handler::TavolaEventHandler;
pub use resolver::{evaluate, upgrade_features, EntitlementResult};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::feature::FeatureKey;
pub use types::tier::TierLevel;
