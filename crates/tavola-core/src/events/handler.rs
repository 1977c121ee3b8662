//! Event handler trait.

use super::types::{CatalogLoadedEvent, EntitlementDeniedEvent, TierChangedEvent};

/// Receives entitlement lifecycle events.
///
/// Every method has a no-op default so handlers implement only the topics
/// they care about. Handlers run synchronously on the emitting thread and
/// must not block.
pub trait TavolaEventHandler: Send + Sync {
    fn on_tier_changed(&self, _event: &TierChangedEvent) {}
    fn on_catalog_loaded(&self, _event: &CatalogLoadedEvent) {}
    fn on_entitlement_denied(&self, _event: &EntitlementDeniedEvent) {}
}
