//! SessionContext — the one place the active tier lives.
//!
//! The engine itself takes the tier as an explicit parameter everywhere; the
//! session context is the host-side object that owns that value, threads it
//! into gates, and broadcasts [`TierChangedEvent`] when an upgrade purchase
//! (or an admin override) changes it. Consumers re-evaluate on notification
//! instead of memoizing stale results.

use std::sync::{Arc, RwLock};

use tracing::info;

use tavola_core::catalog::TierCatalog;
use tavola_core::errors::EntitlementError;
use tavola_core::events::{CatalogLoadedEvent, EventDispatcher, TierChangedEvent};
use tavola_core::types::TierLevel;

use crate::gate::TierGate;

/// Session-scoped entitlement state: the catalog, the active tier, and the
/// event channel. The catalog is immutable for the life of the session;
/// swapping catalogs means building a new context.
pub struct SessionContext {
    catalog: Arc<TierCatalog>,
    active_tier: RwLock<TierLevel>,
    dispatcher: EventDispatcher,
}

impl SessionContext {
    /// Build a session over `catalog` with `initial_tier` active.
    ///
    /// Handlers must already be registered on `dispatcher`; construction
    /// announces the catalog to them. Fails with `UnknownTier` if the
    /// initial tier is not in the catalog.
    pub fn new(
        catalog: Arc<TierCatalog>,
        initial_tier: TierLevel,
        dispatcher: EventDispatcher,
    ) -> Result<Self, EntitlementError> {
        if !catalog.contains(initial_tier) {
            return Err(EntitlementError::UnknownTier {
                tier: initial_tier.as_str().to_string(),
            });
        }

        dispatcher.emit_catalog_loaded(&CatalogLoadedEvent {
            tier_count: catalog.len(),
        });

        Ok(Self {
            catalog,
            active_tier: RwLock::new(initial_tier),
            dispatcher,
        })
    }

    /// The tier currently assigned to the viewer.
    pub fn active_tier(&self) -> TierLevel {
        *self.active_tier.read().expect("active tier lock poisoned")
    }

    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Change the active tier (e.g. after an upgrade purchase).
    ///
    /// Broadcasts [`TierChangedEvent`] so every subscriber re-evaluates its
    /// entitlements; results computed before this call are stale. Setting
    /// the already-active tier is a no-op and emits nothing.
    pub fn set_active_tier(&self, next: TierLevel) -> Result<(), EntitlementError> {
        if !self.catalog.contains(next) {
            return Err(EntitlementError::UnknownTier {
                tier: next.as_str().to_string(),
            });
        }

        let previous = {
            let mut tier = self.active_tier.write().expect("active tier lock poisoned");
            let previous = *tier;
            if previous == next {
                return Ok(());
            }
            *tier = next;
            previous
        };

        info!(previous = previous.as_str(), next = next.as_str(), "Active tier changed");
        self.dispatcher
            .emit_tier_changed(&TierChangedEvent { previous, next });
        Ok(())
    }

    /// A gate bound to a snapshot of the current active tier, wired to the
    /// session's event channel.
    pub fn gate(&self) -> TierGate<'_> {
        TierGate::new(&self.catalog, self.active_tier()).with_dispatcher(&self.dispatcher)
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("active_tier", &self.active_tier())
            .field("tiers", &self.catalog.len())
            .finish()
    }
}
