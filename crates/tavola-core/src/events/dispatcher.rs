//! Event dispatcher — fan-out to registered handlers.

use std::sync::Arc;

use super::handler::TavolaEventHandler;
use super::types::{CatalogLoadedEvent, EntitlementDeniedEvent, TierChangedEvent};

/// Fans events out to every registered handler, in registration order.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn TavolaEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Registration happens at wiring time, before any
    /// events flow; the handler list is read-only afterwards.
    pub fn register(&mut self, handler: Arc<dyn TavolaEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn emit_tier_changed(&self, event: &TierChangedEvent) {
        for handler in &self.handlers {
            handler.on_tier_changed(event);
        }
    }

    pub fn emit_catalog_loaded(&self, event: &CatalogLoadedEvent) {
        for handler in &self.handlers {
            handler.on_catalog_loaded(event);
        }
    }

    pub fn emit_entitlement_denied(&self, event: &EntitlementDeniedEvent) {
        for handler in &self.handlers {
            handler.on_entitlement_denied(event);
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
