//! Typed event channel for entitlement state changes.
//!
//! Replaces the implicit "broadcast a window event and hope" pattern with a
//! typed topic: handlers subscribe through the [`dispatcher::EventDispatcher`]
//! and re-evaluate entitlements when the active tier changes.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::TavolaEventHandler;
pub use types::{CatalogLoadedEvent, EntitlementDeniedEvent, TierChangedEvent};
