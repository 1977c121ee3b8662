//! SessionContext: active tier ownership, change notification, and
//! re-evaluation by consumers.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tavola_core::catalog::TierCatalog;
use tavola_core::errors::TavolaErrorCode;
use tavola_core::events::{
    CatalogLoadedEvent, EventDispatcher, TavolaEventHandler, TierChangedEvent,
};
use tavola_core::types::{FeatureKey, TierLevel};

use tavola_gate::SessionContext;

use TierLevel::*;

struct ChangeRecorder {
    changes: Mutex<Vec<TierChangedEvent>>,
    catalog_loads: AtomicUsize,
}

impl ChangeRecorder {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            changes: Mutex::new(Vec::new()),
            catalog_loads: AtomicUsize::new(0),
        })
    }
}

impl TavolaEventHandler for ChangeRecorder {
    fn on_tier_changed(&self, event: &TierChangedEvent) {
        self.changes.lock().unwrap().push(*event);
    }
    fn on_catalog_loaded(&self, _: &CatalogLoadedEvent) {
        self.catalog_loads.fetch_add(1, Ordering::SeqCst);
    }
}

fn session_with_recorder() -> (SessionContext, Arc<ChangeRecorder>) {
    let recorder = ChangeRecorder::new();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(recorder.clone());

    let session = SessionContext::new(
        Arc::new(TierCatalog::builtin()),
        DigitalMenu,
        dispatcher,
    )
    .unwrap();
    (session, recorder)
}

#[test]
fn construction_announces_the_catalog() {
    let (session, recorder) = session_with_recorder();
    assert_eq!(session.active_tier(), DigitalMenu);
    assert_eq!(recorder.catalog_loads.load(Ordering::SeqCst), 1);
}

#[test]
fn initial_tier_must_exist_in_the_catalog() {
    let catalog = Arc::new(TierCatalog::builtin());
    assert!(SessionContext::new(catalog, FullSuite, EventDispatcher::new()).is_ok());

    let short = r#"[
        { "id": "digital-menu", "rank": 0, "name": "digital-menu", "price": 0,
          "features": { "search": true } }
    ]"#;
    let short_catalog = Arc::new(tavola_core::catalog::catalog_from_json(short).unwrap());
    let err = SessionContext::new(short_catalog.clone(), FullSuite, EventDispatcher::new())
        .err()
        .expect("tier outside the catalog must be rejected");
    assert_eq!(err.error_code(), "ENTITLEMENT_UNKNOWN_TIER");
}

#[test]
fn tier_change_to_missing_tier_is_rejected_and_state_unchanged() {
    let short = r#"[
        { "id": "digital-menu", "rank": 0, "name": "digital-menu", "price": 0 },
        { "id": "pre-ordering", "rank": 1, "name": "pre-ordering", "price": 49,
          "features": { "cart": true } }
    ]"#;
    let catalog = Arc::new(tavola_core::catalog::catalog_from_json(short).unwrap());
    let session = SessionContext::new(catalog, DigitalMenu, EventDispatcher::new()).unwrap();

    assert!(session.set_active_tier(FullSuite).is_err());
    assert_eq!(session.active_tier(), DigitalMenu);
}

#[test]
fn tier_change_broadcasts_previous_and_next() {
    let (session, recorder) = session_with_recorder();

    session.set_active_tier(FullSuite).unwrap();
    assert_eq!(session.active_tier(), FullSuite);

    let changes = recorder.changes.lock().unwrap();
    assert_eq!(
        *changes,
        vec![TierChangedEvent {
            previous: DigitalMenu,
            next: FullSuite
        }]
    );
}

#[test]
fn setting_the_same_tier_emits_nothing() {
    let (session, recorder) = session_with_recorder();

    session.set_active_tier(DigitalMenu).unwrap();
    assert!(recorder.changes.lock().unwrap().is_empty());
}

#[test]
fn gates_reflect_the_tier_at_snapshot_time() {
    let (session, _recorder) = session_with_recorder();

    // Before the upgrade: cart gated.
    assert!(!session.gate().is_enabled(FeatureKey::Cart));

    session.set_active_tier(PreOrdering).unwrap();

    // A fresh gate sees the new tier; results from before the change were
    // stale the moment the event fired.
    assert!(session.gate().is_enabled(FeatureKey::Cart));
}

/// A consumer that re-evaluates its entitlement whenever the tier changes —
/// the integration pattern every gated surface follows.
struct CartSurface {
    catalog: Arc<TierCatalog>,
    cart_enabled: AtomicBool,
}

impl TavolaEventHandler for CartSurface {
    fn on_tier_changed(&self, event: &TierChangedEvent) {
        let enabled = tavola_core::resolver::evaluate(&self.catalog, FeatureKey::Cart, event.next)
            .map(|r| r.is_enabled)
            .unwrap_or(false);
        self.cart_enabled.store(enabled, Ordering::SeqCst);
    }
}

#[test]
fn subscribers_reevaluate_on_notification() {
    let catalog = Arc::new(TierCatalog::builtin());
    let surface = Arc::new(CartSurface {
        catalog: catalog.clone(),
        cart_enabled: AtomicBool::new(false),
    });

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(surface.clone());
    let session = SessionContext::new(catalog, DigitalMenu, dispatcher).unwrap();

    session.set_active_tier(PreOrdering).unwrap();
    assert!(surface.cart_enabled.load(Ordering::SeqCst));

    session.set_active_tier(DigitalMenu).unwrap();
    assert!(!surface.cart_enabled.load(Ordering::SeqCst));
}
