//! # tavola-gate
//!
//! Consumer-facing half of the tier entitlement engine: decides how a gated
//! capability should appear when the active tier does not grant it, and
//! exposes the thin adapter contracts every gated surface calls through.
//!
//! ## Components
//! - **fallback** — the four-mode fallback policy selector
//! - **message** — upgrade message and call-to-action composition
//! - **gate** — TierGate: guard, inline badge, and programmatic query adapters
//! - **session** — SessionContext: owns the active tier and the event channel

pub mod fallback;
pub mod gate;
pub mod message;
pub mod session;

pub use fallback::{select_fallback, FallbackMode, FallbackOutcome};
pub use gate::TierGate;
pub use message::{compose_prompt, CtaHandle, MessageOverrides, UpgradeBadge, UpgradePrompt};
pub use session::SessionContext;
