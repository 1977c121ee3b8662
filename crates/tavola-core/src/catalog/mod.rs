//! Tier catalog — the canonical, ordered set of tier definitions.
//!
//! ## Components
//! - **tier_config** — one entry per tier: rank, display metadata, grants, limits
//! - **catalog** — validated, immutable catalog with lookup/comparison primitives
//! - **builtin** — the three production tiers shipped with the platform
//! - **loader** — catalog ingestion from a JSON source (the host's authored config)

pub mod builtin;
pub mod catalog;
pub mod loader;
pub mod tier_config;

pub use catalog::TierCatalog;
pub use loader::{catalog_from_json, catalog_from_json_file};
pub use tier_config::{TierBranding, TierConfig};
