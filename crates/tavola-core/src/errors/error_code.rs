//! Stable error codes surfaced to the host application.
//!
//! Codes are development-time/configuration-time signals; end users only
//! ever see the gated capability absent.

/// Trait for errors that carry a stable, machine-readable code.
pub trait TavolaErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const UNKNOWN_TIER: &str = "ENTITLEMENT_UNKNOWN_TIER";
pub const UNKNOWN_FEATURE_KEY: &str = "ENTITLEMENT_UNKNOWN_FEATURE_KEY";
pub const INVALID_UPGRADE_DIRECTION: &str = "ENTITLEMENT_INVALID_UPGRADE_DIRECTION";

pub const CATALOG_EMPTY: &str = "CATALOG_EMPTY";
pub const CATALOG_DUPLICATE_TIER: &str = "CATALOG_DUPLICATE_TIER";
pub const CATALOG_BAD_RANKS: &str = "CATALOG_BAD_RANKS";
pub const CATALOG_NON_MONOTONIC: &str = "CATALOG_NON_MONOTONIC";

pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_BAD_TIER: &str = "CONFIG_BAD_TIER";
pub const CONFIG_BAD_CATALOG: &str = "CONFIG_BAD_CATALOG";
