//! Error types for the entitlement engine.
//!
//! All failures here are local and synchronous: the catalog and key sets are
//! static at call time, so there is nothing transient to retry. Consumer
//! adapters treat every variant as "fail closed" — the gated surface renders
//! as suppressed rather than crashing the shell.

pub mod catalog_error;
pub mod config_error;
pub mod entitlement_error;
pub mod error_code;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use entitlement_error::EntitlementError;
pub use error_code::TavolaErrorCode;
