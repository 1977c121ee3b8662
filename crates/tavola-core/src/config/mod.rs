//! Venue configuration — `tavola.toml`.

pub mod venue_config;

pub use venue_config::VenueConfig;
