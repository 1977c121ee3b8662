//! Core type definitions: tier levels, feature keys, collections.

pub mod collections;
pub mod feature;
pub mod tier;

pub use collections::{FxHashMap, FxHashSet};
pub use feature::FeatureKey;
pub use tier::TierLevel;
