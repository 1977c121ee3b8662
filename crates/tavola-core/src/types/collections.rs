//! Hash collections used throughout the workspace.
//!
//! FxHash is faster than SipHash for small keys (enums, interned ids) and
//! none of these maps are exposed to untrusted key sets.

pub use rustc_hash::{FxHashMap, FxHashSet};
