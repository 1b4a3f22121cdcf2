//! Fast hash collections used across the workspace.
//!
//! Iteration order of these maps is arbitrary and must never reach a
//! report: every emitted list is sorted explicitly before it leaves an
//! engine.

pub use rustc_hash::{FxHashMap, FxHashSet};
