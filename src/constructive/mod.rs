//! Constructive heuristics for building an initial stop order.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor walk from the start, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor;
