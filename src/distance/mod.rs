//! Travel-cost matrices.
//!
//! Provides a dense cost matrix with unknown entries, and the paired
//! distance/duration matrices a provider returns.

mod matrix;
mod travel;

pub use matrix::CostMatrix;
pub use travel::{origin_chunk_size, MatrixElement, TravelMatrices};
