//! Route cost evaluation over matrices with unknown entries.

mod route_cost;

pub use route_cost::{compare_totals, improves, total_cost};
