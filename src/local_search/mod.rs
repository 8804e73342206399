//! Local search operators for improving a stop order.
//!
//! - [`two_opt`] — Segment-reversal 2-opt over an open path from the start

mod two_opt;

pub use two_opt::{two_opt, two_opt_with_limit, MIN_TWO_OPT_LEN};
