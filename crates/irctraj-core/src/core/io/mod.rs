//! File formats this tool consumes and emits.
//!
//! - [`gaussian`] - Gaussian IRC log reader (orientation blocks)
//! - [`trajectory`] - per-trajectory `time r1 r2 r3` tables
//! - [`distance_table`] - the CSV distance tables written per reaction path

pub mod distance_table;
pub mod gaussian;
pub mod trajectory;
