//! Data models for reaction-path and trajectory post-processing.
//!
//! - [`snapshot`] - One geometry snapshot as a named-atom coordinate map
//! - [`path`] - IRC integration segments and the assembled reaction path
//! - [`trajectory`] - Distance triples and chronological trajectory series

pub mod path;
pub mod snapshot;
pub mod trajectory;
