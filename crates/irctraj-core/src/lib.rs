//! # irctraj Core Library
//!
//! Post-processing for reaction-path simulations: recovering ordered,
//! correctly oriented IRC geometries from quantum-chemistry log files, and
//! classifying reactive MD trajectories into outcome channels by tracking
//! three characteristic interatomic distances against threshold bands.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (snapshots, path
//!   segments, trajectory series), the element table, geometry helpers, and
//!   I/O for the log, trajectory, and distance-table formats.
//!
//! - **[`analysis`]: The Logic Core.** Per-system configuration (atom pairs
//!   and classifier thresholds) and the first-match outcome classifier.
//!
//! - **[`workflows`]: The Public API.** One-call entry points per input
//!   file, returning plain data the CLI (or any other driver) writes out.

pub mod analysis;
pub mod core;
pub mod workflows;
