//! High-level entry points tying the core models and the analysis layer
//! together: one call per log file ([`irc`]) or trajectory file ([`judge`]).

pub mod irc;
pub mod judge;
