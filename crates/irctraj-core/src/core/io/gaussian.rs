//! Reader for Gaussian IRC log files.
//!
//! An IRC run records one `Input orientation:` block per accepted path point,
//! each block listing one row per atom:
//!
//! ```text
//!                          Input orientation:
//!  ---------------------------------------------------------------------
//!  Center     Atomic      Atomic             Coordinates (Angstroms)
//!  Number     Number       Type             X           Y           Z
//!  ---------------------------------------------------------------------
//!       1          6           0        0.000000    0.000000    0.000000
//!       2          1           0        1.089000    0.000000    0.000000
//!  ---------------------------------------------------------------------
//! ```
//!
//! The forward integration comes first; the line
//! `Beginning calculation of the REVERSE path.` switches all subsequent
//! blocks to the backward segment. Because the marker is detected while a
//! block is being scanned, it also takes effect for the remainder of that
//! block: the block straddling the marker is routed backward. That matches
//! the behavior of the tooling whose output files this reader replaces, and
//! is what makes the first backward block the re-emitted transition state.

use crate::core::elements;
use crate::core::models::path::{Direction, PathError, PathSegment, ReactionPath};
use crate::core::models::snapshot::Snapshot;
use nalgebra::Point3;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Marker introducing one geometry block.
pub const ORIENTATION_MARKER: &str = "Input orientation:";

/// Marker after which blocks belong to the reverse integration.
pub const REVERSE_MARKER: &str = "Beginning calculation of the REVERSE path.";

#[derive(Debug, Error)]
pub enum GaussianLogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("no 'Input orientation:' blocks found in log")]
    NoOrientationBlocks,
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Reads a log file and assembles its reaction path.
pub fn read_irc_path(path: &Path) -> Result<ReactionPath, GaussianLogError> {
    let text = std::fs::read_to_string(path)?;
    parse_irc_path(&text)
}

/// Parses log text into an oriented reaction path.
///
/// Rows that do not match the 6-token `[label, Z, type, x, y, z]` shape are
/// skipped; log files interleave annotation lines with the coordinate table.
pub fn parse_irc_path(text: &str) -> Result<ReactionPath, GaussianLogError> {
    let mut forward = PathSegment::new(Direction::Forward);
    let mut backward = PathSegment::new(Direction::Backward);
    // File-local: each parse is independent of every other file.
    let mut reverse = false;
    let mut block_count = 0usize;

    for block in text.split(ORIENTATION_MARKER).skip(1) {
        block_count += 1;
        let mut snapshot = Snapshot::new();

        for line in block.lines() {
            if line.contains(REVERSE_MARKER) {
                reverse = true;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 6 {
                continue;
            }
            let number = tokens[1].parse::<u32>();
            let coords = (
                tokens[3].parse::<f64>(),
                tokens[4].parse::<f64>(),
                tokens[5].parse::<f64>(),
            );
            if let (Ok(number), (Ok(x), Ok(y), Ok(z))) = (number, coords) {
                let key = format!("{}{}", elements::symbol_of(number), tokens[0]);
                snapshot.insert(key, Point3::new(x, y, z));
            }
        }

        if reverse {
            backward.push(snapshot);
        } else {
            forward.push(snapshot);
        }
    }

    if block_count == 0 {
        return Err(GaussianLogError::NoOrientationBlocks);
    }
    debug!(
        blocks = block_count,
        forward = forward.len(),
        backward = backward.len(),
        "collected orientation blocks"
    );

    Ok(ReactionPath::assemble(forward, backward)?)
}
