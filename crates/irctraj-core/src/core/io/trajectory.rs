//! Reader for per-trajectory distance time series.
//!
//! The dynamics post-processor emits one whitespace-delimited table per
//! trajectory: a single header row followed by `time r1 r2 r3` rows.

use crate::core::models::trajectory::{SeriesError, TrajectorySample, TrajectorySeries};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("trajectory file is empty (expected a header row)")]
    Empty,
    #[error("malformed row on line {line}: '{content}'")]
    MalformedRow { line: usize, content: String },
    #[error(transparent)]
    Series(#[from] SeriesError),
}

/// Reads one trajectory file into a validated time series.
///
/// The header row is skipped unparsed. Every following non-blank row must
/// contain exactly four numeric columns; the assembled series must have
/// strictly increasing times. Both violations are file-scoped errors so a
/// batch run can report the file and keep going.
pub fn read_series(path: &Path) -> Result<TrajectorySeries, TrajectoryFileError> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines().enumerate();

    let Some((_, header)) = lines.next() else {
        return Err(TrajectoryFileError::Empty);
    };
    header?;

    let mut samples = Vec::new();
    for (index, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<f64> = line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| TrajectoryFileError::MalformedRow {
                line: index + 1,
                content: line.clone(),
            })?;
        let [time, r1, r2, r3] = fields[..] else {
            return Err(TrajectoryFileError::MalformedRow {
                line: index + 1,
                content: line,
            });
        };
        samples.push(TrajectorySample { time, r1, r2, r3 });
    }

    Ok(TrajectorySeries::from_samples(samples)?)
}
