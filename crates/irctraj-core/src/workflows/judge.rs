use crate::analysis::classifier::{self, Verdict};
use crate::analysis::config::JudgeThresholds;
use crate::analysis::error::AnalysisError;
use crate::core::io::trajectory;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// The verdict reached for one trajectory file.
#[derive(Debug, Clone)]
pub struct ClassifiedTrajectory {
    pub path: PathBuf,
    pub verdict: Verdict,
}

/// Reads one trajectory file and classifies it.
#[instrument(skip(thresholds), fields(file = %dat_path.display()))]
pub fn run(
    dat_path: &Path,
    thresholds: &JudgeThresholds,
) -> Result<ClassifiedTrajectory, AnalysisError> {
    let series = trajectory::read_series(dat_path)?;
    let verdict = classifier::classify(&series, thresholds);
    debug!(
        outcome = verdict.outcome.bucket_name(),
        time = ?verdict.time,
        "trajectory classified"
    );
    Ok(ClassifiedTrajectory {
        path: dat_path.to_path_buf(),
        verdict,
    })
}

/// Classifies a set of trajectory files in parallel.
///
/// Each file is an independent unit of work; failures stay paired with the
/// file that produced them so the caller can report them without losing the
/// rest of the batch.
pub fn run_batch(
    dat_paths: &[PathBuf],
    thresholds: &JudgeThresholds,
) -> Vec<(PathBuf, Result<ClassifiedTrajectory, AnalysisError>)> {
    dat_paths
        .par_iter()
        .map(|path| (path.clone(), run(path, thresholds)))
        .collect()
}
