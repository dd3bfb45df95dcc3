use crate::core::io::distance_table::TableError;
use crate::core::io::gaussian::GaussianLogError;
use crate::core::io::trajectory::TrajectoryFileError;
use thiserror::Error;

/// File-scoped analysis failure. A batch driver collects these per file and
/// keeps processing siblings; none of them is ever fatal to the run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read IRC log: {0}")]
    Log(#[from] GaussianLogError),

    #[error("failed to read trajectory: {0}")]
    Trajectory(#[from] TrajectoryFileError),

    #[error("failed to write distance table: {0}")]
    Table(#[from] TableError),

    #[error("system '{0}' is not present in the configuration")]
    UnknownSystem(String),
}
