//! Trajectory outcome classification.
//!
//! A trajectory is scanned chronologically and committed to a verdict the
//! first time one of three geometric conditions holds; later samples can
//! never revise it. The commit time is the satisfying sample's own
//! timestamp, not an interpolated crossing.

use super::config::JudgeThresholds;
use crate::core::models::trajectory::TrajectorySeries;

/// Terminal verdict for one trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Fell back apart toward the reactant basin.
    Reactant,
    /// Formed the first product (the (2+2) channel in the original study).
    ProductA,
    /// Formed the second product (the (4+2) channel).
    ProductB,
    /// Ran out of samples without satisfying any condition. A valid terminal
    /// state, not an error.
    Unresolved,
}

impl Outcome {
    pub const ALL: [Outcome; 4] = [
        Outcome::Reactant,
        Outcome::ProductA,
        Outcome::ProductB,
        Outcome::Unresolved,
    ];

    /// On-disk directory name trajectories of this outcome are routed into.
    pub fn bucket_name(self) -> &'static str {
        match self {
            Outcome::Reactant => "reactant",
            Outcome::ProductA => "prod_1",
            Outcome::ProductB => "prod_2",
            Outcome::Unresolved => "failed",
        }
    }
}

/// A committed outcome plus the time of the deciding sample.
/// `time` is `None` only for [`Outcome::Unresolved`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub outcome: Outcome,
    pub time: Option<f64>,
}

/// Scans the series in order and commits on the first matching condition.
///
/// Branch order is load-bearing: a sample can satisfy both the reactant
/// shape and a product shape when bands overlap, and the reactant branch
/// must win. Within the dissociated branch (`r3 <= min`), product A is
/// checked before product B.
pub fn classify(series: &TrajectorySeries, thresholds: &JudgeThresholds) -> Verdict {
    let t = thresholds;
    for sample in series.samples() {
        if sample.r3 >= t.r3.max && sample.r1 >= t.r1.max && sample.r2 >= t.r2.max {
            return Verdict {
                outcome: Outcome::Reactant,
                time: Some(sample.time),
            };
        }
        if sample.r3 <= t.r3.min {
            if sample.r1 <= t.r1.min && sample.r2 >= t.r2.max {
                return Verdict {
                    outcome: Outcome::ProductA,
                    time: Some(sample.time),
                };
            }
            if sample.r1 >= t.r1.max && sample.r2 <= t.r2.min {
                return Verdict {
                    outcome: Outcome::ProductB,
                    time: Some(sample.time),
                };
            }
        }
    }
    Verdict {
        outcome: Outcome::Unresolved,
        time: None,
    }
}
