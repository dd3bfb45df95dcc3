use thiserror::Error;

/// The three characteristic interatomic distances tracked for one system,
/// in Angstroms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceTriple {
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
}

/// One row of a trajectory time series: a timestamp (fs) plus the distance
/// triple measured at that instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub time: f64,
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
}

impl TrajectorySample {
    pub fn distances(&self) -> DistanceTriple {
        DistanceTriple {
            r1: self.r1,
            r2: self.r2,
            r3: self.r3,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error(
        "sample times must strictly increase (t[{index}] = {current} follows t = {previous})"
    )]
    NonMonotonicTime {
        index: usize,
        previous: f64,
        current: f64,
    },
}

/// A chronologically ordered trajectory time series.
///
/// Construction enforces strictly increasing sample times, so every consumer
/// can rely on the ordering without re-checking it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectorySeries {
    samples: Vec<TrajectorySample>,
}

impl TrajectorySeries {
    pub fn from_samples(samples: Vec<TrajectorySample>) -> Result<Self, SeriesError> {
        for (index, pair) in samples.windows(2).enumerate() {
            if pair[1].time <= pair[0].time {
                return Err(SeriesError::NonMonotonicTime {
                    index: index + 1,
                    previous: pair[0].time,
                    current: pair[1].time,
                });
            }
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: f64) -> TrajectorySample {
        TrajectorySample {
            time,
            r1: 1.0,
            r2: 2.0,
            r3: 3.0,
        }
    }

    #[test]
    fn from_samples_accepts_strictly_increasing_times() {
        let series =
            TrajectorySeries::from_samples(vec![sample(0.0), sample(10.0), sample(20.0)]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.samples()[1].time, 10.0);
    }

    #[test]
    fn from_samples_accepts_empty_and_singleton_series() {
        assert!(TrajectorySeries::from_samples(vec![]).unwrap().is_empty());
        assert_eq!(
            TrajectorySeries::from_samples(vec![sample(5.0)]).unwrap().len(),
            1
        );
    }

    #[test]
    fn from_samples_rejects_repeated_time() {
        let err = TrajectorySeries::from_samples(vec![sample(0.0), sample(0.0)]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::NonMonotonicTime {
                index: 1,
                previous: 0.0,
                current: 0.0,
            }
        );
    }

    #[test]
    fn from_samples_rejects_decreasing_time() {
        let err =
            TrajectorySeries::from_samples(vec![sample(0.0), sample(10.0), sample(5.0)])
                .unwrap_err();
        assert!(matches!(
            err,
            SeriesError::NonMonotonicTime { index: 2, .. }
        ));
    }

    #[test]
    fn distances_extracts_the_triple() {
        let triple = sample(0.0).distances();
        assert_eq!(
            triple,
            DistanceTriple {
                r1: 1.0,
                r2: 2.0,
                r3: 3.0,
            }
        );
    }
}
