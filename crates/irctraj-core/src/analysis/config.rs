//! Per-system analysis configuration.
//!
//! Each chemical system names the three atom pairs whose distances track the
//! reaction, plus the six classifier thresholds, in one TOML file:
//!
//! ```toml
//! [systems.dmb]
//! pairs = { r1 = ["C1", "C6"], r2 = ["C4", "C5"], r3 = ["C2", "C3"] }
//! thresholds = { r1 = [1.7, 2.8], r2 = [1.7, 3.4], r3 = [1.7, 2.8] }
//! ```

use crate::core::models::snapshot::Snapshot;
use crate::core::models::trajectory::DistanceTriple;
use crate::core::utils::geometry;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// An inclusive `[min, max]` threshold band in Angstroms.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "[f64; 2]")]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl TryFrom<[f64; 2]> for Band {
    type Error = String;

    fn try_from([min, max]: [f64; 2]) -> Result<Self, Self::Error> {
        if min > max {
            return Err(format!(
                "threshold band must satisfy min <= max (got [{}, {}])",
                min, max
            ));
        }
        Ok(Self { min, max })
    }
}

/// Two atom keys in the snapshot key format (symbol + label, e.g. `"C4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AtomPair(pub String, pub String);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistancePairs {
    pub r1: AtomPair,
    pub r2: AtomPair,
    pub r3: AtomPair,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JudgeThresholds {
    pub r1: Band,
    pub r2: Band,
    pub r3: Band,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    pub pairs: DistancePairs,
    pub thresholds: JudgeThresholds,
}

impl SystemConfig {
    /// Evaluates the configured distance triple on one snapshot.
    ///
    /// Missing atoms propagate as NaN entries (see
    /// [`geometry::distance`]); the triple itself is always produced.
    pub fn measure(&self, snapshot: &Snapshot) -> DistanceTriple {
        DistanceTriple {
            r1: geometry::distance(snapshot, &self.pairs.r1.0, &self.pairs.r1.1),
            r2: geometry::distance(snapshot, &self.pairs.r2.0, &self.pairs.r2.1),
            r3: geometry::distance(snapshot, &self.pairs.r3.0, &self.pairs.r3.1),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    pub systems: HashMap<String, SystemConfig>,
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: AnalysisConfig =
            toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Ok(config)
    }

    pub fn system(&self, name: &str) -> Option<&SystemConfig> {
        self.systems.get(name)
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EXAMPLE: &str = r#"
[systems.dmb]
pairs = { r1 = ["C1", "C6"], r2 = ["C4", "C5"], r3 = ["C2", "C3"] }
thresholds = { r1 = [1.7, 2.8], r2 = [1.7, 3.4], r3 = [1.7, 2.8] }

[systems.cpd]
pairs = { r1 = ["C1", "C10"], r2 = ["C4", "C11"], r3 = ["C2", "C3"] }
thresholds = { r1 = [1.7, 2.8], r2 = [1.7, 3.4], r3 = [1.7, 2.8] }
"#;

    fn load_str(content: &str) -> Result<AnalysisConfig, ConfigLoadError> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        AnalysisConfig::load(file.path())
    }

    #[test]
    fn loads_systems_with_pairs_and_thresholds() {
        let config = load_str(EXAMPLE).unwrap();
        assert_eq!(config.systems.len(), 2);

        let dmb = config.system("dmb").unwrap();
        assert_eq!(dmb.pairs.r1, AtomPair("C1".into(), "C6".into()));
        assert_eq!(dmb.thresholds.r2, Band { min: 1.7, max: 3.4 });
        assert!(config.system("unknown").is_none());
    }

    #[test]
    fn inverted_band_is_rejected_at_load_time() {
        let result = load_str(
            r#"
[systems.bad]
pairs = { r1 = ["C1", "C2"], r2 = ["C3", "C4"], r3 = ["C5", "C6"] }
thresholds = { r1 = [2.8, 1.7], r2 = [1.7, 3.4], r3 = [1.7, 2.8] }
"#,
        );
        assert!(matches!(result, Err(ConfigLoadError::Toml { .. })));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = load_str(
            r#"
[systems.bad]
pairs = { r1 = ["C1", "C2"], r2 = ["C3", "C4"], r3 = ["C5", "C6"] }
thresholds = { r1 = [1.7, 2.8], r2 = [1.7, 3.4], r3 = [1.7, 2.8] }
color = "red"
"#,
        );
        assert!(matches!(result, Err(ConfigLoadError::Toml { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = AnalysisConfig::load(Path::new("/no/such/config.toml"));
        assert!(matches!(result, Err(ConfigLoadError::Io { .. })));
    }

    #[test]
    fn measure_evaluates_the_configured_pairs() {
        let config = load_str(EXAMPLE).unwrap();
        let dmb = config.system("dmb").unwrap();

        let mut snapshot = Snapshot::new();
        snapshot.insert("C1", Point3::new(0.0, 0.0, 0.0));
        snapshot.insert("C6", Point3::new(2.0, 0.0, 0.0));
        snapshot.insert("C4", Point3::new(0.0, 0.0, 0.0));
        snapshot.insert("C5", Point3::new(0.0, 3.0, 0.0));
        snapshot.insert("C2", Point3::new(0.0, 0.0, 0.0));
        // C3 missing on purpose.

        let triple = dmb.measure(&snapshot);
        assert_eq!(triple.r1, 2.0);
        assert_eq!(triple.r2, 3.0);
        assert!(triple.r3.is_nan());
    }
}
