use crate::analysis::config::SystemConfig;
use crate::analysis::error::AnalysisError;
use crate::core::io::gaussian;
use crate::core::models::path::ReactionPath;
use crate::core::models::trajectory::DistanceTriple;
use std::path::Path;
use tracing::{info, instrument};

/// Everything derived from one IRC log: the distance curve along the
/// assembled path plus the triples at the three stationary points. The
/// path itself is kept so callers can echo the stationary geometries.
#[derive(Debug, Clone)]
pub struct IrcReport {
    pub path: ReactionPath,
    pub series: Vec<DistanceTriple>,
    pub transition_state: DistanceTriple,
    pub product: DistanceTriple,
    pub reactant: DistanceTriple,
}

/// Parses one IRC log and evaluates the configured distance triple on every
/// point of the assembled reaction path.
#[instrument(skip(config), fields(log = %log_path.display()))]
pub fn run(log_path: &Path, config: &SystemConfig) -> Result<IrcReport, AnalysisError> {
    let path = gaussian::read_irc_path(log_path)?;
    info!(points = path.len(), "assembled reaction path");

    let series = path.snapshots().iter().map(|s| config.measure(s)).collect();
    let transition_state = config.measure(path.transition_state());
    let product = config.measure(path.product());
    let reactant = config.measure(path.reactant());

    Ok(IrcReport {
        path,
        series,
        transition_state,
        product,
        reactant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::config::AnalysisConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CONFIG: &str = r#"
[systems.toy]
pairs = { r1 = ["C1", "H2"], r2 = ["C1", "H2"], r3 = ["C1", "H2"] }
thresholds = { r1 = [1.7, 2.8], r2 = [1.7, 3.4], r3 = [1.7, 2.8] }
"#;

    fn toy_config() -> AnalysisConfig {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();
        AnalysisConfig::load(file.path()).unwrap()
    }

    fn block(spacing: f64) -> String {
        format!(
            "Input orientation:\n 1 6 0 0.000000 0.000000 0.000000\n\
             2 1 0 {:.6} 0.000000 0.000000\n",
            spacing
        )
    }

    #[test]
    fn report_covers_every_path_point_and_the_stationary_triples() {
        let mut log = NamedTempFile::new().unwrap();
        let mut text = String::new();
        // Forward: TS (1.0) then 2.0; reverse: TS re-emitted (1.0), 3.0, 4.0.
        text.push_str(&block(1.0));
        text.push_str(&block(2.0));
        text.push_str(" Beginning calculation of the REVERSE path.\n");
        text.push_str(&block(1.0));
        text.push_str(&block(3.0));
        text.push_str(&block(4.0));
        log.write_all(text.as_bytes()).unwrap();

        let config = toy_config();
        let report = run(log.path(), config.system("toy").unwrap()).unwrap();

        // Path: [4.0, 3.0, 1.0(TS), 2.0, 1.0(product = re-emitted block)].
        assert_eq!(report.path.len(), 5);
        assert_eq!(report.series.len(), 5);
        let r1s: Vec<f64> = report.series.iter().map(|t| t.r1).collect();
        assert_eq!(r1s, vec![4.0, 3.0, 1.0, 2.0, 1.0]);
        assert_eq!(report.transition_state.r1, 1.0);
        assert_eq!(report.product.r1, 1.0);
        assert_eq!(report.reactant.r1, 4.0);
    }

    #[test]
    fn malformed_log_is_a_file_scoped_error() {
        let mut log = NamedTempFile::new().unwrap();
        log.write_all(b"no orientation blocks in sight\n").unwrap();

        let config = toy_config();
        let result = run(log.path(), config.system("toy").unwrap());
        assert!(matches!(result, Err(AnalysisError::Log(_))));
    }
}
