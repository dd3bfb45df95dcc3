use crate::cli::IrcArgs;
use crate::error::{CliError, Result};
use crate::utils::progress;
use irctraj::analysis::config::AnalysisConfig;
use irctraj::analysis::error::AnalysisError;
use irctraj::core::io::distance_table;
use irctraj::core::models::snapshot::Snapshot;
use irctraj::workflows::irc::{self, IrcReport};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub fn run(args: IrcArgs) -> Result<()> {
    let config = AnalysisConfig::load(&args.config)?;
    info!(systems = config.systems.len(), "configuration loaded");

    if !args.dir.is_dir() {
        return Err(CliError::Argument(format!(
            "'{}' is not a directory",
            args.dir.display()
        )));
    }

    let logs = collect_logs(&args.dir)?;
    if logs.is_empty() {
        warn!(dir = %args.dir.display(), "no log files found");
        println!("No .log files found in {}", args.dir.display());
        return Ok(());
    }

    println!("Processing {} IRC log(s)...", logs.len());
    let bar = progress::batch_bar(logs.len() as u64, "IRC logs");
    let results: Vec<(PathBuf, Result<IrcReport>)> = logs
        .par_iter()
        .map(|log| {
            let result = process_log(log, &config);
            bar.inc(1);
            (log.clone(), result)
        })
        .collect();
    bar.finish();

    let mut failures = 0usize;
    for (log, result) in &results {
        match result {
            Ok(report) => {
                echo_stationary_points(report);
                info!(log = %log.display(), points = report.path.len(), "distance tables written");
            }
            Err(e) => {
                failures += 1;
                warn!(log = %log.display(), error = %e, "log skipped");
                eprintln!("  ✗ {}: {}", log.display(), e);
            }
        }
    }

    println!(
        "✓ {} log(s) processed, {} failed.",
        results.len() - failures,
        failures
    );
    Ok(())
}

fn collect_logs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut logs: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("log"))
        .collect();
    logs.sort();
    Ok(logs)
}

/// The system a log belongs to is the file-stem token before the first `_`
/// (`dmb_ts1.log` -> `dmb`).
fn system_name(log: &Path) -> Option<&str> {
    let stem = log.file_stem()?.to_str()?;
    stem.split('_').next()
}

fn process_log(log: &Path, config: &AnalysisConfig) -> Result<IrcReport> {
    let system = system_name(log).ok_or_else(|| {
        CliError::Argument(format!("cannot infer system name from '{}'", log.display()))
    })?;
    let system_config = config
        .system(system)
        .ok_or_else(|| AnalysisError::UnknownSystem(system.to_string()))?;

    let report = irc::run(log, system_config)?;
    write_tables(log, &report)?;

    Ok(report)
}

fn write_tables(log: &Path, report: &IrcReport) -> std::result::Result<(), AnalysisError> {
    distance_table::write_series(&log.with_extension("dist.dat"), &report.series)?;
    distance_table::write_single_point(
        &log.with_extension("ts-pos.dat"),
        &report.transition_state,
    )?;
    distance_table::write_single_point(&log.with_extension("prod-pos.dat"), &report.product)?;
    distance_table::write_single_point(&log.with_extension("reac-pos.dat"), &report.reactant)?;
    Ok(())
}

fn echo_stationary_points(report: &IrcReport) {
    print_snapshot(report.path.transition_state());
    println!("{}", "-".repeat(60));
    print_snapshot(report.path.product());
    println!("{}", "-".repeat(60));
    print_snapshot(report.path.reactant());
}

fn print_snapshot(snapshot: &Snapshot) {
    for key in snapshot.sorted_keys() {
        if let Some(pos) = snapshot.position(key) {
            println!("{:>4}{:>12.6}{:>12.6}{:>12.6}", key, pos.x, pos.y, pos.z);
        }
    }
}
