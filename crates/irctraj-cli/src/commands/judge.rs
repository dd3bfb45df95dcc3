use crate::cli::JudgeArgs;
use crate::error::{CliError, Result};
use irctraj::analysis::classifier::Outcome;
use irctraj::analysis::config::AnalysisConfig;
use irctraj::workflows::judge;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub fn run(args: JudgeArgs) -> Result<()> {
    let config = AnalysisConfig::load(&args.config)?;

    if !args.dir.is_dir() {
        return Err(CliError::Argument(format!(
            "'{}' is not a directory",
            args.dir.display()
        )));
    }

    let mut system_dirs: Vec<PathBuf> = fs::read_dir(&args.dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    system_dirs.sort();

    if system_dirs.is_empty() {
        println!("No system directories found in {}", args.dir.display());
        return Ok(());
    }

    for system_dir in &system_dirs {
        judge_system(system_dir, &config)?;
    }
    Ok(())
}

fn judge_system(system_dir: &Path, config: &AnalysisConfig) -> Result<()> {
    let name = system_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let Some(system) = config.system(name) else {
        warn!(system = name, "no configuration entry, directory skipped");
        return Ok(());
    };

    for outcome in Outcome::ALL {
        fs::create_dir_all(system_dir.join(outcome.bucket_name()))?;
    }

    let trajectories = collect_tables(system_dir)?;
    info!(system = name, files = trajectories.len(), "judging trajectories");

    let results = judge::run_batch(&trajectories, &system.thresholds);

    let mut failures = 0usize;
    for (path, result) in &results {
        match result {
            Ok(classified) => {
                let bucket = classified.verdict.outcome.bucket_name();
                if let Some(file_name) = path.file_name() {
                    fs::copy(path, system_dir.join(bucket).join(file_name))?;
                }
            }
            Err(e) => {
                failures += 1;
                warn!(file = %path.display(), error = %e, "trajectory skipped");
                eprintln!("  ✗ {}: {}", path.display(), e);
            }
        }
    }
    if failures > 0 {
        println!("  {} trajectory file(s) skipped in {}", failures, name);
    }

    print_stats(system_dir, name)?;
    Ok(())
}

fn collect_tables(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut tables: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("dat"))
        .collect();
    tables.sort();
    Ok(tables)
}

fn count_tables(bucket: &Path) -> Result<usize> {
    if !bucket.is_dir() {
        return Ok(0);
    }
    Ok(collect_tables(bucket)?.len())
}

/// Prints bucket counts for one system, with the product branching ratios.
/// Counts come from the bucket directories so reruns accumulate correctly.
fn print_stats(system_dir: &Path, name: &str) -> Result<()> {
    let prod_1 = count_tables(&system_dir.join(Outcome::ProductA.bucket_name()))?;
    let prod_2 = count_tables(&system_dir.join(Outcome::ProductB.bucket_name()))?;
    let reactant = count_tables(&system_dir.join(Outcome::Reactant.bucket_name()))?;
    let failed = count_tables(&system_dir.join(Outcome::Unresolved.bucket_name()))?;

    let formed = prod_1 + prod_2;
    let (ratio_1, ratio_2) = if formed > 0 {
        (
            prod_1 as f64 / formed as f64,
            prod_2 as f64 / formed as f64,
        )
    } else {
        (0.0, 0.0)
    };

    println!("Statistics for {}:", name);
    println!("    prod_1: {:>4} ({:.1}%)", prod_1, ratio_1 * 100.0);
    println!("    prod_2: {:>4} ({:.1}%)", prod_2, ratio_2 * 100.0);
    println!("  reactant: {:>4}", reactant);
    println!("    failed: {:>4}", failed);
    Ok(())
}
