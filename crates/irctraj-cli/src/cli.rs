use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "poponta",
    version,
    about = "irctraj - post-processing for IRC reaction paths and reactive MD trajectory outcomes.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel batch processing.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract distance curves and stationary points from Gaussian IRC logs.
    Irc(IrcArgs),
    /// Classify trajectory outcome channels and sort files into buckets.
    Judge(JudgeArgs),
}

/// Arguments for the `irc` subcommand.
#[derive(Args, Debug)]
pub struct IrcArgs {
    /// Directory containing the IRC log files (*.log). A log named
    /// `X_...log` belongs to system `X` of the configuration.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub dir: PathBuf,

    /// Path to the analysis configuration file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,
}

/// Arguments for the `judge` subcommand.
#[derive(Args, Debug)]
pub struct JudgeArgs {
    /// Root directory holding one subdirectory of trajectory tables (*.dat)
    /// per chemical system.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub dir: PathBuf,

    /// Path to the analysis configuration file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,
}
