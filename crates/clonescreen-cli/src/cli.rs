use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "clonescreen - a pedagogical simulator of automated high-throughput CHO cell-line screening for antibody production.",
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
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one full 7-day screening campaign and export the result table.
    Run(RunArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of clones to screen (defaults to a full 96-well plate).
    #[arg(short = 'n', long, value_name = "INT")]
    pub clones: Option<usize>,

    /// Number of top-scoring clones to advance.
    #[arg(short = 't', long = "top", value_name = "INT")]
    pub top: Option<usize>,

    /// Seed for the random source; identical seeds reproduce a campaign.
    #[arg(short = 's', long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Directory for the CSV export (defaults to the working directory).
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Path to a campaign configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the interactive pause before the campaign starts.
    #[arg(short = 'y', long)]
    pub yes: bool,
}
