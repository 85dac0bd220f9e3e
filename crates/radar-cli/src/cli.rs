//! CLI argument definitions for radar.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "radar")]
#[command(about = "Notes radar calculator for beatmania IIDX score CSVs", version)]
pub struct Args {
    /// Show progress logs (same as RUST_LOG=info)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate radar values from a score CSV
    Analyze {
        /// Score CSV exported from the official site
        csv: PathBuf,
        /// Master data JSON (title → difficulty → ALL_NOTES / RADAR)
        #[arg(short, long, env = "RADAR_MASTER", default_value = "master.json")]
        master: PathBuf,
        /// Config file
        #[arg(short, long, default_value = "radar.toml")]
        config: PathBuf,
        /// Play style of the CSV (overrides config)
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
        /// Exclude a chart, as "<title> [<DIFF>]" (repeatable)
        #[arg(long, value_name = "CHART")]
        exclude: Vec<String>,
        /// Only count cleared charts
        #[arg(long)]
        require_clear: bool,
        /// Output format
        #[arg(long, short, value_enum, default_value = "console")]
        format: OutputFormat,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Merge a notes-only catalogue into master data
    MergeMaster {
        /// Master data JSON with radar values
        #[arg(long, default_value = "radar.json")]
        radar: PathBuf,
        /// Notes catalogue JSON (title → difficulty → NOTES value)
        #[arg(long, default_value = "notes.json")]
        notes: PathBuf,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Validate master data
    CheckMaster {
        /// Master data JSON
        master: PathBuf,
    },
    /// List the columns of a score CSV
    Columns {
        /// Score CSV
        csv: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StyleArg {
    Sp,
    Dp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Console,
    Tsv,
    Json,
}
