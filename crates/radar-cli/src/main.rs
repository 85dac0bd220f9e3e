mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise warn, or info with --verbose
    let default_level = if args.verbose { "info" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("radar={0},radar_core={0}", default_level))
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Analyze {
            csv,
            master,
            config,
            style,
            exclude,
            require_clear,
            format,
            output,
        } => commands::analyze::run(commands::analyze::AnalyzeArgs {
            csv: &csv,
            master: &master,
            config: &config,
            style,
            exclude,
            require_clear,
            format,
            output: output.as_deref(),
        }),
        Command::MergeMaster {
            radar,
            notes,
            output,
        } => commands::merge_master::run(&radar, &notes, output.as_deref()),
        Command::CheckMaster { master } => commands::check_master::run(&master),
        Command::Columns { csv } => commands::columns::run(&csv),
    }
}
