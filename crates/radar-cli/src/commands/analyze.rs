//! Analyze command: score CSV to radar report.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use radar_core::{
    Config, ImportOptions, MusicMasterData, PlayStyle, ScoreCsv, TitleAliases, analyze,
    format_candidates_tsv, format_report_console, format_unmatched_tsv, generate_report_json,
    import_scores,
};
use tracing::{debug, info};

use crate::cli::{OutputFormat, StyleArg};

pub struct AnalyzeArgs<'a> {
    pub csv: &'a Path,
    pub master: &'a Path,
    pub config: &'a Path,
    pub style: Option<StyleArg>,
    pub exclude: Vec<String>,
    pub require_clear: bool,
    pub format: OutputFormat,
    pub output: Option<&'a Path>,
}

/// Build the import options: config file first, then command-line overrides
fn load_options(args: &AnalyzeArgs<'_>) -> Result<ImportOptions> {
    let config = if args.config.exists() {
        let config = Config::load(args.config)
            .with_context(|| format!("Failed to load config {:?}", args.config))?;
        info!("Loaded config from {:?}", args.config);
        config
    } else {
        debug!("No config at {:?}, using defaults", args.config);
        Config::default()
    };

    let aliases = match &config.analysis.aliases {
        Some(path) => {
            let aliases = TitleAliases::load(path)
                .with_context(|| format!("Failed to load title aliases {:?}", path))?;
            info!("Loaded {} title aliases (version {})", aliases.len(), aliases.version());
            aliases
        }
        None => TitleAliases::new(),
    };

    let mut options = ImportOptions::from_config(&config.analysis, aliases);
    if let Some(style) = args.style {
        options.style = match style {
            StyleArg::Sp => PlayStyle::Sp,
            StyleArg::Dp => PlayStyle::Dp,
        };
    }
    options.exclude.extend(args.exclude.iter().cloned());
    options.require_clear |= args.require_clear;

    Ok(options)
}

pub fn run(args: AnalyzeArgs<'_>) -> Result<()> {
    let options = load_options(&args)?;

    let master = MusicMasterData::load(args.master)
        .with_context(|| format!("Failed to load master data {:?}", args.master))?;
    master.validate()?;
    eprintln!(
        "Loaded master data: {} songs, {} charts",
        master.len(),
        master.chart_count()
    );

    let csv = ScoreCsv::load(args.csv)
        .with_context(|| format!("Failed to load score CSV {:?}", args.csv))?;
    eprintln!("Loaded {} rows ({})", csv.len(), options.style);

    let imported = import_scores(&csv.rows, &master, &options)?;
    eprintln!("Imported {} played charts", imported.music.len());
    if !imported.unmatched.is_empty() {
        eprintln!("Skipped {} charts:", imported.unmatched.len());
        eprintln!("{}", format_unmatched_tsv(&imported.unmatched));
    }

    let report = analyze(&imported.music, &master);

    let content = match args.format {
        OutputFormat::Console => format_report_console(&report),
        OutputFormat::Tsv => format_candidates_tsv(&report.candidates),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&generate_report_json(&report, Utc::now())?)?
        }
    };

    if let Some(path) = args.output {
        std::fs::write(path, &content)?;
        eprintln!("Exported to: {}", path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}
