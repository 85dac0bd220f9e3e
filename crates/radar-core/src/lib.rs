pub mod aggregate;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod master;
pub mod music;
pub mod radar;
pub mod score;

pub use aggregate::{RadarReport, analyze, collect_candidates};
pub use chart::{Difficulty, PlayStyle};
pub use config::{AnalysisConfig, Config, TitleAliases};
pub use error::{Error, Result};
pub use export::{
    export_report_json, format_candidates_tsv, format_report_console, format_unmatched_tsv,
    generate_report_json,
};
pub use import::{
    CsvRow, ImportOptions, ImportReport, ScoreCsv, Unmatched, UnmatchedReason, import_scores,
};
pub use master::{ChartMaster, MusicMasterData, NotesCatalogue, load_notes};
pub use music::MusicData;
pub use radar::{CandidatesData, RadarAverageValues, RadarKind, RadarMap, RadarValue};
pub use score::{Grade, Lamp};
