use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown radar kind: {0}")]
    UnknownRadarKind(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown clear type: {0}")]
    UnknownLamp(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid value {value:?} in column {column}")]
    InvalidCell { column: String, value: String },

    #[error("Score {score} exceeds max score {max_score} for {chart}")]
    ScoreExceedsMax {
        chart: String,
        score: u32,
        max_score: u32,
    },

    #[error("Invalid difficulty number {value} for {chart}")]
    InvalidDifficultyNumber { chart: String, value: f64 },

    #[error("Invalid {kind} radar value {value} for {title} [{difficulty}]")]
    InvalidRadarValue {
        title: String,
        difficulty: String,
        kind: String,
        value: f64,
    },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}
