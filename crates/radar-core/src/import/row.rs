use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use encoding_rs::{SHIFT_JIS, UTF_8};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chart::Difficulty;
use crate::error::{Error, Result};
use crate::score::Lamp;

pub const COLUMN_VERSION: &str = "バージョン";
pub const COLUMN_TITLE: &str = "タイトル";
pub const COLUMN_GENRE: &str = "ジャンル";
pub const COLUMN_ARTIST: &str = "アーティスト";
pub const COLUMN_PLAY_COUNT: &str = "プレー回数";

/// Columns every score CSV must carry
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COLUMN_VERSION,
    COLUMN_TITLE,
    COLUMN_GENRE,
    COLUMN_ARTIST,
    COLUMN_PLAY_COUNT,
];

/// Cell text the export writes for "no value"
const PLACEHOLDER: &str = "---";

/// One row of the score CSV
///
/// The five fixed columns are typed fields; every other column (per-difficulty
/// level, score, lamp, ...) is kept as text under its header name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "バージョン")]
    pub version: String,
    #[serde(rename = "タイトル")]
    pub title: String,
    #[serde(rename = "ジャンル")]
    pub genre: String,
    #[serde(rename = "アーティスト")]
    pub artist: String,
    #[serde(rename = "プレー回数")]
    pub play_count: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// Per-difficulty cells of a row that take part in the analysis
///
/// Judge counts, miss count and DJ LEVEL are not read; they stay reachable
/// as raw text through `CsvRow::get`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartColumns {
    pub level: Option<u32>,
    pub score: Option<u32>,
    pub lamp: Option<Lamp>,
}

impl ChartColumns {
    /// A chart counts as played when it has a level and a non-zero score
    pub fn is_played(&self) -> bool {
        self.level.unwrap_or(0) > 0 && self.score.unwrap_or(0) > 0
    }
}

/// Fail when a fixed column is missing from the header
pub fn check_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let headers: Vec<&str> = headers.into_iter().collect();
    for column in REQUIRED_COLUMNS {
        if !headers.contains(&column) {
            return Err(Error::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

impl CsvRow {
    /// Build a row from a header record and a data record
    ///
    /// Cells missing at the end of a short record read as empty text.
    pub fn from_record(headers: &csv::StringRecord, record: &csv::StringRecord) -> Result<Self> {
        check_headers(headers.iter())?;

        let mut row = Self::default();
        for (index, header) in headers.iter().enumerate() {
            let value = record.get(index).unwrap_or_default().to_string();
            match header {
                COLUMN_VERSION => row.version = value,
                COLUMN_TITLE => row.title = value,
                COLUMN_GENRE => row.genre = value,
                COLUMN_ARTIST => row.artist = value,
                COLUMN_PLAY_COUNT => row.play_count = value,
                _ => {
                    row.extra.insert(header.to_string(), value);
                }
            }
        }
        Ok(row)
    }

    /// Look a cell up by header name (fixed or dynamic column)
    pub fn get(&self, column: &str) -> Option<&str> {
        match column {
            COLUMN_VERSION => Some(&self.version),
            COLUMN_TITLE => Some(&self.title),
            COLUMN_GENRE => Some(&self.genre),
            COLUMN_ARTIST => Some(&self.artist),
            COLUMN_PLAY_COUNT => Some(&self.play_count),
            _ => self.extra.get(column).map(String::as_str),
        }
    }

    /// Parse a cell, treating empty cells and `---` as absent
    pub fn cell<T: FromStr>(&self, column: &str) -> Result<Option<T>> {
        let Some(text) = self.get(column) else {
            return Ok(None);
        };
        let text = text.trim();
        if text.is_empty() || text == PLACEHOLDER {
            return Ok(None);
        }
        text.parse().map(Some).map_err(|_| Error::InvalidCell {
            column: column.to_string(),
            value: text.to_string(),
        })
    }

    /// Read the per-difficulty columns (`"ANOTHER スコア"`, ...)
    pub fn chart_columns(&self, difficulty: Difficulty) -> Result<ChartColumns> {
        let prefix = difficulty.expand_name();
        let column = |name: &str| format!("{} {}", prefix, name);

        Ok(ChartColumns {
            level: self.cell(&column("難易度"))?,
            score: self.cell(&column("スコア"))?,
            lamp: self.cell(&column("クリアタイプ"))?,
        })
    }

    pub fn play_count(&self) -> Result<u32> {
        Ok(self.cell(COLUMN_PLAY_COUNT)?.unwrap_or(0))
    }
}

/// A parsed score CSV
#[derive(Debug, Clone, Default)]
pub struct ScoreCsv {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

impl ScoreCsv {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        let text = decode_csv_bytes(&bytes)?;
        let csv = Self::parse(&text)?;
        info!("Loaded {} rows from {:?}", csv.rows.len(), path.as_ref());
        Ok(csv)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        check_headers(headers.iter())?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            rows.push(CsvRow::from_record(&headers, &record)?);
        }

        Ok(Self {
            headers: headers.iter().map(str::to_string).collect(),
            rows,
        })
    }

    /// Header names beyond the five fixed columns
    pub fn dynamic_columns(&self) -> impl Iterator<Item = &str> {
        self.headers
            .iter()
            .map(String::as_str)
            .filter(|h| !REQUIRED_COLUMNS.contains(h))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Decode CSV bytes: UTF-8 (BOM stripped), falling back to Shift_JIS
pub fn decode_csv_bytes(bytes: &[u8]) -> Result<String> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return Ok(text.into_owned());
    }

    debug!("CSV is not valid UTF-8, decoding as Shift_JIS");
    let (text, _, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        return Err(Error::EncodingError(
            "CSV is neither UTF-8 nor Shift_JIS".to_string(),
        ));
    }
    Ok(text.into_owned())
}
