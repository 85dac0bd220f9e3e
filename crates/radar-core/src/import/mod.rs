//! Score CSV ingestion.
//!
//! - `CsvRow`, `ScoreCsv` - rows of the official score CSV
//! - `import_scores` - CSV rows to `MusicData` using the master catalogue

mod convert;
mod row;

pub use convert::*;
pub use row::*;
