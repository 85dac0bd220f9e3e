//! List the columns of a score CSV.

use std::path::Path;

use anyhow::{Context, Result};
use radar_core::ScoreCsv;
use radar_core::import::REQUIRED_COLUMNS;

pub fn run(path: &Path) -> Result<()> {
    let csv =
        ScoreCsv::load(path).with_context(|| format!("Failed to load score CSV {:?}", path))?;

    println!("rows: {}", csv.len());
    println!("fixed columns:");
    for column in REQUIRED_COLUMNS {
        println!("  {}", column);
    }
    println!("dynamic columns:");
    for column in csv.dynamic_columns() {
        println!("  {}", column);
    }

    Ok(())
}
