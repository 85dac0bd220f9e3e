//! Validate master data.

use std::path::Path;

use anyhow::{Context, Result, bail};
use radar_core::MusicMasterData;

pub fn run(path: &Path) -> Result<()> {
    let master = MusicMasterData::load(path)
        .with_context(|| format!("Failed to load master data {:?}", path))?;

    let issues = master.issues();
    let no_notes = master.charts().filter(|(_, _, c)| c.all_notes == 0).count();

    println!("songs   : {}", master.len());
    println!("charts  : {}", master.chart_count());
    println!("no notes: {}", no_notes);

    if issues.is_empty() {
        println!("OK");
        return Ok(());
    }

    for issue in &issues {
        println!(
            "{} [{}] {} = {}",
            issue.title, issue.difficulty, issue.kind, issue.value
        );
    }
    bail!("{} invalid radar values", issues.len())
}
