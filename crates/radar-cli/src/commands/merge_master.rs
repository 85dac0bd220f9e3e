//! Merge a notes-only catalogue into master data.

use std::path::Path;

use anyhow::{Context, Result};
use radar_core::{MusicMasterData, load_notes};

pub fn run(radar: &Path, notes: &Path, output: Option<&Path>) -> Result<()> {
    let mut master = MusicMasterData::load(radar)
        .with_context(|| format!("Failed to load master data {:?}", radar))?;
    let notes =
        load_notes(notes).with_context(|| format!("Failed to load notes {:?}", notes))?;

    let added = master.merge_notes(&notes);
    eprintln!(
        "Added {} charts ({} songs, {} charts total)",
        added,
        master.len(),
        master.chart_count()
    );

    if let Some(path) = output {
        master.save(path)?;
        eprintln!("Saved to: {}", path.display());
    } else {
        println!("{}", master.to_json_pretty()?);
    }

    Ok(())
}
