use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chart::PlayStyle;
use crate::error::Result;

/// Analysis settings, read from `radar.toml`
///
/// ```toml
/// [analysis]
/// style = "SP"
/// require_clear = false
/// exclude = ["Title [SPA]"]
/// aliases = "aliases.tsv"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Play style of the score CSV
    pub style: PlayStyle,
    /// Skip charts that were played but not cleared
    pub require_clear: bool,
    /// Charts kept out of the top ten, as `"<title> [<DIFF>]"`
    pub exclude: BTreeSet<String>,
    /// Title alias file (see `TitleAliases`)
    pub aliases: Option<PathBuf>,
}

impl Config {
    /// Load a config file; a relative `aliases` path is taken from the config's directory
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;

        if let (Some(aliases), Some(dir)) = (config.analysis.aliases.as_mut(), path.parent()) {
            if aliases.is_relative() {
                *aliases = dir.join(&*aliases);
            }
        }

        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
