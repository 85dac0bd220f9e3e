use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Title overrides from score CSV titles to master data titles
///
/// The official CSV and the master catalogue occasionally spell a title
/// differently (full-width symbols, trailing spaces, renamed songs).
#[derive(Debug, Clone, Default)]
pub struct TitleAliases {
    aliases: HashMap<String, String>,
    version: String,
}

impl TitleAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load aliases from a file
    ///
    /// File format:
    /// - First line: version (YYYYMMDD)
    /// - Other lines: csv_title\tmaster_title
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse aliases from string content
    pub fn parse(content: &str) -> Self {
        let mut aliases = HashMap::new();
        let mut version = String::new();

        for (index, line) in content.lines().enumerate() {
            if index == 0 {
                version = line.trim().to_string();
                continue;
            }

            if let Some((from, to)) = line.split_once('\t') {
                aliases.insert(from.to_string(), to.trim().to_string());
            }
        }

        Self { aliases, version }
    }

    /// Resolve a CSV title to the master title
    ///
    /// Returns the title unchanged when no alias exists.
    pub fn resolve<'a>(&'a self, title: &'a str) -> &'a str {
        self.aliases.get(title).map(String::as_str).unwrap_or(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.aliases.contains_key(title)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn insert(&mut self, from: String, to: String) {
        self.aliases.insert(from, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        let content = "20240101\nGAMBOL \tGAMBOL\n\u{ff21}\u{ff22}\tAB\nno separator line\n";
        let aliases = TitleAliases::parse(content);

        assert_eq!(aliases.version(), "20240101");
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases.resolve("GAMBOL "), "GAMBOL");
        assert_eq!(aliases.resolve("ＡＢ"), "AB");
        assert_eq!(aliases.resolve("unknown"), "unknown");
    }

    #[test]
    fn test_empty_aliases() {
        let aliases = TitleAliases::parse("");
        assert!(aliases.version().is_empty());
        assert!(aliases.is_empty());
    }

    #[test]
    fn test_load_aliases_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.tsv");
        fs::write(&path, "20250301\nfoo\tbar\n").unwrap();

        let aliases = TitleAliases::load(&path).unwrap();
        assert!(aliases.contains("foo"));
        assert_eq!(aliases.resolve("foo"), "bar");
    }
}
