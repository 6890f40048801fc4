//! File-name suffix rules that keep generated code out of the analysis.

use crate::fs::FileSystem;
use std::path::Path;

pub const IGNORE_FILE: &str = ".analyseignore";

pub const DEFAULT_IGNORED_SUFFIXES: &[&str] = &[
    ".g.dart",
    ".freezed.dart",
    ".gen.dart",
    ".config.dart",
    "_web.dart",
];

#[derive(Debug, Clone, PartialEq)]
pub struct IgnoreRules {
    patterns: Vec<String>,
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_SUFFIXES.iter().map(|s| s.to_string()))
    }
}

impl IgnoreRules {
    pub fn new(patterns: impl IntoIterator<Item = String>) -> Self {
        Self {
            patterns: patterns.into_iter().collect(),
        }
    }

    /// Defaults plus the project's `.analyseignore`, one pattern per line.
    /// Blank lines and `#` comments are skipped.
    pub fn load(project_path: &Path, fs: &dyn FileSystem) -> std::io::Result<Self> {
        let mut rules = Self::default();
        let ignore_path = project_path.join(IGNORE_FILE);

        if fs.exists(&ignore_path) {
            let content = fs.read_to_string(&ignore_path)?;
            rules.extend_from_str(&content);
        }

        Ok(rules)
    }

    pub fn extend_from_str(&mut self, content: &str) {
        self.patterns.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        );
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// `*suffix` and `suffix` both match on the end of the file name.
    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|pattern| {
            let suffix = pattern.strip_prefix('*').unwrap_or(pattern);
            file_name.ends_with(suffix)
        })
    }
}
