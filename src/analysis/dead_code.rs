use crate::config::Config;
use crate::model::{Issue, SourceFile};

/// Files nobody imports, apart from configured entrypoints.
pub fn detect_dead_code(files: &[&SourceFile], config: &Config) -> Vec<Issue> {
    files
        .iter()
        .filter(|file| file.used_by().is_empty())
        .filter(|file| !config.entrypoints.iter().any(|e| e == file.file_name()))
        .map(|file| Issue::dead_code(file.id.clone()))
        .collect()
}
