use crate::config::Config;
use crate::model::{Issue, SourceFile};

/// Files with more importers than `coupling_used_by`.
pub fn detect_high_coupling(files: &[&SourceFile], config: &Config) -> Vec<Issue> {
    files
        .iter()
        .filter(|file| file.used_by().len() > config.thresholds.coupling_used_by)
        .map(|file| Issue::high_coupling(file.id.clone(), file.used_by().len()))
        .collect()
}
