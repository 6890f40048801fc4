use crate::config::Config;
use crate::model::{Issue, SourceFile};

/// A file is flagged once at least two size signals exceed their thresholds.
const MIN_REASONS: usize = 2;

pub fn detect_god_classes(files: &[&SourceFile], config: &Config) -> Vec<Issue> {
    files
        .iter()
        .filter_map(|file| {
            let reasons = god_class_reasons(file, config);
            (reasons.len() >= MIN_REASONS).then(|| Issue::god_class(file.id.clone(), reasons))
        })
        .collect()
}

fn god_class_reasons(file: &SourceFile, config: &Config) -> Vec<String> {
    let metrics = &file.metrics;
    let limits = &config.thresholds;
    let mut reasons = Vec::new();

    if metrics.loc > limits.large_file_lines {
        reasons.push(format!("{} lines of code", metrics.loc));
    }
    if metrics.complexity > limits.high_complexity {
        reasons.push(format!("complexity {}", metrics.complexity));
    }
    if metrics.methods > limits.god_class_methods {
        reasons.push(format!("{} methods", metrics.methods));
    }
    if metrics.classes > limits.god_class_classes {
        reasons.push(format!("{} classes", metrics.classes));
    }

    reasons
}
