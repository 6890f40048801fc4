use crate::config::Config;
use crate::model::{CodeHealth, Hotspot, SourceFile, Summary};
use std::cmp::Reverse;

const MAX_HOTSPOTS: usize = 10;

pub fn summarize(files: &[&SourceFile], ignored_files: usize) -> Summary {
    let count = files.len();
    let total_loc = files.iter().map(|f| f.metrics.loc).sum();
    let total_complexity: usize = files.iter().map(|f| f.metrics.complexity).sum();
    let total_cognitive: usize = files.iter().map(|f| f.metrics.cognitive_complexity).sum();

    let average = |total: usize| {
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    };

    Summary {
        reported_files: count,
        ignored_files,
        total_loc,
        avg_complexity: average(total_complexity),
        avg_cognitive_complexity: average(total_cognitive),
    }
}

pub fn code_health(files: &[&SourceFile], config: &Config) -> CodeHealth {
    let limits = &config.thresholds;
    let count = |pred: &dyn Fn(&SourceFile) -> bool| files.iter().filter(|f| pred(f)).count();

    let high_complexity_files = count(&|f| f.metrics.complexity > limits.high_complexity);
    let large_files_count = count(&|f| f.metrics.loc > limits.large_file_lines);
    let highly_coupled_files = count(&|f| f.used_by().len() > limits.coupling_used_by);

    let penalty = high_complexity_files * 10 + large_files_count * 5 + highly_coupled_files * 3;

    CodeHealth {
        high_complexity_files,
        large_files_count,
        highly_coupled_files,
        health_score: 100usize.saturating_sub(penalty),
    }
}

/// Files whose `used_by` count times complexity exceeds `hotspot_risk`,
/// riskiest first.
pub fn hotspots(files: &[&SourceFile], config: &Config) -> Vec<Hotspot> {
    let mut hotspots: Vec<Hotspot> = files
        .iter()
        .filter_map(|file| {
            let used_by = file.used_by().len();
            let complexity = file.metrics.complexity;
            let risk_score = used_by * complexity;
            (risk_score > config.thresholds.hotspot_risk).then(|| Hotspot {
                file: file.id.clone(),
                path: file.relative_path.clone(),
                risk_score,
                reason: format!(
                    "High coupling ({}) x Complexity ({})",
                    used_by, complexity
                ),
            })
        })
        .collect();

    hotspots.sort_by_key(|h| (Reverse(h.risk_score), h.file.clone()));
    hotspots.truncate(MAX_HOTSPOTS);
    hotspots
}
