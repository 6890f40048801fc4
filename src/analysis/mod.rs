mod circular;
mod coupling;
mod dead_code;
mod god_class;
mod health;
mod layers;

pub use circular::detect_circular_dependencies;
pub use coupling::detect_high_coupling;
pub use dead_code::detect_dead_code;
pub use god_class::detect_god_classes;
pub use health::{code_health, hotspots, summarize};
pub use layers::detect_layer_violations;

use crate::config::Config;
use crate::fs::FileSystem;
use crate::graph::{PathResolver, detect_cycles, discover, select_scope};
use crate::ignore_rules::IgnoreRules;
use crate::model::AnalysisResult;
use crate::project::Project;

/// Run the whole pipeline over `project`.
///
/// The graph is always built for every file; `targets` only narrows what the
/// result reports. Each phase finishes for all files before the next starts.
pub fn analyze<S: AsRef<str>>(
    project: Project,
    config: &Config,
    rules: &IgnoreRules,
    fs: &dyn FileSystem,
    targets: &[S],
) -> AnalysisResult {
    let discovery = discover(&project, rules, fs);
    let resolver = PathResolver::new(&project);
    let (registry, exports) = discovery.registry.resolve(&resolver).link();
    let cycles = detect_cycles(&registry);
    let (scope, missing_targets) = select_scope(&registry, &project.root, targets);

    let mut result = AnalysisResult {
        project,
        registry,
        exports,
        cycles,
        scope,
        missing_targets,
        ignored_files: discovery.ignored,
        issues: Vec::new(),
        summary: Default::default(),
        health: Default::default(),
        hotspots: Vec::new(),
    };

    let files = result.reported_files();
    let mut issues = detect_circular_dependencies(&result.reported_cycles());
    issues.extend(detect_god_classes(&files, config));
    issues.extend(detect_high_coupling(&files, config));
    issues.extend(detect_layer_violations(&files, &result.registry, config));
    issues.extend(detect_dead_code(&files, config));

    let summary = summarize(&files, result.ignored_files);
    let health = code_health(&files, config);
    let hotspots = hotspots(&files, config);

    tracing::debug!(
        files = result.registry.len(),
        reported = files.len(),
        cycles = result.cycles.len(),
        issues = issues.len(),
        "analysis complete"
    );

    result.issues = issues;
    result.summary = summary;
    result.health = health;
    result.hotspots = hotspots;
    result
}
