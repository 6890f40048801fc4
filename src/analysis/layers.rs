use crate::config::Config;
use crate::graph::{Linked, Registry};
use crate::model::{Issue, SourceFile};

/// Presentation files that import data-layer files directly.
pub fn detect_layer_violations(
    files: &[&SourceFile],
    registry: &Registry<Linked>,
    config: &Config,
) -> Vec<Issue> {
    let presentation = &config.layers.presentation;
    let data = &config.layers.data;
    let mut issues = Vec::new();

    for file in files {
        if !presentation.contains(&file.relative_path) || data.contains(&file.relative_path) {
            continue;
        }

        for import in file.resolved_imports() {
            let Some(imported) = registry.get(import) else {
                continue;
            };
            if data.contains(&imported.relative_path) {
                issues.push(Issue::layer_violation(
                    data.name.clone(),
                    file.id.clone(),
                    imported.id.clone(),
                ));
            }
        }
    }

    issues
}
