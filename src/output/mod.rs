mod json;
mod markdown;

pub use json::JsonOutput;
pub use markdown::MarkdownOutput;

use crate::model::{AnalysisResult, FileId, Issue, IssueSeverity};
use std::io::Write;

pub const GENERATOR: &str = concat!("dartmap v", env!("CARGO_PKG_VERSION"));

pub trait OutputFormatter {
    fn format<W: Write>(&self, result: &AnalysisResult, writer: &mut W) -> std::io::Result<()>;
}

/// Display form of a file relative to the project root.
pub fn relative_path(result: &AnalysisResult, id: &FileId) -> String {
    id.relative_to(&result.project.root)
}

pub(crate) fn visible_issues(
    result: &AnalysisResult,
    min_severity: IssueSeverity,
) -> impl Iterator<Item = &Issue> {
    result
        .issues
        .iter()
        .filter(move |issue| issue.severity >= min_severity)
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::analysis::analyze;
    use crate::config::Config;
    use crate::fs::default_fs;
    use crate::ignore_rules::IgnoreRules;
    use crate::model::AnalysisResult;
    use crate::project::Project;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Small shop app with one cycle, one barrel and one unused file.
    pub fn shop_result(targets: &[&str]) -> (TempDir, AnalysisResult) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        write(&root, "pubspec.yaml", "name: shop\nversion: 1.0.0\n");
        write(
            &root,
            "lib/main.dart",
            "import 'package:flutter/material.dart';\nimport 'package:shop/app.dart';\n\nvoid main() {\n  runApp(App());\n}\n",
        );
        write(
            &root,
            "lib/app.dart",
            "import 'widgets/widgets.dart';\nimport 'state/cart.dart';\n\nclass App {}\n",
        );
        write(&root, "lib/widgets/widgets.dart", "export 'button.dart';\n");
        write(
            &root,
            "lib/widgets/button.dart",
            "class Button {\n  void tap() {\n    if (enabled) {\n      run();\n    }\n  }\n}\n",
        );
        write(&root, "lib/state/cart.dart", "import '../app.dart';\n\nclass Cart {}\n");
        write(&root, "lib/legacy.dart", "class Legacy {}\n");
        write(&root, "lib/app.g.dart", "// generated\n");

        let project = Project::open(&root, default_fs()).unwrap();
        let result = analyze(
            project,
            &Config::default(),
            &IgnoreRules::default(),
            default_fs(),
            targets,
        );
        (dir, result)
    }
}
