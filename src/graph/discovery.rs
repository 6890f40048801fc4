use super::registry::{Parsed, Registry};
use crate::fs::FileSystem;
use crate::ignore_rules::IgnoreRules;
use crate::model::{FileId, SourceFile};
use crate::parser::parse_source;
use crate::project::Project;
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

const SOURCE_SUFFIX: &str = ".dart";

/// Result of walking the source root.
#[derive(Debug)]
pub struct Discovery {
    pub registry: Registry<Parsed>,
    /// Dart files skipped by the ignore rules.
    pub ignored: usize,
}

/// Find every eligible source file under the project's `lib/` and parse it.
pub fn discover(project: &Project, rules: &IgnoreRules, fs: &dyn FileSystem) -> Discovery {
    let (paths, ignored) = collect_source_files(&project.lib_root, rules);
    tracing::debug!(files = paths.len(), ignored, "discovered source files");

    Discovery {
        registry: parse_files(&paths, &project.root, fs),
        ignored,
    }
}

/// Dart files below `lib_root`, sorted, plus the number of ignored ones.
/// Version-control ignore files and hidden-file rules do not apply here;
/// only the suffix rules decide.
pub fn collect_source_files(lib_root: &Path, rules: &IgnoreRules) -> (Vec<PathBuf>, usize) {
    let walker = WalkBuilder::new(lib_root).standard_filters(false).build();

    let mut paths = Vec::new();
    let mut ignored = 0usize;

    for entry in walker.flatten() {
        let path = entry.path();
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if !file_name.ends_with(SOURCE_SUFFIX) {
            continue;
        }
        // symlinked files count under their own name
        let is_file = match entry.file_type() {
            Some(t) if t.is_symlink() => path.is_file(),
            Some(t) => t.is_file(),
            None => false,
        };
        if !is_file {
            continue;
        }

        if rules.matches(file_name) {
            ignored += 1;
            continue;
        }
        paths.push(path.to_path_buf());
    }

    paths.sort();
    (paths, ignored)
}

/// Parse each file once. Files are independent, so this runs on the rayon
/// pool; unreadable files parse as empty.
pub fn parse_files(paths: &[PathBuf], project_root: &Path, fs: &dyn FileSystem) -> Registry<Parsed> {
    let files: Vec<SourceFile> = paths
        .par_iter()
        .map(|path| {
            let source = fs.read_lossy(path);
            let parsed = parse_source(&source);
            SourceFile::new(
                FileId::new(path),
                project_root,
                parsed.imports,
                parsed.exports,
                parsed.metrics,
            )
        })
        .collect();

    Registry::new(files)
}
