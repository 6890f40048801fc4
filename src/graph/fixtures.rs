//! In-memory projects for graph tests.

use super::{ExportClosure, Linked, Parsed, PathResolver, Registry};
use crate::model::{FileId, FileMetrics, SourceFile};
use crate::project::Project;
use std::path::{Path, PathBuf};

pub fn project() -> Project {
    Project {
        root: PathBuf::from("/app"),
        lib_root: PathBuf::from("/app/lib"),
        package_name: "app".to_string(),
    }
}

/// `lib/<name>.dart` of the fixture project.
pub fn id(name: &str) -> FileId {
    FileId::new(format!("/app/lib/{}.dart", name))
}

/// `(name, imports, exports)` where imports and exports are space-separated
/// names, written as own-package specifiers.
pub fn parsed(specs: &[(&str, &str, &str)]) -> Registry<Parsed> {
    let to_specifiers = |names: &str| -> Vec<String> {
        names
            .split_whitespace()
            .map(|n| format!("package:app/{}.dart", n))
            .collect()
    };

    Registry::new(specs.iter().map(|&(name, imports, exports)| {
        SourceFile::new(
            id(name),
            Path::new("/app"),
            to_specifiers(imports),
            to_specifiers(exports),
            FileMetrics::default(),
        )
    }))
}

pub fn linked(specs: &[(&str, &str, &str)]) -> (Registry<Linked>, ExportClosure) {
    parsed(specs).resolve(&PathResolver::new(&project())).link()
}

pub fn set_metrics(registry: &mut Registry<Parsed>, name: &str, metrics: FileMetrics) {
    if let Some(file) = registry.files.get_mut(&id(name)) {
        file.metrics = metrics;
    }
}
