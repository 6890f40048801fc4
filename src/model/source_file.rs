use super::FileId;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Text metrics for one file. The graph engine treats these as opaque and only
/// forwards them; `complexity` is the score used for ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileMetrics {
    pub loc: usize,
    pub complexity: usize,
    pub cognitive_complexity: usize,
    pub classes: usize,
    pub widgets: usize,
    pub methods: usize,
}

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub id: FileId,
    pub relative_path: String,
    pub raw_imports: Vec<String>,
    pub raw_exports: Vec<String>,
    pub metrics: FileMetrics,
    pub(crate) resolved_imports: BTreeSet<FileId>,
    pub(crate) resolved_exports: BTreeSet<FileId>,
    pub(crate) used_by: BTreeSet<FileId>,
}

impl SourceFile {
    pub fn new(
        id: FileId,
        project_root: &Path,
        raw_imports: Vec<String>,
        raw_exports: Vec<String>,
        metrics: FileMetrics,
    ) -> Self {
        let relative_path = id.relative_to(project_root);
        Self {
            id,
            relative_path,
            raw_imports,
            raw_exports,
            metrics,
            resolved_imports: BTreeSet::new(),
            resolved_exports: BTreeSet::new(),
            used_by: BTreeSet::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        self.id.file_name()
    }

    pub fn resolved_imports(&self) -> &BTreeSet<FileId> {
        &self.resolved_imports
    }

    pub fn resolved_exports(&self) -> &BTreeSet<FileId> {
        &self.resolved_exports
    }

    pub fn used_by(&self) -> &BTreeSet<FileId> {
        &self.used_by
    }
}
