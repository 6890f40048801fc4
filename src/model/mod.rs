mod cycle;
mod file_id;
mod issue;
mod layer;
mod source_file;

pub use cycle::Cycle;
pub use file_id::{FileId, normalize_path};
pub use issue::{Issue, IssueKind, IssueSeverity, Location};
pub use layer::{Layer, glob_match};
pub use source_file::{FileMetrics, SourceFile};

use crate::graph::{ExportClosure, Linked, Registry, ReportScope};
use crate::project::Project;
use serde::Serialize;
use std::path::PathBuf;

pub struct AnalysisResult {
    pub project: Project,
    pub registry: Registry<Linked>,
    pub exports: ExportClosure,
    /// Every cycle in the project, regardless of scope.
    pub cycles: Vec<Cycle>,
    pub scope: ReportScope,
    /// Requested targets that are not part of the registry.
    pub missing_targets: Vec<PathBuf>,
    pub ignored_files: usize,
    pub issues: Vec<Issue>,
    pub summary: Summary,
    pub health: CodeHealth,
    pub hotspots: Vec<Hotspot>,
}

impl AnalysisResult {
    pub fn reported_files(&self) -> Vec<&SourceFile> {
        self.scope.select(&self.registry)
    }

    pub fn reported_cycles(&self) -> Vec<&Cycle> {
        self.cycles
            .iter()
            .filter(|cycle| cycle.members().iter().any(|id| self.scope.includes(id)))
            .collect()
    }

    pub fn is_partial(&self) -> bool {
        self.scope.is_partial()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub reported_files: usize,
    pub ignored_files: usize,
    pub total_loc: usize,
    pub avg_complexity: f64,
    pub avg_cognitive_complexity: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CodeHealth {
    pub high_complexity_files: usize,
    pub large_files_count: usize,
    pub highly_coupled_files: usize,
    pub health_score: usize,
}

/// A file that is both widely used and complex.
#[derive(Debug, Clone, Serialize)]
pub struct Hotspot {
    #[serde(skip)]
    pub file: FileId,
    pub path: String,
    pub risk_score: usize,
    pub reason: String,
}
