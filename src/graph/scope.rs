use super::registry::{Linked, Registry};
use crate::model::{FileId, SourceFile, normalize_path};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Which files a report shows. Selecting a scope never changes what was
/// computed for the files in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReportScope {
    #[default]
    Full,
    Partial(BTreeSet<FileId>),
}

impl ReportScope {
    pub fn includes(&self, id: &FileId) -> bool {
        match self {
            ReportScope::Full => true,
            ReportScope::Partial(ids) => ids.contains(id),
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, ReportScope::Partial(_))
    }

    /// Files of the scope in identity order.
    pub fn select<'a>(&self, registry: &'a Registry<Linked>) -> Vec<&'a SourceFile> {
        match self {
            ReportScope::Full => registry.files().collect(),
            ReportScope::Partial(ids) => ids.iter().filter_map(|id| registry.get(id)).collect(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportScope::Full => "Full Project",
            ReportScope::Partial(_) => "Partial (Selected Files)",
        }
    }
}

/// Turn caller-supplied paths into a scope. An empty target list means the
/// whole project. Targets that name no registered file are returned
/// separately, one entry each, and do not end up in the scope.
pub fn select_scope<S: AsRef<str>>(
    registry: &Registry<Linked>,
    root: &Path,
    targets: &[S],
) -> (ReportScope, Vec<PathBuf>) {
    if targets.is_empty() {
        return (ReportScope::Full, Vec::new());
    }

    let mut selected = BTreeSet::new();
    let mut missing = Vec::new();

    for target in targets {
        let path = target_path(root, target.as_ref());
        match registered_id(registry, &path) {
            Some(id) => {
                selected.insert(id);
            }
            None => missing.push(path),
        }
    }

    tracing::debug!(
        selected = selected.len(),
        missing = missing.len(),
        "selected report scope"
    );
    (ReportScope::Partial(selected), missing)
}

/// Identity of `path` in the registry. The lexical form is tried first, so
/// symlinks inside `lib/` keep the name they were discovered under; then the
/// canonical form, for targets spelled through a symlinked directory.
fn registered_id(registry: &Registry<Linked>, path: &Path) -> Option<FileId> {
    let lexical = FileId::new(path);
    if registry.contains(&lexical) {
        return Some(lexical);
    }
    let canonical = FileId::new(std::fs::canonicalize(path).ok()?);
    registry.contains(&canonical).then_some(canonical)
}

fn target_path(root: &Path, raw: &str) -> PathBuf {
    let trimmed = raw.trim().trim_matches(|c| c == '"' || c == '\'');
    let path = Path::new(trimmed);
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&root.join(path))
    }
}
