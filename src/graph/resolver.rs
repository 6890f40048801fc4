use super::registry::{Parsed, Registry, Resolved};
use crate::model::FileId;
use crate::project::Project;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::PathBuf;

const SDK_PREFIX: &str = "dart:";
const PACKAGE_PREFIX: &str = "package:";

/// Maps import/export specifiers to files of the project.
#[derive(Debug, Clone)]
pub struct PathResolver {
    own_package_prefix: String,
    lib_root: PathBuf,
}

impl PathResolver {
    pub fn new(project: &Project) -> Self {
        Self {
            own_package_prefix: project.package_prefix(),
            lib_root: project.lib_root.clone(),
        }
    }

    /// Resolve `specifier` as written in `from`. `None` is the normal answer
    /// for SDK libraries, third-party packages and anything that does not
    /// name a file accepted by `is_known`.
    pub fn resolve(
        &self,
        specifier: &str,
        from: &FileId,
        is_known: impl Fn(&FileId) -> bool,
    ) -> Option<FileId> {
        let candidate = self.candidate(specifier, from)?;
        is_known(&candidate).then_some(candidate)
    }

    fn candidate(&self, specifier: &str, from: &FileId) -> Option<FileId> {
        if specifier.starts_with(SDK_PREFIX) {
            return None;
        }

        if let Some(rest) = specifier.strip_prefix(&self.own_package_prefix) {
            return Some(FileId::new(self.lib_root.join(rest)));
        }

        if specifier.starts_with(PACKAGE_PREFIX) {
            return None;
        }

        Some(FileId::new(from.directory().join(specifier)))
    }

    fn resolve_all(
        &self,
        specifiers: &[String],
        from: &FileId,
        registry: &Registry<Parsed>,
    ) -> BTreeSet<FileId> {
        specifiers
            .iter()
            .filter_map(|s| self.resolve(s, from, |id| registry.contains(id)))
            .collect()
    }
}

impl Registry<Parsed> {
    /// Resolve every file's raw specifiers against the complete key set.
    /// Files resolve independently, so this runs on the rayon pool.
    pub fn resolve(mut self, resolver: &PathResolver) -> Registry<Resolved> {
        let edges: Vec<(FileId, BTreeSet<FileId>, BTreeSet<FileId>)> = self
            .files
            .par_iter()
            .map(|(id, file)| {
                (
                    id.clone(),
                    resolver.resolve_all(&file.raw_imports, id, &self),
                    resolver.resolve_all(&file.raw_exports, id, &self),
                )
            })
            .collect();

        for (id, imports, exports) in edges {
            if let Some(file) = self.files.get_mut(&id) {
                file.resolved_imports = imports;
                file.resolved_exports = exports;
            }
        }

        tracing::debug!(files = self.files.len(), "resolved import and export edges");
        self.advance()
    }
}
