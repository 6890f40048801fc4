use crate::model::FileId;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// For every file, the set of files it makes available through re-export
/// chains (A exports B, B exports C: A effectively exports B and C).
///
/// Derived purely from the direct export edges; it is never stored on the
/// files themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportClosure {
    effective: BTreeMap<FileId, BTreeSet<FileId>>,
}

impl ExportClosure {
    /// Propagate direct exports to a fixed point.
    ///
    /// Every file starts from its direct exports. When a file's set grows,
    /// each file that directly exports it is queued again, until nothing
    /// grows. Sets only ever grow and are bounded by the number of files, so
    /// this terminates, and the result does not depend on queue order.
    pub fn compute<'a>(
        direct_exports: impl IntoIterator<Item = (&'a FileId, &'a BTreeSet<FileId>)>,
    ) -> Self {
        let direct: BTreeMap<&FileId, &BTreeSet<FileId>> = direct_exports.into_iter().collect();

        let mut exporters: BTreeMap<&FileId, Vec<&FileId>> = BTreeMap::new();
        for (&file, &targets) in &direct {
            for target in targets {
                exporters.entry(target).or_default().push(file);
            }
        }

        let mut effective: BTreeMap<FileId, BTreeSet<FileId>> = direct
            .iter()
            .map(|(&file, &targets)| (file.clone(), targets.clone()))
            .collect();

        let mut queue: VecDeque<&FileId> = direct.keys().copied().collect();
        let mut queued: BTreeSet<&FileId> = direct.keys().copied().collect();
        let mut rounds = 0usize;

        while let Some(file) = queue.pop_front() {
            queued.remove(file);
            rounds += 1;

            let mut reachable = BTreeSet::new();
            for target in direct[file] {
                if let Some(further) = effective.get(target) {
                    reachable.extend(further.iter().cloned());
                }
            }

            let Some(own) = effective.get_mut(file) else {
                continue;
            };
            let before = own.len();
            own.extend(reachable);
            if own.len() == before {
                continue;
            }

            if let Some(parents) = exporters.get(file) {
                for &parent in parents {
                    if queued.insert(parent) {
                        queue.push_back(parent);
                    }
                }
            }
        }

        tracing::debug!(files = effective.len(), rounds, "export propagation converged");
        Self { effective }
    }

    /// Effective exports of `file`; empty for unknown files.
    pub fn exports_of(&self, file: &FileId) -> impl Iterator<Item = &FileId> {
        self.effective.get(file).into_iter().flatten()
    }

    pub fn get(&self, file: &FileId) -> Option<&BTreeSet<FileId>> {
        self.effective.get(file)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FileId, &BTreeSet<FileId>)> {
        self.effective.iter()
    }
}
