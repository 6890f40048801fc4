use super::exports::ExportClosure;
use super::registry::{Linked, Registry, Resolved};
use crate::model::{FileId, SourceFile};
use std::collections::BTreeMap;

impl Registry<Resolved> {
    /// Propagate exports to their fixed point, then record for every file
    /// who uses it.
    pub fn link(mut self) -> (Registry<Linked>, ExportClosure) {
        let closure = ExportClosure::compute(
            self.files
                .iter()
                .map(|(id, file)| (id, file.resolved_exports())),
        );

        cross_link(&mut self.files, &closure);

        (self.advance(), closure)
    }
}

/// Importing a file makes the importer a user of that file and of everything
/// the file effectively re-exports.
pub(super) fn cross_link(files: &mut BTreeMap<FileId, SourceFile>, closure: &ExportClosure) {
    let mut usages: Vec<(FileId, FileId)> = Vec::new();

    for (consumer, file) in files.iter() {
        for imported in file.resolved_imports() {
            usages.push((imported.clone(), consumer.clone()));
            for exported in closure.exports_of(imported) {
                usages.push((exported.clone(), consumer.clone()));
            }
        }
    }

    let mut links = 0usize;
    for (used, consumer) in usages {
        if let Some(file) = files.get_mut(&used) {
            if file.used_by.insert(consumer) {
                links += 1;
            }
        }
    }

    tracing::debug!(links, "cross-linked usage");
}
