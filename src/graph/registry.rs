use crate::model::{FileId, SourceFile};
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Files discovered and parsed; no edges resolved yet.
#[derive(Debug)]
pub struct Parsed;

/// Every file's import and export edges resolved; `used_by` still empty.
#[derive(Debug)]
pub struct Resolved;

/// Reverse usage populated. Read-only from here on.
#[derive(Debug)]
pub struct Linked;

/// All source files of a project keyed by identity.
///
/// The phase parameter records how far the pipeline has progressed, so a
/// registry can only be linked after resolution and only a linked registry
/// reaches cycle detection and reporting.
#[derive(Debug)]
pub struct Registry<P> {
    pub(super) files: BTreeMap<FileId, SourceFile>,
    phase: PhantomData<P>,
}

impl<P> Registry<P> {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, id: &FileId) -> Option<&SourceFile> {
        self.files.get(id)
    }

    pub fn contains(&self, id: &FileId) -> bool {
        self.files.contains_key(id)
    }

    /// Files in identity order.
    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &FileId> {
        self.files.keys()
    }

    pub(super) fn advance<Q>(self) -> Registry<Q> {
        Registry {
            files: self.files,
            phase: PhantomData,
        }
    }
}

impl Registry<Parsed> {
    /// Later duplicates of the same identity replace earlier ones.
    pub fn new(files: impl IntoIterator<Item = SourceFile>) -> Self {
        Self {
            files: files.into_iter().map(|f| (f.id.clone(), f)).collect(),
            phase: PhantomData,
        }
    }
}
