use super::FileId;
use std::collections::BTreeSet;

/// A closed walk in the import graph: the first file repeats at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    path: Vec<FileId>,
}

impl Cycle {
    /// Build a cycle from its distinct members in walk order.
    pub fn from_members(members: Vec<FileId>) -> Self {
        let mut path = members;
        if let Some(first) = path.first().cloned() {
            path.push(first);
        }
        Self { path }
    }

    pub fn path(&self) -> &[FileId] {
        &self.path
    }

    /// Distinct files in walk order, without the closing repeat.
    pub fn members(&self) -> &[FileId] {
        match self.path.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// Order- and rotation-independent identity used for de-duplication.
    pub fn signature(&self) -> BTreeSet<FileId> {
        self.members().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.members().len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn contains(&self, id: &FileId) -> bool {
        self.members().contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_walk_and_signature() {
        let a = FileId::new("/p/lib/a.dart");
        let b = FileId::new("/p/lib/b.dart");

        let forward = Cycle::from_members(vec![a.clone(), b.clone()]);
        let rotated = Cycle::from_members(vec![b.clone(), a.clone()]);

        assert_eq!(forward.path(), &[a.clone(), b.clone(), a.clone()]);
        assert_eq!(forward.len(), 2);
        assert_eq!(forward.signature(), rotated.signature());
        assert!(forward.contains(&b));
    }

    #[test]
    fn test_self_loop() {
        let a = FileId::new("/p/lib/a.dart");
        let cycle = Cycle::from_members(vec![a.clone()]);
        assert_eq!(cycle.path(), &[a.clone(), a]);
        assert_eq!(cycle.len(), 1);
    }
}
