use super::registry::{Linked, Registry};
use crate::model::FileId;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::BTreeMap;

/// The resolved-import edges of a linked registry as a `petgraph` graph.
///
/// Nodes are added in `FileId` order, so node indices sort the same way the
/// files do. Successor lists are kept sorted for deterministic traversal.
pub struct ImportGraph {
    graph: DiGraph<FileId, ()>,
    successors: Vec<Vec<NodeIndex>>,
}

impl ImportGraph {
    pub fn build(registry: &Registry<Linked>) -> Self {
        let mut graph = DiGraph::with_capacity(registry.len(), 0);
        let mut node_indices = BTreeMap::new();

        for id in registry.ids() {
            let idx = graph.add_node(id.clone());
            node_indices.insert(id.clone(), idx);
        }

        let mut successors = vec![Vec::new(); graph.node_count()];
        for file in registry.files() {
            let Some(&from) = node_indices.get(&file.id) else {
                continue;
            };
            for import in file.resolved_imports() {
                if let Some(&to) = node_indices.get(import) {
                    graph.add_edge(from, to, ());
                    successors[from.index()].push(to);
                }
            }
            successors[from.index()].sort();
        }

        Self { graph, successors }
    }

    pub fn graph(&self) -> &DiGraph<FileId, ()> {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn file(&self, idx: NodeIndex) -> &FileId {
        &self.graph[idx]
    }

    /// Direct imports of `idx`, in `FileId` order.
    pub fn successors(&self, idx: NodeIndex) -> &[NodeIndex] {
        self.successors
            .get(idx.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::{id, linked};

    #[test]
    fn test_nodes_follow_file_order() {
        let (registry, _) = linked(&[("c", "a b", ""), ("a", "", ""), ("b", "a", "")]);
        let graph = ImportGraph::build(&registry);

        assert_eq!(graph.len(), 3);
        let order: Vec<_> = graph
            .graph()
            .node_indices()
            .map(|idx| graph.file(idx).clone())
            .collect();
        assert_eq!(order, vec![id("a"), id("b"), id("c")]);

        let c = graph
            .graph()
            .node_indices()
            .find(|&idx| graph.file(idx) == &id("c"))
            .unwrap();
        let targets: Vec<_> = graph
            .successors(c)
            .iter()
            .map(|&idx| graph.file(idx).clone())
            .collect();
        assert_eq!(targets, vec![id("a"), id("b")]);
    }

    #[test]
    fn test_export_edges_are_not_import_edges() {
        let (registry, _) = linked(&[("barrel", "", "a"), ("a", "", "")]);
        let graph = ImportGraph::build(&registry);
        assert_eq!(graph.graph().edge_count(), 0);
    }
}
