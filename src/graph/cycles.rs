use super::import_graph::ImportGraph;
use super::registry::{Linked, Registry};
use crate::model::{Cycle, FileId};
use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;
use std::collections::{BTreeSet, VecDeque};

/// Enumerate the distinct import cycles of the project.
///
/// Every file not yet reached by an earlier seed starts a depth-first walk.
/// Reaching a file that is still on the walk's path records the path suffix
/// from that file as a cycle, unless a cycle with the same members was
/// recorded before. A strongly connected components pass then adds a shortest
/// cycle for any component member the walks did not cover.
pub fn detect_cycles(registry: &Registry<Linked>) -> Vec<Cycle> {
    let graph = ImportGraph::build(registry);
    let mut recorder = CycleRecorder::default();
    let mut checked = vec![false; graph.len()];

    for seed in graph.graph().node_indices() {
        if checked[seed.index()] {
            continue;
        }
        for reached in walk_from(&graph, seed, &mut recorder) {
            checked[reached.index()] = true;
        }
    }

    let from_walks = recorder.cycles.len();
    complete_components(&graph, &mut recorder);

    tracing::debug!(
        cycles = recorder.cycles.len(),
        from_components = recorder.cycles.len() - from_walks,
        "cycle detection finished"
    );
    recorder.cycles
}

#[derive(Default)]
struct CycleRecorder {
    signatures: BTreeSet<BTreeSet<FileId>>,
    covered: BTreeSet<FileId>,
    cycles: Vec<Cycle>,
}

impl CycleRecorder {
    fn record(&mut self, graph: &ImportGraph, walk: &[NodeIndex]) {
        let members: Vec<FileId> = walk.iter().map(|&idx| graph.file(idx).clone()).collect();
        let cycle = Cycle::from_members(members);
        if self.signatures.insert(cycle.signature()) {
            self.covered.extend(cycle.members().iter().cloned());
            self.cycles.push(cycle);
        }
    }
}

/// Iterative DFS from `seed` with an explicit path stack. Returns every node
/// the walk reached.
fn walk_from(graph: &ImportGraph, seed: NodeIndex, recorder: &mut CycleRecorder) -> Vec<NodeIndex> {
    let mut visited = vec![false; graph.len()];
    // position of each node on the current path
    let mut on_path: Vec<Option<usize>> = vec![None; graph.len()];
    let mut path: Vec<NodeIndex> = Vec::new();
    // (node, index of the next successor to try)
    let mut frames: Vec<(NodeIndex, usize)> = Vec::new();
    let mut reached = Vec::new();

    visited[seed.index()] = true;
    on_path[seed.index()] = Some(0);
    path.push(seed);
    frames.push((seed, 0));
    reached.push(seed);

    while let Some(&(node, next)) = frames.last() {
        let Some(&target) = graph.successors(node).get(next) else {
            frames.pop();
            path.pop();
            on_path[node.index()] = None;
            continue;
        };
        let top = frames.len() - 1;
        frames[top].1 += 1;

        if let Some(start) = on_path[target.index()] {
            recorder.record(graph, &path[start..]);
        } else if !visited[target.index()] {
            visited[target.index()] = true;
            on_path[target.index()] = Some(path.len());
            path.push(target);
            frames.push((target, 0));
            reached.push(target);
        }
    }

    reached
}

fn complete_components(graph: &ImportGraph, recorder: &mut CycleRecorder) {
    let mut components: Vec<Vec<NodeIndex>> = tarjan_scc(graph.graph())
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|mut component| {
            component.sort();
            component
        })
        .collect();
    components.sort();

    let mut in_component = vec![false; graph.len()];
    for component in components {
        for &idx in &component {
            in_component[idx.index()] = true;
        }

        for &member in &component {
            if recorder.covered.contains(graph.file(member)) {
                continue;
            }
            if let Some(walk) = shortest_cycle_through(graph, member, &in_component) {
                recorder.record(graph, &walk);
            }
        }

        for &idx in &component {
            in_component[idx.index()] = false;
        }
    }
}

/// Breadth-first search for the shortest walk from `start` back to itself,
/// staying inside the component.
fn shortest_cycle_through(
    graph: &ImportGraph,
    start: NodeIndex,
    in_component: &[bool],
) -> Option<Vec<NodeIndex>> {
    let mut parent: Vec<Option<NodeIndex>> = vec![None; graph.len()];
    let mut seen = vec![false; graph.len()];
    let mut queue = VecDeque::from([start]);
    seen[start.index()] = true;

    while let Some(node) = queue.pop_front() {
        for &next in graph.successors(node) {
            if !in_component[next.index()] {
                continue;
            }
            if next == start {
                let mut walk = vec![node];
                let mut cursor = node;
                while let Some(prev) = parent[cursor.index()] {
                    walk.push(prev);
                    cursor = prev;
                }
                walk.reverse();
                return Some(walk);
            }
            if !seen[next.index()] {
                seen[next.index()] = true;
                parent[next.index()] = Some(node);
                queue.push_back(next);
            }
        }
    }

    None
}
