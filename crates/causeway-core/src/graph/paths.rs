//! Single-source DAG path analysis and the global critical path.
//!
//! # Overview
//!
//! Shortest and longest distances are computed by relaxation in topological
//! order: once the order is in hand, a single pass suffices — no priority
//! queue and no re-relaxation, because a topological order has no back
//! edges. Both directions share one traversal skeleton; only the
//! initialization and the comparison sign differ.
//!
//! Cyclic input is rejected up front: the internal topological sort reports
//! it, the result carries `is_valid = false`, and no relaxation happens.
//! There is no fallback to a general-graph algorithm. Unreachable nodes are
//! not an error — they keep the `None` distance sentinel.
//!
//! The **critical path** is the longest finite path anywhere in the graph:
//! longest-path runs from every source (O(V) invocations, each O(V+E)) and
//! the best `(source, target)` pair wins. Ties keep the first pair reaching
//! the maximum, sources and targets scanned in increasing id order.

#![allow(clippy::module_name_repetitions)]

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::GraphError;
use crate::graph::build::Graph;
use crate::graph::topo::topo_sort;
use crate::metrics::RelaxMetrics;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Distances and predecessors from one single-source computation.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    /// Distance per node; `None` marks nodes unreached from the source.
    pub dist: Vec<Option<i64>>,
    /// Predecessor per node on its best known path.
    pub prev: Vec<Option<usize>>,
    /// False iff the graph was cyclic; distances are meaningless then
    /// (only the source's zero was initialized).
    pub is_valid: bool,
    /// Relaxation and internal topological sort counters.
    pub metrics: RelaxMetrics,
}

impl PathResult {
    /// Distance to `node`, if it was reached.
    #[must_use]
    pub fn distance_to(&self, node: usize) -> Option<i64> {
        if self.is_valid {
            self.dist.get(node).copied().flatten()
        } else {
            None
        }
    }

    /// The best path ending at `target`, reconstructed by walking
    /// predecessors backward, or `None` if `target` was never reached (or
    /// the computation was invalid).
    #[must_use]
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_valid || self.dist.get(target).copied().flatten().is_none() {
            return None;
        }
        Some(walk_predecessors(&self.prev, target))
    }
}

/// The longest path anywhere in the graph.
#[derive(Debug, Clone, Serialize)]
pub struct CriticalPath {
    /// Node sequence from chosen source to chosen target.
    ///
    /// Degenerate inputs (no finite longest path in a non-empty graph)
    /// yield the single-node path `[0]`; an empty graph yields an empty
    /// path.
    pub path: Vec<usize>,
    /// Total weight along `path` (0 for degenerate results).
    pub length: i64,
    /// The source the winning run started from; `None` for an empty graph.
    pub source: Option<usize>,
}

// ---------------------------------------------------------------------------
// Single-source relaxation
// ---------------------------------------------------------------------------

/// Which extreme the relaxation pass keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Objective {
    Shortest,
    Longest,
}

/// Single-source shortest distances over an acyclic graph.
///
/// # Errors
///
/// Returns [`GraphError::SourceOutOfRange`] if `source` is not a node of
/// `graph`. Cyclic input is not an error — it comes back as a result with
/// `is_valid = false`.
pub fn shortest_paths(graph: &Graph, source: usize) -> Result<PathResult, GraphError> {
    check_source(graph, source)?;
    Ok(relax_in_topo_order(graph, source, Objective::Shortest))
}

/// Single-source longest distances over an acyclic graph.
///
/// # Errors
///
/// Returns [`GraphError::SourceOutOfRange`] if `source` is not a node of
/// `graph`. Cyclic input is not an error — it comes back as a result with
/// `is_valid = false`.
pub fn longest_paths(graph: &Graph, source: usize) -> Result<PathResult, GraphError> {
    check_source(graph, source)?;
    Ok(relax_in_topo_order(graph, source, Objective::Longest))
}

const fn check_source(graph: &Graph, source: usize) -> Result<(), GraphError> {
    if source >= graph.node_count() {
        return Err(GraphError::SourceOutOfRange {
            node: source,
            node_count: graph.node_count(),
        });
    }
    Ok(())
}

/// The shared relaxation skeleton: one pass over a topological order,
/// comparison parametrized by `objective`.
fn relax_in_topo_order(graph: &Graph, source: usize, objective: Objective) -> PathResult {
    let started = Instant::now();
    let mut metrics = RelaxMetrics::default();
    let node_count = graph.node_count();

    let mut dist: Vec<Option<i64>> = vec![None; node_count];
    let mut prev: Vec<Option<usize>> = vec![None; node_count];
    dist[source] = Some(0);

    let topo = topo_sort(graph);
    metrics.topo = topo.metrics;

    if !topo.is_acyclic {
        metrics.elapsed = started.elapsed();
        return PathResult {
            dist,
            prev,
            is_valid: false,
            metrics,
        };
    }

    for &node in &topo.order {
        // Nodes not yet reached cannot improve anything downstream.
        let Some(base) = dist[node] else { continue };
        for edge in graph.edges(node) {
            metrics.relaxations += 1;
            let candidate = base + edge.weight;
            let improves = match dist[edge.to] {
                None => true,
                Some(current) => match objective {
                    Objective::Shortest => candidate < current,
                    Objective::Longest => candidate > current,
                },
            };
            if improves {
                dist[edge.to] = Some(candidate);
                prev[edge.to] = Some(node);
            }
        }
    }

    metrics.elapsed = started.elapsed();
    PathResult {
        dist,
        prev,
        is_valid: true,
        metrics,
    }
}

// ---------------------------------------------------------------------------
// Critical path
// ---------------------------------------------------------------------------

/// Find the longest finite path anywhere in `graph`.
///
/// Runs longest-path from every node and keeps the best `(source, target)`
/// pair; the first pair reaching the maximum wins, so equal-length paths
/// found later never replace an earlier winner. On a cyclic graph every run
/// is invalid and the degenerate fallback applies.
#[must_use]
pub fn critical_path(graph: &Graph) -> CriticalPath {
    let node_count = graph.node_count();

    let mut best_length: Option<i64> = None;
    let mut best_source: Option<usize> = None;
    let mut best_path: Vec<usize> = Vec::new();

    for source in 0..node_count {
        let run = relax_in_topo_order(graph, source, Objective::Longest);
        if !run.is_valid {
            continue;
        }
        for (target, &distance) in run.dist.iter().enumerate() {
            let Some(distance) = distance else { continue };
            if best_length.is_none_or(|best| distance > best) {
                best_length = Some(distance);
                best_source = Some(source);
                best_path = walk_predecessors(&run.prev, target);
            }
        }
    }

    let result = match best_length {
        Some(length) => CriticalPath {
            path: best_path,
            length,
            source: best_source,
        },
        // Every run was invalid (cyclic graph): degenerate single-node
        // fallback rather than a failure.
        None if node_count > 0 => CriticalPath {
            path: vec![0],
            length: 0,
            source: Some(0),
        },
        None => CriticalPath {
            path: Vec::new(),
            length: 0,
            source: None,
        },
    };

    debug!(
        length = result.length,
        nodes = result.path.len(),
        "critical path selected"
    );
    result
}

/// Walk predecessor links backward from `target`, then reverse into
/// source-to-target order.
fn walk_predecessors(prev: &[Option<usize>], target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut cursor = target;
    while let Some(predecessor) = prev[cursor] {
        path.push(predecessor);
        cursor = predecessor;
    }
    path.reverse();
    path
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::{critical_path, longest_paths, shortest_paths};
    use crate::graph::build::{Graph, WeightModel};

    fn graph_with_edges(node_count: usize, edges: &[(usize, usize, i64)]) -> Graph {
        let mut graph = Graph::new(node_count, true, WeightModel::Edge);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight).expect("test edge in range");
        }
        graph
    }

    fn diverging_chain() -> Graph {
        // 0 → 1 → 2 → 3 with a heavy shortcut 0 → 2.
        graph_with_edges(4, &[(0, 1, 2), (1, 2, 3), (0, 2, 10), (2, 3, 1)])
    }

    // -----------------------------------------------------------------------
    // Shortest paths
    // -----------------------------------------------------------------------

    #[test]
    fn shortest_prefers_the_cheap_route() {
        let result = shortest_paths(&diverging_chain(), 0).expect("source in range");
        assert!(result.is_valid);
        assert_eq!(
            result.dist,
            vec![Some(0), Some(2), Some(5), Some(6)],
            "2 via the chain beats 10 via the shortcut"
        );
        assert_eq!(result.path_to(3), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn unreached_nodes_keep_the_sentinel() {
        let result =
            shortest_paths(&graph_with_edges(3, &[(1, 2, 1)]), 1).expect("source in range");
        assert!(result.is_valid);
        assert_eq!(result.dist[0], None, "node 0 unreachable from 1");
        assert_eq!(result.distance_to(2), Some(1));
        assert_eq!(result.path_to(0), None);
    }

    #[test]
    fn source_path_is_itself() {
        let result = shortest_paths(&graph_with_edges(2, &[(0, 1, 4)]), 0).expect("in range");
        assert_eq!(result.path_to(0), Some(vec![0]));
    }

    #[test]
    fn cyclic_input_is_flagged_invalid() {
        let mut graph = diverging_chain();
        graph.add_edge(2, 0, 1).expect("in range");

        let result = shortest_paths(&graph, 0).expect("source in range");
        assert!(!result.is_valid);
        assert_eq!(result.distance_to(3), None, "invalid results expose nothing");
    }

    #[test]
    fn out_of_range_source_is_a_construction_error() {
        let graph = graph_with_edges(2, &[(0, 1, 1)]);
        assert!(shortest_paths(&graph, 2).is_err());
        assert!(longest_paths(&graph, 9).is_err());
    }

    // -----------------------------------------------------------------------
    // Longest paths
    // -----------------------------------------------------------------------

    #[test]
    fn longest_prefers_the_heavy_route() {
        let result = longest_paths(&diverging_chain(), 0).expect("source in range");
        assert!(result.is_valid);
        assert_eq!(
            result.dist,
            vec![Some(0), Some(2), Some(10), Some(11)],
            "the 10-weight shortcut dominates the 5-weight chain"
        );
        assert_eq!(result.path_to(3), Some(vec![0, 2, 3]));
    }

    #[test]
    fn longest_and_shortest_agree_on_a_single_route() {
        let graph = graph_with_edges(3, &[(0, 1, 4), (1, 2, 2)]);
        let shortest = shortest_paths(&graph, 0).expect("in range");
        let longest = longest_paths(&graph, 0).expect("in range");
        assert_eq!(shortest.dist, longest.dist, "one route, one answer");
    }

    #[test]
    fn relaxation_counts_edges_from_reached_nodes_only() {
        let result =
            shortest_paths(&graph_with_edges(3, &[(1, 2, 1), (0, 1, 1)]), 1).expect("in range");
        // Node 0 is unreached; its edge is never relaxed.
        assert_eq!(result.metrics.relaxations, 1);
    }

    // -----------------------------------------------------------------------
    // Critical path
    // -----------------------------------------------------------------------

    #[test]
    fn critical_path_spans_the_heaviest_route() {
        let result = critical_path(&diverging_chain());
        assert_eq!(result.length, 11);
        assert_eq!(result.path, vec![0, 2, 3]);
        assert_eq!(result.source, Some(0));
    }

    #[test]
    fn critical_path_first_maximum_wins() {
        // Two disconnected edges of equal weight; the lower-id source is
        // found first and keeps the title.
        let result = critical_path(&graph_with_edges(4, &[(0, 1, 5), (2, 3, 5)]));
        assert_eq!(result.length, 5);
        assert_eq!(result.path, vec![0, 1]);
        assert_eq!(result.source, Some(0));
    }

    #[test]
    fn cyclic_graph_degenerates_to_node_zero() {
        let result = critical_path(&graph_with_edges(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]));
        assert_eq!(result.path, vec![0]);
        assert_eq!(result.length, 0);
        assert_eq!(result.source, Some(0));
    }

    #[test]
    fn single_node_graph_is_its_own_critical_path() {
        let result = critical_path(&graph_with_edges(1, &[]));
        assert_eq!(result.path, vec![0]);
        assert_eq!(result.length, 0);
        assert_eq!(result.source, Some(0));
    }

    #[test]
    fn empty_graph_has_an_empty_critical_path() {
        let result = critical_path(&graph_with_edges(0, &[]));
        assert!(result.path.is_empty());
        assert_eq!(result.length, 0);
        assert_eq!(result.source, None);
    }
}
