//! Condensation: collapse a component partition into a DAG.
//!
//! Each component becomes one node. An edge `a → b` exists iff some original
//! edge crosses from a node in component `a` to a node in component `b` with
//! `a ≠ b`; edges inside a component are already summarized by strong
//! connectivity and are dropped.
//!
//! Deduplication is streaming: original nodes are scanned in id order, their
//! edges in insertion order, and only the **first** cross-edge seen for an
//! ordered component pair is inserted — later parallels (and their weights)
//! are ignored. Downstream stages rely on that order only for tie-breaking,
//! never for correctness.
//!
//! The result is acyclic by construction whenever the partition came from
//! [`find_sccs`](crate::graph::scc::find_sccs); acyclicity is not re-checked
//! here — the topological sort stage is where a caller verifies it.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::graph::build::Graph;
use crate::graph::scc::SccResult;

// ---------------------------------------------------------------------------
// Condensation
// ---------------------------------------------------------------------------

/// The component-per-node DAG plus node ↔ component lookups.
#[derive(Debug, Clone)]
pub struct Condensation {
    /// The condensed graph; node ids are component indices.
    pub graph: Graph,
    /// For each original node, its component id.
    pub component_of: Vec<usize>,
    /// For each component id, its member nodes in discovery order.
    pub members: Vec<Vec<usize>>,
}

impl Condensation {
    /// Number of components (nodes in the condensed graph).
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.graph.node_count()
    }

    /// The component id containing `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of the original graph.
    #[must_use]
    pub fn component(&self, node: usize) -> usize {
        self.component_of[node]
    }

    /// The original nodes collapsed into `component`.
    ///
    /// # Panics
    ///
    /// Panics if `component` is not a valid component id.
    #[must_use]
    pub fn members_of(&self, component: usize) -> &[usize] {
        &self.members[component]
    }

    /// Number of deduplicated cross-component edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Produce the reporting summary for this condensation.
    #[must_use]
    pub fn summary(&self, original: &Graph) -> CondensationSummary {
        CondensationSummary {
            original_nodes: original.node_count(),
            condensed_nodes: self.component_count(),
            condensed_edges: self.edge_count(),
            component_sizes: self.members.iter().map(Vec::len).collect(),
        }
    }
}

/// Summary of a condensation for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct CondensationSummary {
    /// Nodes in the original graph.
    pub original_nodes: usize,
    /// Nodes in the condensed graph.
    pub condensed_nodes: usize,
    /// Deduplicated cross-component edges.
    pub condensed_edges: usize,
    /// Member counts per component.
    pub component_sizes: Vec<usize>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Build the condensation of `graph` under `partition`.
///
/// Deterministic given the partition ordering and the original edge
/// insertion order; the weight of each condensed edge is the weight of the
/// first original cross-edge encountered for that component pair.
///
/// # Panics
///
/// Does not panic for a partition produced by
/// [`find_sccs`](crate::graph::scc::find_sccs) on the same graph — every
/// component id it yields is in range for the condensed graph.
#[must_use]
pub fn condense(graph: &Graph, partition: &SccResult) -> Condensation {
    let component_count = partition.component_count();
    let mut condensed = Graph::new(component_count, true, graph.weight_model());

    // Seen ordered component pairs, keyed by a compact pair encoding.
    let mut seen: HashSet<usize> = HashSet::new();

    for from in 0..graph.node_count() {
        let component_from = partition.component_of[from];
        for edge in graph.edges(from) {
            let component_to = partition.component_of[edge.to];
            if component_from == component_to {
                continue;
            }
            let key = component_from * component_count + component_to;
            if seen.insert(key) {
                condensed
                    .add_edge(component_from, component_to, edge.weight)
                    .expect("component ids are in range by construction");
            }
        }
    }

    debug!(
        original_nodes = graph.node_count(),
        condensed_nodes = component_count,
        condensed_edges = condensed.edge_count(),
        "condensation built"
    );

    Condensation {
        graph: condensed,
        component_of: partition.component_of.clone(),
        members: partition.components.clone(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
