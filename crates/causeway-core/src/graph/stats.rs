//! Summary statistics for an analyzed graph.
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**: size of the original graph.
//! - **density**: `edge_count / (node_count * (node_count - 1))` for a
//!   directed graph — 1.0 means fully connected, 0.0 covers empty and
//!   single-node graphs.
//! - **component_count**: strongly connected components; equals
//!   `node_count` in a fully acyclic graph.
//! - **cycle_count**: components with more than one member.
//! - **largest_component**: member count of the biggest component.
//! - **condensed_edge_count**: deduplicated cross-component edges.
//! - **isolated_node_count**: nodes with neither in- nor out-edges.
//! - **max_in_degree** / **max_out_degree**: extremes over the original
//!   graph.

use serde::Serialize;

use crate::graph::build::Graph;
use crate::graph::condense::Condensation;
use crate::graph::scc::SccResult;

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics over a graph and its component structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Nodes in the original graph.
    pub node_count: usize,
    /// Logical edges in the original graph.
    pub edge_count: usize,
    /// Edge density in `[0.0, 1.0]`; zero for graphs with fewer than two
    /// nodes.
    pub density: f64,
    /// Strongly connected components.
    pub component_count: usize,
    /// Components with more than one member.
    pub cycle_count: usize,
    /// Member count of the largest component (zero for an empty graph).
    pub largest_component: usize,
    /// Edges in the condensation DAG.
    pub condensed_edge_count: usize,
    /// Nodes with no edges in either direction.
    pub isolated_node_count: usize,
    /// Highest in-degree in the original graph.
    pub max_in_degree: usize,
    /// Highest out-degree in the original graph.
    pub max_out_degree: usize,
}

impl GraphStats {
    /// Compute statistics from a graph and its analysis artifacts.
    #[must_use]
    pub fn from_analysis(
        graph: &Graph,
        partition: &SccResult,
        condensation: &Condensation,
    ) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();

        let mut in_degree = vec![0usize; node_count];
        let mut max_out_degree = 0;
        for node in 0..node_count {
            max_out_degree = max_out_degree.max(graph.edges(node).len());
            for edge in graph.edges(node) {
                in_degree[edge.to] += 1;
            }
        }

        let max_in_degree = in_degree.iter().copied().max().unwrap_or(0);
        let isolated_node_count = (0..node_count)
            .filter(|&node| in_degree[node] == 0 && graph.edges(node).is_empty())
            .count();

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            component_count: partition.component_count(),
            cycle_count: partition.cycle_count(),
            largest_component: partition.component_sizes().into_iter().max().unwrap_or(0),
            condensed_edge_count: condensation.edge_count(),
            isolated_node_count,
            max_in_degree,
            max_out_degree,
        }
    }

    /// Return `true` if the graph contains at least one dependency cycle.
    #[must_use]
    pub const fn has_cycles(&self) -> bool {
        self.cycle_count > 0
    }
}

// ---------------------------------------------------------------------------
// Internal helpers (cast precision suppressed at function scope)
// ---------------------------------------------------------------------------

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    edge_count as f64 / max_edges
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
