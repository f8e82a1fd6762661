//! Proptest generators shared by the property test suites.

use causeway_core::{Graph, WeightModel};
use proptest::prelude::*;

/// An arbitrary directed graph: 1–10 nodes, up to 3·n edges anywhere
/// (self-loops and parallels included), weights 1–10.
pub fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..=10).prop_flat_map(|node_count| {
        prop::collection::vec((0..node_count, 0..node_count, 1i64..=10), 0..=3 * node_count)
            .prop_map(move |edges| {
                let mut graph = Graph::new(node_count, true, WeightModel::Edge);
                for (from, to, weight) in edges {
                    graph.add_edge(from, to, weight).expect("generated in range");
                }
                graph
            })
    })
}

/// An arbitrary DAG: every generated pair is oriented low id → high id, so
/// no cycle can form. Parallel edges are kept.
pub fn arb_dag() -> impl Strategy<Value = Graph> {
    (2usize..=10).prop_flat_map(|node_count| {
        prop::collection::vec((0..node_count, 0..node_count, 1i64..=10), 0..=3 * node_count)
            .prop_map(move |edges| {
                let mut graph = Graph::new(node_count, true, WeightModel::Edge);
                for (a, b, weight) in edges {
                    if a != b {
                        graph
                            .add_edge(a.min(b), a.max(b), weight)
                            .expect("generated in range");
                    }
                }
                graph
            })
    })
}
