//! Kahn's in-degree-driven topological sort.
//!
//! One pass over all edges computes in-degrees; a FIFO queue is seeded with
//! every zero-in-degree node in increasing id order, then drained — each
//! dequeue appends to the order and decrements its targets, enqueueing a
//! target the instant it reaches zero (within one dequeue, targets follow
//! stored edge order).
//!
//! Cyclic input is a *signal*, not a failure: nodes on a cycle never reach
//! in-degree zero, so the produced order is a strict prefix and
//! [`TopoResult::is_acyclic`] is false. Callers must branch on the flag
//! before trusting the order.

use std::collections::VecDeque;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::graph::build::Graph;
use crate::metrics::QueueMetrics;

// ---------------------------------------------------------------------------
// TopoResult
// ---------------------------------------------------------------------------

/// The result of one topological sort.
#[derive(Debug, Clone, Serialize)]
pub struct TopoResult {
    /// Dequeue order. A valid topological order iff `is_acyclic`; otherwise
    /// the prefix of nodes that drained before the queue starved.
    pub order: Vec<usize>,
    /// True iff every node was ordered (`order.len() == node_count`).
    pub is_acyclic: bool,
    /// Queue traffic counters.
    pub metrics: QueueMetrics,
}

// ---------------------------------------------------------------------------
// Kahn
// ---------------------------------------------------------------------------

/// Topologically sort `graph`.
///
/// Deterministic for a fixed edge-insertion order: seeds enter the queue in
/// increasing node id, and newly freed nodes enter in stored edge order.
#[must_use]
pub fn topo_sort(graph: &Graph) -> TopoResult {
    let started = Instant::now();
    let mut metrics = QueueMetrics::default();
    let node_count = graph.node_count();

    // In-degrees from a single scan of all edges.
    let mut in_degree = vec![0usize; node_count];
    for node in 0..node_count {
        for edge in graph.edges(node) {
            in_degree[edge.to] += 1;
        }
    }

    let mut queue: VecDeque<usize> = VecDeque::new();
    for (node, &degree) in in_degree.iter().enumerate() {
        if degree == 0 {
            metrics.pushes += 1;
            queue.push_back(node);
        }
    }

    let mut order: Vec<usize> = Vec::with_capacity(node_count);

    while let Some(node) = queue.pop_front() {
        metrics.pops += 1;
        order.push(node);

        for edge in graph.edges(node) {
            in_degree[edge.to] -= 1;
            if in_degree[edge.to] == 0 {
                metrics.pushes += 1;
                queue.push_back(edge.to);
            }
        }
    }

    let is_acyclic = order.len() == node_count;
    metrics.elapsed = started.elapsed();
    debug!(
        ordered = order.len(),
        node_count,
        is_acyclic,
        "kahn sort complete"
    );

    TopoResult {
        order,
        is_acyclic,
        metrics,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
