//! Strongly connected components via Kosaraju's two-pass traversal.
//!
//! # Algorithm
//!
//! 1. Depth-first traversal from every unvisited node, outer loop in
//!    increasing node id; each node is pushed onto a finish stack on
//!    **post-order** completion. Edges are walked in stored insertion
//!    order — finishing order depends on it, and everything downstream
//!    depends on finishing order.
//! 2. Build the edge-reversed copy of the graph.
//! 3. Pop the finish stack; every still-unvisited popped node seeds a
//!    depth-first collection over the reversed graph, and everything it
//!    reaches becomes the next component.
//!
//! Components are therefore numbered by discovery, with members listed in
//! the order the collection pass reached them — not sorted.
//!
//! Both passes run on an explicit frame stack (node + cursor into its edge
//! list) rather than recursion, so deep graphs cannot overflow the call
//! stack and the post-order push does not depend on unwind order.
//!
//! There are no failure states: any graph yields a complete partition.
//! Isolated nodes form singleton components, and a self-loop does not by
//! itself grow a component past one member.

use std::time::Instant;

use fixedbitset::FixedBitSet;
use serde::Serialize;
use tracing::debug;

use crate::graph::build::Graph;
use crate::metrics::DfsMetrics;

// ---------------------------------------------------------------------------
// SccResult
// ---------------------------------------------------------------------------

/// The component partition of a graph.
///
/// Every node appears in exactly one component. Mutual reachability is the
/// membership test: two nodes share a component iff each can reach the
/// other in the original graph.
#[derive(Debug, Clone, Serialize)]
pub struct SccResult {
    /// Components in discovery order; members in collection order.
    pub components: Vec<Vec<usize>>,
    /// For each node, the index of its component in `components`.
    pub component_of: Vec<usize>,
    /// Traversal counters for both passes combined.
    pub metrics: DfsMetrics,
}

impl SccResult {
    /// Number of components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Member counts per component, in component order.
    #[must_use]
    pub fn component_sizes(&self) -> Vec<usize> {
        self.components.iter().map(Vec::len).collect()
    }

    /// Number of components with more than one member (true cycles).
    #[must_use]
    pub fn cycle_count(&self) -> usize {
        self.components.iter().filter(|c| c.len() > 1).count()
    }
}

// ---------------------------------------------------------------------------
// Kosaraju
// ---------------------------------------------------------------------------

/// Partition `graph` into strongly connected components.
///
/// Deterministic for a fixed edge-insertion order; see the module docs for
/// how the two passes assign component numbers.
#[must_use]
pub fn find_sccs(graph: &Graph) -> SccResult {
    let started = Instant::now();
    let mut metrics = DfsMetrics::default();
    let node_count = graph.node_count();

    // Pass 1: post-order finish stack over the original graph.
    let mut visited = FixedBitSet::with_capacity(node_count);
    let mut finish_order: Vec<usize> = Vec::with_capacity(node_count);

    for start in 0..node_count {
        if !visited.contains(start) {
            push_in_finish_order(graph, start, &mut visited, &mut finish_order, &mut metrics);
        }
    }

    // Pass 2: collect components over the reversed graph, popping the
    // finish stack so the node that finished last seeds component 0.
    let reversed = graph.reversed();
    visited.clear();

    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut component_of = vec![0usize; node_count];

    while let Some(seed) = finish_order.pop() {
        if !visited.contains(seed) {
            let component_id = components.len();
            let members = collect_component(
                &reversed,
                seed,
                component_id,
                &mut visited,
                &mut component_of,
                &mut metrics,
            );
            components.push(members);
        }
    }

    metrics.elapsed = started.elapsed();
    debug!(
        components = components.len(),
        visits = metrics.visits,
        edge_scans = metrics.edge_scans,
        "kosaraju partition complete"
    );

    SccResult {
        components,
        component_of,
        metrics,
    }
}

/// First-pass DFS from `start`: push every finished node onto
/// `finish_order` in post-order.
fn push_in_finish_order(
    graph: &Graph,
    start: usize,
    visited: &mut FixedBitSet,
    finish_order: &mut Vec<usize>,
    metrics: &mut DfsMetrics,
) {
    // Each frame is (node, cursor into its edge list). A frame pops only
    // once its cursor has walked every edge — that pop is the post-order
    // finish.
    let mut frames: Vec<(usize, usize)> = vec![(start, 0)];
    visited.insert(start);
    metrics.visits += 1;

    while let Some(frame) = frames.last_mut() {
        let (node, cursor) = *frame;
        if let Some(edge) = graph.edges(node).get(cursor) {
            frame.1 += 1;
            metrics.edge_scans += 1;
            if !visited.contains(edge.to) {
                visited.insert(edge.to);
                metrics.visits += 1;
                frames.push((edge.to, 0));
            }
        } else {
            frames.pop();
            finish_order.push(node);
        }
    }
}

/// Second-pass DFS over the reversed graph: gather every node reachable
/// from `seed` into one component, recording membership as nodes are first
/// reached (pre-order).
fn collect_component(
    reversed: &Graph,
    seed: usize,
    component_id: usize,
    visited: &mut FixedBitSet,
    component_of: &mut [usize],
    metrics: &mut DfsMetrics,
) -> Vec<usize> {
    let mut members = vec![seed];
    let mut frames: Vec<(usize, usize)> = vec![(seed, 0)];
    visited.insert(seed);
    component_of[seed] = component_id;
    metrics.visits += 1;

    while let Some(frame) = frames.last_mut() {
        let (node, cursor) = *frame;
        if let Some(edge) = reversed.edges(node).get(cursor) {
            frame.1 += 1;
            metrics.edge_scans += 1;
            if !visited.contains(edge.to) {
                visited.insert(edge.to);
                component_of[edge.to] = component_id;
                members.push(edge.to);
                metrics.visits += 1;
                frames.push((edge.to, 0));
            }
        } else {
            frames.pop();
        }
    }

    members
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
