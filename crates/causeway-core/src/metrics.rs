//! Per-stage instrumentation counters.
//!
//! Each analysis stage counts the operations it performs (node visits, edge
//! scans, queue traffic, relaxations) and measures its own wall time. The
//! counters travel *with* the stage result as a plain value — stages share
//! no mutable instrumentation state, so two runs over the same graph can
//! never observe each other.

use std::time::Duration;

use serde::Serialize;

/// Operation counts for one depth-first traversal stage (both Kosaraju
/// passes combined).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DfsMetrics {
    /// Nodes entered (each node exactly once per pass).
    pub visits: u64,
    /// Adjacency entries examined, whether or not the target was unvisited.
    pub edge_scans: u64,
    /// Wall time for the stage.
    pub elapsed: Duration,
}

/// Queue traffic for one Kahn topological sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueueMetrics {
    /// Nodes enqueued (seeds plus every in-degree that reached zero).
    pub pushes: u64,
    /// Nodes dequeued; equals the length of the produced order.
    pub pops: u64,
    /// Wall time for the stage.
    pub elapsed: Duration,
}

/// Relaxation counts for one single-source path computation.
///
/// Includes the queue traffic of the internal topological sort the path
/// stage runs to establish its relaxation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RelaxMetrics {
    /// Edges examined for relaxation from reached nodes.
    pub relaxations: u64,
    /// Queue metrics of the internal topological sort.
    pub topo: QueueMetrics,
    /// Wall time for the stage, topological sort included.
    pub elapsed: Duration,
}
