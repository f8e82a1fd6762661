//! Graph data model and validating construction.
//!
//! # Overview
//!
//! [`Graph`] owns adjacency lists and per-node metadata and carries no
//! algorithmic logic. It is built once — node count fixed at construction,
//! edges and durations appended during a build phase — and treated as
//! read-only by every analysis stage afterwards.
//!
//! ## Edge order
//!
//! Each node's outgoing edges are stored in insertion order, and every
//! traversal in this crate walks them in that order. The order never affects
//! *whether* an answer is correct, but it decides documented tie-breaks:
//! DFS finishing order, condensation edge weights, and which of several
//! equal-length critical paths gets reported.
//!
//! ## Validation
//!
//! Out-of-range endpoints are caller error. They are rejected here, at the
//! construction boundary, with a descriptive [`GraphError`] — not discovered
//! as an out-of-bounds access deep inside a traversal.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

// ---------------------------------------------------------------------------
// WeightModel / Edge
// ---------------------------------------------------------------------------

/// Where weights live in the model.
///
/// Path relaxation consumes edge weights; node durations are carried for
/// activity-on-node style inputs and exposed via
/// [`Graph::node_duration`] without being consulted by the relaxation
/// logic in this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightModel {
    /// Weights live on edges.
    #[default]
    Edge,
    /// Weights (durations) live on nodes.
    Node,
}

/// A directed, weighted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Source node id.
    pub from: usize,
    /// Target node id.
    pub to: usize,
    /// Edge weight.
    pub weight: i64,
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An adjacency-list graph over nodes `0..node_count`.
///
/// For undirected graphs every inserted edge is stored in both directions,
/// so the analysis stages only ever see outgoing adjacency.
#[derive(Debug, Clone)]
pub struct Graph {
    node_count: usize,
    directed: bool,
    weight_model: WeightModel,
    adjacency: Vec<Vec<Edge>>,
    node_durations: HashMap<usize, i64>,
    source: usize,
}

impl Graph {
    /// Create an edgeless graph with `node_count` nodes.
    ///
    /// The default path-query source is node 0.
    #[must_use]
    pub fn new(node_count: usize, directed: bool, weight_model: WeightModel) -> Self {
        Self {
            node_count,
            directed,
            weight_model,
            adjacency: vec![Vec::new(); node_count],
            node_durations: HashMap::new(),
            source: 0,
        }
    }

    /// Append the edge `from → to` with `weight`.
    ///
    /// For undirected graphs the reverse edge is stored as well, so both
    /// endpoints see the connection in their adjacency.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeEndpointOutOfRange`] if either endpoint is
    /// not in `[0, node_count)`.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) -> Result<(), GraphError> {
        for node in [from, to] {
            if node >= self.node_count {
                return Err(GraphError::EdgeEndpointOutOfRange {
                    node,
                    node_count: self.node_count,
                });
            }
        }

        self.adjacency[from].push(Edge { from, to, weight });
        if !self.directed {
            self.adjacency[to].push(Edge {
                from: to,
                to: from,
                weight,
            });
        }
        Ok(())
    }

    /// Record a duration for `node` (activity-on-node inputs).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DurationNodeOutOfRange`] if `node` is not in
    /// `[0, node_count)`.
    pub fn set_node_duration(&mut self, node: usize, duration: i64) -> Result<(), GraphError> {
        if node >= self.node_count {
            return Err(GraphError::DurationNodeOutOfRange {
                node,
                node_count: self.node_count,
            });
        }
        self.node_durations.insert(node, duration);
        Ok(())
    }

    /// Designate the default start node for path queries.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SourceOutOfRange`] if `source` is not in
    /// `[0, node_count)`.
    pub fn set_source(&mut self, source: usize) -> Result<(), GraphError> {
        if source >= self.node_count {
            return Err(GraphError::SourceOutOfRange {
                node: source,
                node_count: self.node_count,
            });
        }
        self.source = source;
        Ok(())
    }

    /// Number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Whether edges were inserted as directed.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// The weight model this graph was built under.
    #[must_use]
    pub const fn weight_model(&self) -> WeightModel {
        self.weight_model
    }

    /// The designated default source for path queries.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// The recorded duration for `node`, if any.
    #[must_use]
    pub fn node_duration(&self, node: usize) -> Option<i64> {
        self.node_durations.get(&node).copied()
    }

    /// Outgoing edges of `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in `[0, node_count)`.
    #[must_use]
    pub fn edges(&self, node: usize) -> &[Edge] {
        &self.adjacency[node]
    }

    /// Number of logical edges.
    ///
    /// Undirected graphs store each edge twice, so the stored count is
    /// halved for them.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let stored: usize = self.adjacency.iter().map(Vec::len).sum();
        if self.directed { stored } else { stored / 2 }
    }

    /// A fresh copy with every stored edge's endpoints swapped.
    ///
    /// Weights, directedness, and the weight model carry over; durations and
    /// the source are irrelevant to the traversals that consume the reversed
    /// graph and are left at their defaults.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut reversed = Self::new(self.node_count, self.directed, self.weight_model);
        for edges in &self.adjacency {
            for edge in edges {
                reversed.adjacency[edge.to].push(Edge {
                    from: edge.to,
                    to: edge.from,
                    weight: edge.weight,
                });
            }
        }
        reversed
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
