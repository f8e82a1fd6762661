//! Typed errors for the graph construction boundary.
//!
//! Analysis stages never return these: cyclic input is a validity flag on
//! the stage result, and unreachable nodes are a distance sentinel. Errors
//! exist only where a caller hands us something structurally malformed, and
//! they surface at construction time rather than as an out-of-bounds access
//! deep inside a traversal.

use thiserror::Error;

/// A structural precondition violation detected while building or querying
/// a [`Graph`](crate::graph::build::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint refers to a node outside `[0, node_count)`.
    #[error("edge endpoint {node} out of range for graph with {node_count} nodes")]
    EdgeEndpointOutOfRange {
        /// The offending node id.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// A node duration was assigned to a node outside `[0, node_count)`.
    #[error("duration assigned to node {node}, out of range for graph with {node_count} nodes")]
    DurationNodeOutOfRange {
        /// The offending node id.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// The designated path-query source is outside `[0, node_count)`.
    #[error("source node {node} out of range for graph with {node_count} nodes")]
    SourceOutOfRange {
        /// The offending node id.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::GraphError;

    #[test]
    fn messages_name_the_offending_node() {
        let err = GraphError::EdgeEndpointOutOfRange {
            node: 7,
            node_count: 4,
        };
        let text = err.to_string();
        assert!(text.contains('7'), "message should name the node: {text}");
        assert!(text.contains('4'), "message should name the bound: {text}");
    }
}
