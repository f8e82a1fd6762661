//! JSON graph documents.
//!
//! The on-disk format mirrors the in-memory model:
//!
//! ```json
//! {
//!   "directed": true,
//!   "n": 4,
//!   "weight_model": "edge",
//!   "edges": [{ "u": 0, "v": 1, "w": 2 }],
//!   "node_durations": { "1": 5 },
//!   "source": 0
//! }
//! ```
//!
//! `directed` defaults to true, `weight_model` to `"edge"`, `source` to
//! node 0. `node_durations` is only consulted under the node weight model.
//! Everything structural (endpoint ranges, the source node) is validated by
//! the core constructor here, before any analysis stage runs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use causeway_core::{Graph, WeightModel};
use serde::Deserialize;

/// A deserialized graph document, prior to validation.
#[derive(Debug, Deserialize)]
pub struct GraphFile {
    /// Whether edges are directed (default true).
    #[serde(default = "default_directed")]
    pub directed: bool,
    /// Number of nodes.
    pub n: usize,
    /// Weight model (default edge weights).
    #[serde(default)]
    pub weight_model: WeightModel,
    /// Edge list in document order.
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
    /// Per-node durations, keyed by stringified node id.
    #[serde(default)]
    pub node_durations: HashMap<String, i64>,
    /// Designated path-query source.
    #[serde(default)]
    pub source: Option<usize>,
}

/// One edge row of a graph document.
#[derive(Debug, Deserialize)]
pub struct EdgeEntry {
    /// Source node.
    pub u: usize,
    /// Target node.
    pub v: usize,
    /// Edge weight.
    pub w: i64,
}

const fn default_directed() -> bool {
    true
}

/// Load and validate a graph document from `path`.
///
/// # Errors
///
/// Fails on unreadable files, malformed JSON, or documents that violate the
/// core's structural preconditions (out-of-range endpoints, durations, or
/// source).
pub fn load_graph(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read graph document {}", path.display()))?;
    let file: GraphFile = serde_json::from_str(&text)
        .with_context(|| format!("parse graph document {}", path.display()))?;
    build_graph(&file).with_context(|| format!("validate graph document {}", path.display()))
}

/// Build a validated [`Graph`] from a deserialized document.
///
/// # Errors
///
/// Fails when the document references nodes outside `[0, n)` or carries a
/// duration key that is not a node id.
pub fn build_graph(file: &GraphFile) -> Result<Graph> {
    let mut graph = Graph::new(file.n, file.directed, file.weight_model);

    for edge in &file.edges {
        graph.add_edge(edge.u, edge.v, edge.w)?;
    }

    if matches!(file.weight_model, WeightModel::Node) {
        for (key, &duration) in &file.node_durations {
            let node: usize = key
                .parse()
                .with_context(|| format!("node duration key {key:?} is not a node id"))?;
            graph.set_node_duration(node, duration)?;
        }
    }

    if let Some(source) = file.source {
        graph.set_source(source)?;
    }

    Ok(graph)
}
