//! Task dependency graph analysis pipeline.
//!
//! # Overview
//!
//! This module owns the graph data model and the four analysis stages that
//! run over it. Each stage is a pure function of its inputs: nothing here
//! mutates a graph it did not itself construct, and every derived graph
//! (the reversed copy inside SCC detection, the condensation DAG) is a
//! fresh value.
//!
//! ## Pipeline
//!
//! ```text
//! Graph (caller-built, validated, immutable)
//!        ↓  scc::find_sccs()
//! SccResult (discovery-ordered partition + node→component map)
//!        ↓  condense::condense()            (consumes Graph + partition)
//! Condensation (one node per component, deduplicated cross edges — a DAG)
//!        ↓  topo::topo_sort()
//! TopoResult (order + acyclicity flag)
//!        ↓  paths::shortest_paths() / longest_paths() / critical_path()
//! PathResult / CriticalPath (distances, predecessors, validity)
//! ```
//!
//! Path analysis can also run directly on the original graph when it is
//! already acyclic; it confirms acyclicity through its own topological sort
//! and signals cyclic input via a validity flag instead of an error.
//!
//! ## Determinism
//!
//! All stages are deterministic for a fixed edge-insertion order. Insertion
//! order decides DFS finishing order (hence component numbering), which
//! cross-component edge donates the condensation weight, and which of
//! several equal-length critical paths is reported. The tie-breaks are
//! documented on the functions that exercise them.

pub mod build;
pub mod condense;
pub mod paths;
pub mod scc;
pub mod stats;
pub mod topo;

// Re-export primary types at module level for convenience.
pub use build::{Edge, Graph, WeightModel};
pub use condense::{Condensation, condense};
pub use paths::{CriticalPath, PathResult, critical_path, longest_paths, shortest_paths};
pub use scc::{SccResult, find_sccs};
pub use stats::GraphStats;
pub use topo::{TopoResult, topo_sort};
