#![forbid(unsafe_code)]
//! causeway-core: structural analysis of task dependency graphs.
//!
//! # Conventions
//!
//! - **Errors**: Typed [`error::GraphError`] at the construction boundary;
//!   analysis stages signal bad input via validity flags, never errors.
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`) for stage
//!   instrumentation.
//!
//! See [`graph`] for the analysis pipeline.

pub mod error;
pub mod graph;
pub mod metrics;

pub use error::GraphError;
pub use graph::build::{Edge, Graph, WeightModel};
pub use graph::condense::{Condensation, condense};
pub use graph::paths::{CriticalPath, PathResult, critical_path, longest_paths, shortest_paths};
pub use graph::scc::{SccResult, find_sccs};
pub use graph::stats::GraphStats;
pub use graph::topo::{TopoResult, topo_sort};
