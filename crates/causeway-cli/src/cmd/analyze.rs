//! `cwy analyze` — run the full analysis pipeline on one graph document.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use causeway_core::graph::condense::CondensationSummary;
use causeway_core::{
    CriticalPath, GraphStats, PathResult, SccResult, TopoResult, condense, critical_path,
    find_sccs, shortest_paths, topo_sort,
};
use clap::Args;
use serde::Serialize;

use crate::input;
use crate::output::{OutputMode, render, section};

/// Arguments for `cwy analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the graph document (JSON).
    pub file: PathBuf,
}

/// Every stage result for one analyzed document.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// The analyzed document.
    pub file: String,
    /// Nodes in the graph.
    pub node_count: usize,
    /// Logical edges in the graph.
    pub edge_count: usize,
    /// Component partition.
    pub scc: SccResult,
    /// Condensation summary.
    pub condensation: CondensationSummary,
    /// Topological sort of the condensation DAG.
    pub topo: TopoResult,
    /// The source the path queries ran from.
    pub source: usize,
    /// Shortest distances from `source` over the original graph.
    pub shortest: PathResult,
    /// The global critical path of the original graph.
    pub critical: CriticalPath,
    /// Summary statistics.
    pub stats: GraphStats,
}

/// Run the pipeline over the document at `path`.
///
/// # Errors
///
/// Fails if the document cannot be loaded or validated; analysis itself has
/// no error states (cyclic input shows up as validity flags in the report).
pub fn analyze_file(path: &Path) -> Result<AnalysisReport> {
    let graph = input::load_graph(path)?;

    let scc = find_sccs(&graph);
    let condensation = condense(&graph, &scc);
    let topo = topo_sort(&condensation.graph);
    let source = graph.source();
    let shortest = if graph.node_count() == 0 {
        // No nodes means no source to query; an empty valid result renders
        // as nothing rather than failing the whole report.
        PathResult {
            dist: Vec::new(),
            prev: Vec::new(),
            is_valid: true,
            metrics: causeway_core::metrics::RelaxMetrics::default(),
        }
    } else {
        shortest_paths(&graph, source)?
    };
    let critical = critical_path(&graph);
    let stats = GraphStats::from_analysis(&graph, &scc, &condensation);

    Ok(AnalysisReport {
        file: path.display().to_string(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        condensation: condensation.summary(&graph),
        scc,
        topo,
        source,
        shortest,
        critical,
        stats,
    })
}

/// Execute `cwy analyze`.
///
/// # Errors
///
/// Fails if the document cannot be loaded or rendered.
pub fn run_analyze(args: &AnalyzeArgs, output: OutputMode) -> Result<()> {
    let report = analyze_file(&args.file)?;
    render(output, &report, render_report_human)
}

/// Human-readable rendering shared with `cwy batch`.
pub fn render_report_human(report: &AnalysisReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "Graph loaded: {} nodes, {} edges",
        report.node_count, report.edge_count
    )?;

    writeln!(w)?;
    section(w, "Strongly Connected Components")?;
    for (id, component) in report.scc.components.iter().enumerate() {
        writeln!(w, "component {id}: {component:?} (size {})", component.len())?;
    }
    writeln!(w, "total components: {}", report.scc.component_count())?;

    writeln!(w)?;
    section(w, "Condensation")?;
    writeln!(w, "original nodes:  {}", report.condensation.original_nodes)?;
    writeln!(w, "condensed nodes: {}", report.condensation.condensed_nodes)?;
    writeln!(w, "condensed edges: {}", report.condensation.condensed_edges)?;
    writeln!(w, "component sizes: {:?}", report.condensation.component_sizes)?;

    writeln!(w)?;
    section(w, "Topological Order (condensation)")?;
    if report.topo.is_acyclic {
        writeln!(w, "order: {:?}", report.topo.order)?;
    } else {
        writeln!(w, "graph contains cycles - no valid topological order")?;
    }

    writeln!(w)?;
    section(w, "Shortest Distances")?;
    if report.shortest.is_valid {
        writeln!(w, "from source {}:", report.source)?;
        for (node, distance) in report.shortest.dist.iter().enumerate() {
            if let Some(distance) = distance {
                writeln!(w, "  to {node}: {distance}")?;
            }
        }
    } else {
        writeln!(
            w,
            "graph contains cycles - shortest paths undefined on the raw graph"
        )?;
    }

    writeln!(w)?;
    section(w, "Critical Path")?;
    if report.critical.path.is_empty() {
        writeln!(w, "no critical path (empty graph)")?;
    } else {
        let rendered: Vec<String> = report.critical.path.iter().map(ToString::to_string).collect();
        writeln!(w, "path:   {}", rendered.join(" -> "))?;
        writeln!(w, "length: {}", report.critical.length)?;
        if let Some(source) = report.critical.source {
            writeln!(w, "source: {source}")?;
        }
    }

    Ok(())
}
