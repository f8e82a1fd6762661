//! `cwy generate` — write synthetic graph datasets.
//!
//! Nine documents (small/medium/large, three each) with a target edge count
//! and a number of injected cycles, so the analysis pipeline always has
//! both acyclic and cyclic structure to chew on. Weights are uniform in
//! 1..=10 and every document designates node 0 as the path source.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::Rng;
use serde_json::json;
use tracing::debug;

/// Arguments for `cwy generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output directory for the generated documents.
    #[arg(long, default_value = "data")]
    pub out: PathBuf,
}

/// Name, node count, edge target, and cycle range per dataset.
const DATASETS: [(&str, usize, usize, usize, usize); 9] = [
    ("small_1", 8, 12, 1, 2),
    ("small_2", 6, 8, 0, 0),
    ("small_3", 10, 15, 2, 3),
    ("medium_1", 15, 25, 3, 5),
    ("medium_2", 12, 18, 1, 2),
    ("medium_3", 20, 35, 4, 6),
    ("large_1", 30, 60, 5, 8),
    ("large_2", 25, 40, 2, 4),
    ("large_3", 50, 100, 8, 12),
];

/// Execute `cwy generate`.
///
/// # Errors
///
/// Fails if the output directory cannot be created or a document cannot be
/// written.
pub fn run_generate(args: &GenerateArgs, quiet: bool) -> Result<()> {
    fs::create_dir_all(&args.out)
        .with_context(|| format!("create output directory {}", args.out.display()))?;

    let mut rng = rand::thread_rng();

    for (name, nodes, edges, min_cycles, max_cycles) in DATASETS {
        let document = generate_document(&mut rng, nodes, edges, min_cycles, max_cycles);
        let path = args.out.join(format!("{name}.json"));

        let file = fs::File::create(&path)
            .with_context(|| format!("create document {}", path.display()))?;
        serde_json::to_writer_pretty(file, &document)
            .with_context(|| format!("write document {}", path.display()))?;

        if !quiet {
            println!("generated: {} ({nodes} nodes, {edges} edges)", path.display());
        }
    }

    Ok(())
}

/// Build one random graph document: injected cycles first, then random
/// filler edges until the target count is reached.
fn generate_document(
    rng: &mut impl Rng,
    nodes: usize,
    target_edges: usize,
    min_cycles: usize,
    max_cycles: usize,
) -> serde_json::Value {
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut edges: Vec<(usize, usize, i64)> = Vec::new();

    let cycles = rng.gen_range(min_cycles..=max_cycles);
    inject_cycles(rng, nodes, cycles, &mut seen, &mut edges);

    // Random filler until the document reaches its edge target. Self-loops
    // and duplicates are rerolled, never written.
    while seen.len() < target_edges {
        let u = rng.gen_range(0..nodes);
        let v = rng.gen_range(0..nodes);
        if u != v && seen.insert((u, v)) {
            edges.push((u, v, rng.gen_range(1..=10)));
        }
    }

    debug!(nodes, edges = edges.len(), cycles, "document generated");

    json!({
        "directed": true,
        "n": nodes,
        "weight_model": "edge",
        "edges": edges
            .iter()
            .map(|&(u, v, w)| json!({ "u": u, "v": v, "w": w }))
            .collect::<Vec<_>>(),
        "source": 0,
    })
}

/// Wire `cycles` random rings of 3–6 distinct nodes (capped at a third of
/// the node count, so small graphs are not all cycle).
fn inject_cycles(
    rng: &mut impl Rng,
    nodes: usize,
    cycles: usize,
    seen: &mut HashSet<(usize, usize)>,
    edges: &mut Vec<(usize, usize, i64)>,
) {
    for _ in 0..cycles.min(nodes / 3) {
        let size = rng.gen_range(3..=6.min(nodes));
        let mut ring: Vec<usize> = Vec::with_capacity(size);
        while ring.len() < size {
            let node = rng.gen_range(0..nodes);
            if !ring.contains(&node) {
                ring.push(node);
            }
        }

        for index in 0..size {
            let u = ring[index];
            let v = ring[(index + 1) % size];
            if seen.insert((u, v)) {
                edges.push((u, v, rng.gen_range(1..=10)));
            }
        }
    }
}
