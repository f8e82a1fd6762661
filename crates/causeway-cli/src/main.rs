#![forbid(unsafe_code)]

mod cmd;
mod input;
mod output;

use std::env;

use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "causeway: task dependency graph analysis",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Analyze one graph document",
        long_about = "Run the full analysis pipeline (components, condensation, \
                      topological order, paths, critical path) on one JSON graph document.",
        after_help = "EXAMPLES:\n    # Analyze a graph document\n    cwy analyze data/small_1.json\n\n    # Emit machine-readable output\n    cwy analyze data/small_1.json --json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Analyze every graph document in a directory",
        long_about = "Run the analysis pipeline over every *.json document in a directory, \
                      in sorted order, continuing past per-document failures.",
        after_help = "EXAMPLES:\n    # Analyze a whole dataset directory\n    cwy batch data\n\n    # Emit machine-readable output\n    cwy batch data --json"
    )]
    Batch(cmd::batch::BatchArgs),

    #[command(
        about = "Generate synthetic graph datasets",
        long_about = "Write the nine synthetic datasets (small/medium/large, three each, \
                      with injected cycles) as JSON graph documents.",
        after_help = "EXAMPLES:\n    # Generate into ./data\n    cwy generate\n\n    # Generate into another directory\n    cwy generate --out fixtures"
    )]
    Generate(cmd::generate::GenerateArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CAUSEWAY_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "causeway=debug,info"
        } else {
            "causeway=info,warn"
        })
    });

    let format = env::var("CAUSEWAY_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();

    match cli.command {
        Commands::Analyze(ref args) => cmd::analyze::run_analyze(args, output),
        Commands::Batch(ref args) => cmd::batch::run_batch(args, output, cli.quiet),
        Commands::Generate(ref args) => cmd::generate::run_generate(args, cli.quiet),
    }
}
