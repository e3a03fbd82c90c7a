use clap::Parser;
use kairo::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Compiles a node graph definition into script source
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the library JSON describing available classes and functions
    library_path: String,
    /// Path to the graph definition JSON file
    graph_path: String,

    /// Compile only the event with this name
    #[arg(short, long)]
    event: Option<String>,

    /// Indent with this many spaces instead of tabs
    #[arg(short, long)]
    spaces: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) {
    let start = Instant::now();

    // --- 1. Loading ---
    let library_json = fs::read_to_string(&cli.library_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read library file '{}': {}",
            &cli.library_path, e
        ))
    });
    let graph_json = fs::read_to_string(&cli.graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            &cli.graph_path, e
        ))
    });

    let library = Library::from_json(&library_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load library: {}", e)));
    let definition = GraphDefinition::from_json(&graph_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph: {}", e)));

    // --- 2. Graph construction ---
    let graph = definition
        .into_graph(&library)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build graph: {}", e)));

    // --- 3. Compilation ---
    let indent = cli.spaces.map_or(IndentStyle::Tabs, IndentStyle::Spaces);
    let compiler = ScriptCompiler::builder(&graph).with_indent(indent).build();

    let source = match &cli.event {
        Some(name) => compiler.compile_event_named(name),
        None => compiler.compile_all(),
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));

    print!("{}", source);
    tracing::info!(
        nodes = graph.node_count(),
        connections = graph.connection_count(),
        elapsed = ?start.elapsed(),
        "done"
    );
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
