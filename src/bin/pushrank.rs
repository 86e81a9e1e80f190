use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pushrank::{parse_graph, random_connected_graph, CsrGraph, PushConfig, PushRank};

#[derive(Parser)]
#[command(
    name = "pushrank",
    about = "Approximate PageRank via local residue pushing",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the nodes of a graph file
    Rank {
        /// Graph file: optional `key value` header, `---`, then edge pairs
        file: PathBuf,
        /// Override the teleport probability from the file header
        #[arg(long)]
        alpha: Option<f64>,
        /// Override the convergence threshold from the file header
        #[arg(long)]
        epsilon: Option<f64>,
        /// Treat edges as one-way regardless of the file header
        #[arg(long)]
        directed: bool,
        /// Abort with an error after this many pushes
        #[arg(long)]
        max_pushes: Option<u64>,
        /// Emit the full summary as JSON instead of `node<TAB>score` lines
        #[arg(long)]
        json: bool,
    },
    /// Print a random connected edge list
    Generate {
        /// Number of nodes
        nodes: usize,
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    match Cli::parse().command {
        Commands::Rank {
            file,
            alpha,
            epsilon,
            directed,
            max_pushes,
            json,
        } => rank(&file, alpha, epsilon, directed, max_pushes, json),
        Commands::Generate { nodes, seed } => generate(nodes, seed),
    }
}

fn rank(
    file: &PathBuf,
    alpha: Option<f64>,
    epsilon: Option<f64>,
    directed: bool,
    max_pushes: Option<u64>,
    json: bool,
) -> Result<()> {
    let input =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let parsed = parse_graph(&input)?;

    // Command line beats file header beats defaults.
    let mut options = parsed.options;
    if let Some(alpha) = alpha {
        options.alpha = alpha;
    }
    if let Some(epsilon) = epsilon {
        options.epsilon = epsilon;
    }
    if directed {
        options.directed = true;
    }

    let mut config = PushConfig::new()
        .with_alpha(options.alpha)
        .with_epsilon(options.epsilon);
    if let Some(cap) = max_pushes {
        config = config.with_max_pushes(cap);
    }

    let graph = CsrGraph::from_edges(&parsed.edges, options.mode())?;
    let mut ranker = PushRank::new(&graph, &config)?;
    ranker.calculate()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ranker.summary())?);
    } else {
        for (node, score) in ranker.pagerank().iter().enumerate() {
            println!("{node}\t{score:.5}");
        }
    }
    Ok(())
}

fn generate(nodes: usize, seed: u64) -> Result<()> {
    for (from, to) in random_connected_graph(nodes, seed)? {
        println!("{from} {to}");
    }
    Ok(())
}
