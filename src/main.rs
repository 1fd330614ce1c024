// Coloring Bench
//! Top Level Environment

mod args;
mod bench;
mod coloring;
mod const_params;
mod emit;
mod error;
mod graph;
mod util;

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::{Command, Config};
use crate::coloring::Algorithm;
use crate::const_params::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use crate::graph::ColoredGraph;
use crate::util::time;

/// No input graph could be loaded.
const EXIT_NO_INPUT: i32 = 1;
/// A report or graph file could not be written.
const EXIT_OUTPUT: i32 = 2;
/// Some heuristic produced an invalid coloring.
const EXIT_INVALID_COLORING: i32 = 3;

/// `RUST_LOG` wins; otherwise `--verbose` picks between the two defaults.
fn init_logging(verbose: bool) {
  let fallback = if verbose {
    VERBOSE_LOG_FILTER
  } else {
    DEFAULT_LOG_FILTER
  };
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(fallback));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

/// Loads every readable graph. Files that cannot be opened or parsed are
/// reported and skipped.
fn load_graphs(inputs: &[PathBuf]) -> Vec<(String, ColoredGraph)> {
  let mut graphs = Vec::with_capacity(inputs.len());
  for path in inputs {
    match ColoredGraph::from_file(path) {
      Ok(g) => graphs.push((path.display().to_string(), g)),
      Err(e) => eprintln!("Can not load {}: {}", path.display(), e),
    }
  }
  graphs
}

fn run_bench(
  inputs: &[PathBuf],
  output: &Path,
  iterations: usize,
  algorithms: &[Algorithm],
  json: Option<&Path>,
) -> i32 {
  let graphs = load_graphs(inputs);
  if graphs.is_empty() {
    eprintln!("No graph could be loaded.");
    return EXIT_NO_INPUT;
  }

  let algorithms = Config::algorithms(algorithms);
  for a in &algorithms {
    println!("{}", a.title());
  }
  let reports = bench::run_suite(graphs, &algorithms, iterations);

  if let Err(e) = emit::write_csv(output, &algorithms, &reports) {
    eprintln!("Could not write {}: {}", output.display(), e);
    return EXIT_OUTPUT;
  }
  if let Some(path) = json {
    if let Err(e) = emit::write_json(path, &reports) {
      eprintln!("Could not write {}: {}", path.display(), e);
      return EXIT_OUTPUT;
    }
  }

  let invalid: Vec<&str> = reports
    .iter()
    .filter(|r| !r.all_valid())
    .map(|r| r.name.as_str())
    .collect();
  if !invalid.is_empty() {
    eprintln!("Invalid coloring produced for: {}", invalid.join(", "));
    return EXIT_INVALID_COLORING;
  }
  0
}

fn run_color(
  input: &Path,
  algorithm: Algorithm,
  dump_colors: Option<&Path>,
) -> i32 {
  let mut g = match ColoredGraph::from_file(input) {
    Ok(g) => g,
    Err(e) => {
      eprintln!("Can not load {}: {}", input.display(), e);
      return EXIT_NO_INPUT;
    }
  };

  let ((), elapsed) = time!(algorithm.run(&mut g));
  let valid = g.validate_colors();

  println!("{}", algorithm.title());
  println!("Vertices: {}", g.size());
  println!("Edges: {}", g.edge_count());
  println!("Colors: {}", g.color_count());
  println!("Valid: {}", valid);
  println!("Time: {} us", elapsed.as_micros());

  if let Some(path) = dump_colors {
    if let Err(e) = emit::write_colors(path, &g) {
      eprintln!("Could not write {}: {}", path.display(), e);
      return EXIT_OUTPUT;
    }
  }

  if valid {
    0
  } else {
    EXIT_INVALID_COLORING
  }
}

fn run_gen(nodes: usize, edges: usize, output: &Path, seed: Option<u64>) -> i32 {
  let mut rng = match seed {
    Some(s) => StdRng::seed_from_u64(s),
    None => StdRng::from_entropy(),
  };

  let g = match graph::random::generate(nodes, edges, &mut rng) {
    Ok(g) => g,
    Err(e) => {
      eprintln!("{}", e);
      return EXIT_NO_INPUT;
    }
  };
  info!(nodes, edges, "graph generated");

  if let Err(e) = emit::write_graph(output, &g) {
    eprintln!("Could not open output file {}: {}", output.display(), e);
    return EXIT_OUTPUT;
  }
  0
}

fn main() {
  let cfg = args::parse_args();
  init_logging(cfg.verbose);

  let code = match &cfg.command {
    Command::Bench {
      inputs,
      output,
      iterations,
      algorithms,
      json,
    } => run_bench(inputs, output, *iterations, algorithms, json.as_deref()),
    Command::Color {
      input,
      algorithm,
      dump_colors,
    } => run_color(input, *algorithm, dump_colors.as_deref()),
    Command::Gen {
      nodes,
      edges,
      output,
      seed,
    } => run_gen(*nodes, *edges, output, *seed),
  };

  if code != 0 {
    warn!(code, "exiting with failure");
  }
  std::process::exit(code);
}
