// Coloring Bench
//! Timing loop and statistics over repeated coloring trials.

use serde::Serialize;
use tracing::{debug, error, info};

use crate::coloring::Algorithm;
use crate::graph::ColoredGraph;
use crate::util::time;

/// Outcome of benchmarking one algorithm on one graph. Times are in
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
  pub algorithm: Algorithm,
  pub min: f64,
  pub max: f64,
  pub average: f64,
  pub median: f64,
  pub color_count: usize,
  pub valid: bool,
}

impl BenchmarkResult {
  /// Sorts `times` and derives the statistics from them. `times` shall not be
  /// empty.
  fn from_times(
    algorithm: Algorithm,
    times: &mut [f64],
    color_count: usize,
    valid: bool,
  ) -> Self {
    assert!(!times.is_empty(), "benchmark needs at least one trial");
    times.sort_by(|a, b| a.total_cmp(b));

    BenchmarkResult {
      algorithm,
      min: times[0],
      max: times[times.len() - 1],
      average: times.iter().sum::<f64>() / times.len() as f64,
      median: times[times.len() / 2],
      color_count,
      valid,
    }
  }
}

/// Colors `g` with `algorithm` `iterations` times (at least once), clearing
/// the colors before each trial. Color count and validity are those of the
/// last trial.
pub fn benchmark(
  g: &mut ColoredGraph,
  algorithm: Algorithm,
  iterations: usize,
) -> BenchmarkResult {
  let iterations = iterations.max(1);
  let mut times = Vec::with_capacity(iterations);

  for trial in 0..iterations {
    g.clear_colors();
    let ((), elapsed) = time!(algorithm.run(g));
    let ms = elapsed.as_secs_f64() * 1000.0;
    debug!(%algorithm, trial, ms, colors = g.color_count(), "trial done");
    times.push(ms);
  }

  let valid = g.validate_colors();
  if !valid {
    error!(%algorithm, "coloring is invalid");
  }

  BenchmarkResult::from_times(algorithm, &mut times, g.color_count(), valid)
}

/// Results of every algorithm on one named graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
  pub name: String,
  pub vertices: usize,
  pub edges: usize,
  pub max_degree: usize,
  pub results: Vec<BenchmarkResult>,
}

impl GraphReport {
  /// Shows whether every algorithm produced a valid coloring.
  pub fn all_valid(&self) -> bool {
    self.results.iter().all(|r| r.valid)
  }
}

/// Benchmarks every algorithm in `algorithms` on every graph, one graph at a
/// time.
pub fn run_suite(
  graphs: Vec<(String, ColoredGraph)>,
  algorithms: &[Algorithm],
  iterations: usize,
) -> Vec<GraphReport> {
  let mut reports = Vec::with_capacity(graphs.len());

  for (name, mut g) in graphs {
    info!(
      graph = %name,
      vertices = g.size(),
      edges = g.edge_count(),
      "benchmarking"
    );
    let results = algorithms
      .iter()
      .map(|&a| benchmark(&mut g, a, iterations))
      .collect();

    reports.push(GraphReport {
      name,
      vertices: g.size(),
      edges: g.edge_count(),
      max_degree: g.max_degree(),
      results,
    });
  }

  reports
}
