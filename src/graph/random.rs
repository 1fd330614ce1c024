//! Synthetic graphs. Randomness always comes from an explicitly passed
//! source so that generation can be reproduced from a seed.

use rand::Rng;
use tracing::debug;

use super::ColoredGraph;
use crate::error::{err, errs, Result};

/// A uniform random source.
pub trait RandomSource {
  /// Uniform in `[0, up_to)`.
  fn below(&mut self, up_to: usize) -> usize {
    self.between(0, up_to)
  }

  /// Uniform in `[from, up_to)`.
  fn between(&mut self, from: usize, up_to: usize) -> usize;

  /// Uniform in `[0, 1)`.
  fn probability(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
  fn between(&mut self, from: usize, up_to: usize) -> usize {
    self.gen_range(from..up_to)
  }

  fn probability(&mut self) -> f64 {
    self.gen::<f64>()
  }
}

impl ColoredGraph {
  /// Erdős–Rényi style graph: every unordered pair becomes an edge with
  /// probability `p`. Once `cap` edges exist no more are added.
  pub fn random<S: RandomSource>(
    n: usize,
    p: f64,
    cap: Option<usize>,
    rng: &mut S,
  ) -> Self {
    let cap = cap.unwrap_or(usize::MAX);
    let mut lists = vec![Vec::<usize>::new(); n];
    let mut edges = 0;

    'pairs: for u in 0..n {
      for v in (u + 1)..n {
        if edges >= cap {
          break 'pairs;
        }
        if rng.probability() < p {
          lists[u].push(v);
          lists[v].push(u);
          edges += 1;
        }
      }
    }

    // lists are built sorted and symmetric, so no normalization is needed.
    let mut g = Self::with_size(n);
    g.adjacency = lists;
    g
  }
}

/// Inserts edges into `g` until it holds exactly `target` undirected edges.
/// Each round picks a random vertex and connects it to the smallest vertex it
/// is not yet adjacent to. Does nothing if `g` already has `target` edges or
/// more.
///
/// [requires] `target` is at most `n(n-1)/2`, otherwise this never returns.
pub fn insert_missing_edges<S: RandomSource>(
  g: &mut ColoredGraph,
  target: usize,
  rng: &mut S,
) {
  let n = g.size();
  let mut edges = g.edge_count();

  while edges < target {
    let selected = rng.below(n);
    if g.degree(selected) == n - 1 {
      continue;
    }

    // walk the sorted list until the first hole, hopping over `selected`.
    let mut candidate = 0;
    for &u in g.neighbors(selected) {
      if candidate == selected {
        candidate += 1;
      }
      if u != candidate {
        break;
      }
      candidate += 1;
    }
    if candidate == selected {
      candidate += 1;
    }

    if g.insert_edge(selected, candidate) {
      edges += 1;
    }
  }
}

/// Generates a graph with `n` vertices and exactly `edges` undirected edges.
pub fn generate<S: RandomSource>(
  n: usize,
  edges: usize,
  rng: &mut S,
) -> Result<ColoredGraph> {
  if n < 1 {
    return err("There must be at least one node in the generated graph.");
  }
  let max_edges = n * (n - 1) / 2;
  if edges > max_edges {
    return errs(format!(
      "A graph with {} nodes holds at most {} edges, {} requested.",
      n, max_edges, edges
    ));
  }

  let p = if n > 1 {
    edges as f64 / (n * (n - 1)) as f64
  } else {
    0.0
  };
  let mut g = ColoredGraph::random(n, p, Some(edges), rng);
  debug!(
    nodes = n,
    sampled = g.edge_count(),
    target = edges,
    "patching sampled graph"
  );

  insert_missing_edges(&mut g, edges, rng);
  Ok(g)
}
