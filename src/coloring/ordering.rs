//! Degree-driven vertex orderings on top of greedy coloring.

use std::cmp::Reverse;

use super::greedy::greedy_with_order;
use super::palette::ColorScratch;
use crate::const_params::IDO_DEGREE_TIEBREAK;
use crate::graph::{ColoredGraph, NO_COLOR};
use tracing::trace;

/// Vertices sorted by descending `(degree, id)`.
pub fn largest_degree_order(g: &ColoredGraph) -> Vec<usize> {
  let mut by_degree: Vec<(usize, usize)> =
    (0..g.size()).map(|v| (g.degree(v), v)).collect();
  by_degree.sort_unstable_by(|a, b| b.cmp(a));
  by_degree.into_iter().map(|(_, v)| v).collect()
}

/// Largest-Degree-Ordering: greedy coloring, highest static degree first.
pub fn largest_degree_ordering(g: &mut ColoredGraph) {
  let order = largest_degree_order(g);
  greedy_with_order(g, &order);
}

/// Book-keeping for incidence degree ordering. The weight of a vertex is its
/// number of already colored neighbors.
struct Incidence {
  weight: Vec<usize>,
  degree: Vec<usize>,
  uncolored: Vec<usize>,
}

impl Incidence {
  fn new(g: &ColoredGraph) -> Self {
    Incidence {
      weight: vec![0; g.size()],
      degree: (0..g.size()).map(|v| g.degree(v)).collect(),
      uncolored: (0..g.size()).collect(),
    }
  }

  /// Selection key: weight first, then static degree, then smaller id.
  fn key(&self, v: usize) -> (usize, usize, Reverse<usize>) {
    let deg = if IDO_DEGREE_TIEBREAK { self.degree[v] } else { 0 };
    (self.weight[v], deg, Reverse(v))
  }

  /// Returns the position in `uncolored` of the max-weight vertex.
  ///
  /// [warning] Can only call when some vertex is still uncolored.
  fn maxwt_pos(&self) -> usize {
    let mut best = 0;
    for pos in 1..self.uncolored.len() {
      if self.key(self.uncolored[pos]) > self.key(self.uncolored[best]) {
        best = pos;
      }
    }
    best
  }

  /// Marks `v` colored and increments the weights of all its neighbors.
  fn settle(&mut self, g: &ColoredGraph, pos: usize) {
    let v = self.uncolored.swap_remove(pos);
    for &u in g.neighbors(v) {
      self.weight[u] += 1;
    }
  }
}

/// Incidence-Degree-Ordering: starts from the highest degree vertex, then
/// repeatedly colors the uncolored vertex with the most colored neighbors,
/// breaking ties by the larger static degree.
///
/// [requires] `g` is uncolored.
pub fn incidence_degree_ordering(g: &mut ColoredGraph) {
  if g.is_empty() {
    return;
  }

  let mut inc = Incidence::new(g);

  // first vertex of maximum degree
  let mut start = 0;
  for v in 1..g.size() {
    if g.degree(v) > g.degree(start) {
      start = v;
    }
  }
  g.set_color(start, NO_COLOR + 1);
  g.register_color(NO_COLOR + 1);
  // nothing is removed yet, so position and id coincide
  inc.settle(g, start);

  let mut scratch = ColorScratch::for_graph(g);
  while !inc.uncolored.is_empty() {
    let pos = inc.maxwt_pos();
    let v = inc.uncolored[pos];

    let c = scratch.smallest_unused(g, v);
    trace!(vertex = v, weight = inc.weight[v], color = c, "ido pick");
    g.set_color(v, c);
    g.register_color(c);

    inc.settle(g, pos);
  }
  debug_assert!(scratch.is_clear());
}
