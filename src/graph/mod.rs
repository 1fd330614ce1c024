// Coloring Bench
//! A simple undirected graph that carries a color per vertex.
//!
//! Vertices are the dense range `0..size()`; every accessor takes a vertex
//! index. Adjacency lists are kept sorted, deduplicated, loop-free and
//! symmetric from construction onwards.

use crate::error::{Error, Result};

pub mod io;
pub mod random;

/// A color id. `NO_COLOR` marks an uncolored vertex, everything above it is a
/// real color.
pub type Color = usize;

/// The "uncolored" sentinel.
pub const NO_COLOR: Color = 0;

/// An undirected graph, implemented as sorted adjacency lists, together with
/// the coloring currently assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredGraph {
  adjacency: Vec<Vec<usize>>,
  colors: Vec<Color>,

  /// Highest color handed out by the running heuristic. Derived state: it is
  /// only as good as the `register_color` calls that feed it.
  color_count: usize,
}

impl ColoredGraph {
  /// Constructs an edgeless graph with `n` uncolored vertices.
  pub fn with_size(n: usize) -> Self {
    Self {
      adjacency: vec![Vec::new(); n],
      colors: vec![NO_COLOR; n],
      color_count: 0,
    }
  }

  /// Consumes per-vertex neighbor lists and builds a simple undirected graph.
  ///
  /// The input may be directed, partial or redundant: an edge listed from
  /// either endpoint (or both, or several times) ends up exactly once in
  /// each endpoint's list. Self-loops are dropped.
  ///
  /// [returns] `Error::InvalidTopology` if any neighbor id is out of range.
  pub fn from_adjacency(mut lists: Vec<Vec<usize>>) -> Result<Self> {
    let size = lists.len();

    for (vertex, list) in lists.iter_mut().enumerate() {
      if let Some(&neighbor) = list.iter().find(|&&u| u >= size) {
        return Err(Error::InvalidTopology {
          vertex,
          neighbor,
          size,
        });
      }
      list.sort_unstable();
      list.dedup();
    }

    Ok(Self {
      adjacency: symmetrize(lists),
      colors: vec![NO_COLOR; size],
      color_count: 0,
    })
  }

  /// Number of vertices.
  pub fn size(&self) -> usize {
    self.adjacency.len()
  }

  pub fn is_empty(&self) -> bool {
    self.adjacency.is_empty()
  }

  /// Sorted neighbors of `v`. Panics if `v` is not a vertex.
  pub fn neighbors(&self, v: usize) -> &[usize] {
    &self.adjacency[v]
  }

  pub fn degree(&self, v: usize) -> usize {
    self.adjacency[v].len()
  }

  /// Computes the max degree of graph.
  pub fn max_degree(&self) -> usize {
    self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
  }

  /// Number of undirected edges.
  pub fn edge_count(&self) -> usize {
    self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
  }

  /// Checks whether `v` and `u` are adjacent. Binary search over the sorted
  /// neighbor list of `v`.
  pub fn has_edge(&self, v: usize, u: usize) -> bool {
    match self.adjacency.get(v) {
      Some(list) => list.binary_search(&u).is_ok(),
      None => false,
    }
  }

  /// Inserts the undirected edge `(a, b)`, keeping both lists sorted.
  ///
  /// [returns] false, leaving the graph untouched, for a self-loop, an out of
  /// range endpoint or an edge that is already present.
  pub fn insert_edge(&mut self, a: usize, b: usize) -> bool {
    let n = self.size();
    if a == b || a >= n || b >= n || self.has_edge(a, b) {
      return false;
    }

    let pos_a = self.adjacency[a].partition_point(|&x| x < b);
    let pos_b = self.adjacency[b].partition_point(|&x| x < a);

    self.adjacency[a].insert(pos_a, b);
    self.adjacency[b].insert(pos_b, a);
    true
  }

  /// Gets the color of `v`; `NO_COLOR` if uncolored.
  pub fn color(&self, v: usize) -> Color {
    self.colors[v]
  }

  /// Overwrites the color of `v`. No range check is done on `c`.
  pub fn set_color(&mut self, v: usize, c: Color) {
    self.colors[v] = c;
  }

  pub fn colors(&self) -> &[Color] {
    &self.colors
  }

  /// Number of distinct colors handed out by the last (or running) pass.
  pub fn color_count(&self) -> usize {
    self.color_count
  }

  /// Records that color `c` has just been assigned, bumping the tally when
  /// `c` is a brand new color.
  ///
  /// Colors are minted one at a time, so `c` can never exceed the tally by
  /// more than one.
  pub fn register_color(&mut self, c: Color) {
    assert!(
      c <= self.color_count + 1,
      "color {} skips past color count {}",
      c,
      self.color_count
    );
    if c > self.color_count {
      self.color_count = c;
    }
  }

  /// Resets every vertex to `NO_COLOR` and the color tally to zero.
  pub fn clear_colors(&mut self) {
    self.colors.iter_mut().for_each(|c| *c = NO_COLOR);
    self.color_count = 0;
  }

  /// Checks that every vertex is colored and no edge joins two vertices of
  /// the same color.
  pub fn validate_colors(&self) -> bool {
    self.adjacency.iter().enumerate().all(|(v, list)| {
      let c = self.colors[v];
      c != NO_COLOR && list.iter().all(|&u| self.colors[u] != c)
    })
  }
}

/// Makes every edge of `lists` undirected. Each list must already be sorted
/// and deduplicated.
///
/// First pass collects the reverse of every original edge into a separate
/// "implied" list per vertex. Sources are visited in ascending order, so
/// every implied list comes out sorted. Second pass merges originals with
/// implied edges, dropping self-loops and edges seen from both sides.
fn symmetrize(lists: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
  let mut implied = vec![Vec::<usize>::new(); lists.len()];
  for (u, list) in lists.iter().enumerate() {
    for &v in list {
      if v != u {
        implied[v].push(u);
      }
    }
  }

  lists
    .into_iter()
    .zip(implied)
    .enumerate()
    .map(|(v, (orig, rev))| merge_sorted(v, &orig, &rev))
    .collect()
}

/// Merges two sorted unique lists, skipping `skip` and duplicates.
fn merge_sorted(skip: usize, a: &[usize], b: &[usize]) -> Vec<usize> {
  let mut out = Vec::with_capacity(a.len().max(b.len()));
  let (mut i, mut j) = (0, 0);

  while i < a.len() || j < b.len() {
    let next = match (a.get(i), b.get(j)) {
      (Some(&x), Some(&y)) if x < y => {
        i += 1;
        x
      }
      (Some(&x), Some(&y)) if y < x => {
        j += 1;
        y
      }
      (Some(&x), Some(_)) => {
        i += 1;
        j += 1;
        x
      }
      (Some(&x), None) => {
        i += 1;
        x
      }
      (None, Some(&y)) => {
        j += 1;
        y
      }
      (None, None) => unreachable!(),
    };

    if next != skip {
      out.push(next);
    }
  }

  out
}

#[cfg(test)]
mod test {
  use super::*;
  use proptest::prelude::*;

  fn graph(lists: Vec<Vec<usize>>) -> ColoredGraph {
    ColoredGraph::from_adjacency(lists).expect("valid topology")
  }

  #[test]
  fn symmetrizes_directed_input() {
    let g = graph(vec![vec![1], vec![], vec![1]]);
    assert_eq!(g.neighbors(0), &[1]);
    assert_eq!(g.neighbors(1), &[0, 2]);
    assert_eq!(g.neighbors(2), &[1]);
  }

  #[test]
  fn deduplicates_neighbors() {
    let g = graph(vec![vec![1, 1, 1], vec![0]]);
    assert_eq!(g.neighbors(0), &[1]);
    assert_eq!(g.neighbors(1), &[0]);
    assert_eq!(g.edge_count(), 1);
  }

  #[test]
  fn drops_self_loops() {
    let g = graph(vec![vec![0, 1], vec![1]]);
    assert_eq!(g.neighbors(0), &[1]);
    assert_eq!(g.neighbors(1), &[0]);
  }

  #[test]
  fn one_sided_and_two_sided_listings_agree() {
    let lower = graph(vec![vec![1, 2], vec![2], vec![]]);
    let both = graph(vec![vec![2, 1], vec![0, 2], vec![1, 0]]);
    assert_eq!(lower, both);
  }

  #[test]
  fn rejects_out_of_range_neighbor() {
    match ColoredGraph::from_adjacency(vec![vec![1], vec![5]]) {
      Err(Error::InvalidTopology {
        vertex,
        neighbor,
        size,
      }) => assert_eq!((vertex, neighbor, size), (1, 5, 2)),
      other => panic!("expected InvalidTopology, got {:?}", other),
    }
  }

  #[test]
  fn insert_edge_exact_once() {
    let mut g = ColoredGraph::with_size(4);
    assert!(g.insert_edge(0, 1));
    assert!(!g.insert_edge(0, 1));
    assert!(!g.insert_edge(1, 0));
    assert!(g.has_edge(0, 1));
    assert!(g.has_edge(1, 0));
    assert_eq!(g.edge_count(), 1);
  }

  #[test]
  fn insert_edge_rejects_loops_and_strangers() {
    let mut g = ColoredGraph::with_size(3);
    assert!(!g.insert_edge(2, 2));
    assert!(!g.insert_edge(0, 3));
    assert!(!g.insert_edge(9, 1));
    assert_eq!(g.edge_count(), 0);
  }

  #[test]
  fn insert_edge_keeps_order() {
    let mut g = ColoredGraph::with_size(5);
    for &(a, b) in &[(2, 4), (2, 0), (2, 3), (1, 2)] {
      assert!(g.insert_edge(a, b));
    }
    assert_eq!(g.neighbors(2), &[0, 1, 3, 4]);
    assert_eq!(g.neighbors(4), &[2]);
  }

  #[test]
  fn has_edge_out_of_range_is_false() {
    let g = graph(vec![vec![1], vec![]]);
    assert!(!g.has_edge(7, 0));
    assert!(!g.has_edge(0, 7));
  }

  #[test]
  fn clear_then_validate_fails() {
    let mut g = graph(vec![vec![1], vec![]]);
    g.set_color(0, 1);
    g.set_color(1, 2);
    g.register_color(1);
    g.register_color(2);
    assert!(g.validate_colors());

    g.clear_colors();
    assert_eq!(g.color_count(), 0);
    assert!(g.colors().iter().all(|&c| c == NO_COLOR));
    assert!(!g.validate_colors());
  }

  #[test]
  fn empty_graph_validates() {
    let mut g = ColoredGraph::with_size(0);
    g.clear_colors();
    assert!(g.validate_colors());
    assert_eq!(g.max_degree(), 0);
  }

  #[test]
  fn conflict_is_invalid() {
    let mut g = graph(vec![vec![1], vec![]]);
    g.set_color(0, 1);
    g.set_color(1, 1);
    assert!(!g.validate_colors());
  }

  #[test]
  #[should_panic]
  fn register_color_refuses_gap() {
    let mut g = ColoredGraph::with_size(3);
    g.register_color(1);
    g.register_color(3);
  }

  fn adjacency_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..24).prop_flat_map(|n| {
      prop::collection::vec(prop::collection::vec(0..n, 0..8), n)
    })
  }

  proptest! {
    /// Construction always yields sorted, unique, loop-free, symmetric lists.
    #[test]
    fn construction_normalizes(lists in adjacency_strategy()) {
      let g = ColoredGraph::from_adjacency(lists.clone()).unwrap();
      for v in 0..g.size() {
        let ns = g.neighbors(v);
        prop_assert!(ns.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(!ns.contains(&v));
        for &u in ns {
          prop_assert!(g.has_edge(u, v));
        }
      }
      for (u, list) in lists.iter().enumerate() {
        for &v in list {
          prop_assert_eq!(g.has_edge(u, v), u != v);
        }
      }
    }
  }
}
