//! Sequential greedy coloring.

use std::collections::BTreeSet;

use super::palette::ColorScratch;
use crate::graph::{ColoredGraph, NO_COLOR};

/// Colors vertices in the order given by `permutation`, each with the
/// smallest color none of its neighbors carries.
///
/// Vertices missing from `permutation` stay uncolored. An empty permutation
/// leaves the graph untouched.
///
/// [requires] `g` is uncolored, ie. fresh or just cleared.
pub fn greedy_with_order(g: &mut ColoredGraph, permutation: &[usize]) {
  let (&first, rest) = match permutation.split_first() {
    Some(split) => split,
    None => return,
  };

  let mut scratch = ColorScratch::for_graph(g);
  g.set_color(first, NO_COLOR + 1);
  g.register_color(NO_COLOR + 1);

  for &v in rest {
    let c = scratch.smallest_unused(g, v);
    g.set_color(v, c);
    g.register_color(c);
  }
  debug_assert!(scratch.is_clear());
}

/// Greedy coloring in natural vertex order.
pub fn greedy(g: &mut ColoredGraph) {
  let order: Vec<usize> = (0..g.size()).collect();
  greedy_with_order(g, &order);
}

/// Greedy coloring in natural order that looks for a reusable color in the
/// ordered set of neighbor colors, rather than through a flag scratch.
///
/// If the neighbors use fewer distinct colors than are in play, some color
/// in `1..=color_count` is free and the first gap in the set is it.
/// Otherwise a new color is minted.
///
/// [requires] `g` is uncolored.
pub fn greedy_with_set(g: &mut ColoredGraph) {
  for v in 0..g.size() {
    let mut used: BTreeSet<usize> =
      g.neighbors(v).iter().map(|&u| g.color(u)).collect();
    used.remove(&NO_COLOR);

    let c = if used.len() < g.color_count() {
      let mut candidate = NO_COLOR + 1;
      for &taken in &used {
        if taken > candidate {
          break;
        }
        candidate += 1;
      }
      candidate
    } else {
      g.color_count() + 1
    };

    g.set_color(v, c);
    g.register_color(c);
  }
}
