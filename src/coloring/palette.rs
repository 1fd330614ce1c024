//! The "smallest color not used by any neighbor" primitive shared by the
//! greedy heuristics.

use crate::graph::{Color, ColoredGraph, NO_COLOR};

/// A reusable set of flags, one per color, used to find the smallest color
/// free among some neighbors. Slot `i` stands for color `NO_COLOR + 1 + i`.
///
/// Every query leaves all flags cleared again, so one instance serves a whole
/// coloring pass without reallocating.
///
/// # Examples
/// ```ignore
/// let mut scratch = ColorScratch::for_graph(&g);
/// let c = scratch.smallest_unused(&g, v);
/// assert!(scratch.is_clear());
/// ```
pub struct ColorScratch {
  used: Vec<bool>,
}

impl ColorScratch {
  /// Creates a cleared scratch with `slots` colors.
  pub fn new(slots: usize) -> Self {
    ColorScratch {
      used: vec![false; slots],
    }
  }

  /// A graph on `n` vertices never needs more than `n` colors.
  pub fn for_graph(g: &ColoredGraph) -> Self {
    Self::new(g.size())
  }

  /// Shows if no flag is set.
  pub fn is_clear(&self) -> bool {
    self.used.iter().all(|&b| !b)
  }

  /// Returns the smallest color that no neighbor of `v` carries. Uncolored
  /// neighbors are ignored, so `NO_COLOR + 1` comes back when nothing around
  /// `v` is colored yet.
  pub fn smallest_unused(&mut self, g: &ColoredGraph, v: usize) -> Color {
    let neighbors = g.neighbors(v);

    for &u in neighbors {
      if let Some(slot) = Self::slot(g.color(u)) {
        if let Some(flag) = self.used.get_mut(slot) {
          *flag = true;
        }
      }
    }

    let free = self
      .used
      .iter()
      .position(|&b| !b)
      .unwrap_or(self.used.len());

    // clear exactly what was marked above.
    for &u in neighbors {
      if let Some(slot) = Self::slot(g.color(u)) {
        if let Some(flag) = self.used.get_mut(slot) {
          *flag = false;
        }
      }
    }

    NO_COLOR + 1 + free
  }

  fn slot(c: Color) -> Option<usize> {
    if c == NO_COLOR {
      None
    } else {
      Some(c - NO_COLOR - 1)
    }
  }
}
