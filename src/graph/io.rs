//! Text format of a graph: one line per vertex in id order, holding the
//! whitespace separated ids of its neighbors. A blank line is an isolated
//! vertex.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::ColoredGraph;
use crate::error::{Error, Result};
use crate::util::prettyprint::lst_print;

impl ColoredGraph {
  /// Reads a graph in text format. Edges may be listed from one endpoint or
  /// from both; the result is symmetrized either way.
  pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
    let mut lists = Vec::<Vec<usize>>::new();

    for (idx, line) in reader.lines().enumerate() {
      let line = line?;
      let neighbors = line
        .split_whitespace()
        .map(|tok| {
          tok.parse::<usize>().map_err(|_| Error::Parse {
            line: idx + 1,
            token: tok.to_string(),
          })
        })
        .collect::<Result<Vec<usize>>>()?;
      lists.push(neighbors);
    }

    Self::from_adjacency(lists)
  }

  /// Opens `path` and reads a graph from it.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let file = File::open(path)?;
    Self::read_from(BufReader::new(file))
  }
}

/// Prints the graph back in text format. Both endpoints list every edge.
impl Display for ColoredGraph {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for v in 0..self.size() {
      lst_print(f, self.neighbors(v), " ")?;
      writeln!(f)?;
    }
    Ok(())
  }
}
