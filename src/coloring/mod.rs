// Coloring Bench
//! Greedy coloring heuristics.
//!
//! Every heuristic writes its colors straight into the graph and keeps the
//! graph's color tally up to date. All of them expect an uncolored graph;
//! call `ColoredGraph::clear_colors` between passes.

use std::fmt::Display;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{errs, Error};
use crate::graph::ColoredGraph;

pub mod greedy;
pub mod ordering;
pub mod palette;

/// The interchangeable coloring heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum Algorithm {
  /// Natural vertex order.
  #[serde(rename = "greedy")]
  Greedy,
  /// Natural order, color reuse looked up in an ordered set.
  #[serde(rename = "greedy-set")]
  #[value(name = "greedy-set")]
  GreedyWithSet,
  /// Largest-Degree-Ordering.
  #[serde(rename = "ldo")]
  #[value(name = "ldo")]
  LargestDegree,
  /// Incidence-Degree-Ordering.
  #[serde(rename = "ido")]
  #[value(name = "ido")]
  IncidenceDegree,
}

impl Algorithm {
  pub const ALL: [Algorithm; 4] = [
    Algorithm::Greedy,
    Algorithm::GreedyWithSet,
    Algorithm::LargestDegree,
    Algorithm::IncidenceDegree,
  ];

  /// Name used on the command line.
  pub fn name(&self) -> &'static str {
    match self {
      Algorithm::Greedy => "greedy",
      Algorithm::GreedyWithSet => "greedy-set",
      Algorithm::LargestDegree => "ldo",
      Algorithm::IncidenceDegree => "ido",
    }
  }

  /// Column stem of the CSV report.
  pub fn label(&self) -> &'static str {
    match self {
      Algorithm::Greedy => "GREEDY",
      Algorithm::GreedyWithSet => "GREEDYSET",
      Algorithm::LargestDegree => "LDOC",
      Algorithm::IncidenceDegree => "IDC",
    }
  }

  /// Human readable title.
  pub fn title(&self) -> &'static str {
    match self {
      Algorithm::Greedy => "Greedy Coloring",
      Algorithm::GreedyWithSet => "Greedy Coloring With Set",
      Algorithm::LargestDegree => "Largest Degree Ordering Coloring",
      Algorithm::IncidenceDegree => "Incidence Degree Coloring",
    }
  }

  /// Colors `g` in place.
  pub fn run(&self, g: &mut ColoredGraph) {
    match self {
      Algorithm::Greedy => greedy::greedy(g),
      Algorithm::GreedyWithSet => greedy::greedy_with_set(g),
      Algorithm::LargestDegree => ordering::largest_degree_ordering(g),
      Algorithm::IncidenceDegree => ordering::incidence_degree_ordering(g),
    }
  }
}

impl FromStr for Algorithm {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match Algorithm::ALL.iter().find(|a| a.name() == s) {
      Some(a) => Ok(*a),
      None => errs(format!("Unknown algorithm: {}", s)),
    }
  }
}

impl Display for Algorithm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}
