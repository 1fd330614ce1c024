// Coloring Bench
//! Parse command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::coloring::Algorithm;
use crate::const_params::{BENCHMARK_ITERATIONS, DEFAULT_ALGORITHMS};

#[derive(Parser)]
#[command(name = "colorbench")]
#[command(version, about = "Benchmark of greedy graph coloring heuristics")]
struct Cli {
  /// Get extra output (debug level logs).
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Command,
}

/// What this run shall do.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
  /// Benchmark coloring algorithms on graph files and write a CSV report.
  Bench {
    /// Graph files in text format.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output CSV file path.
    #[arg(short, long)]
    output: PathBuf,

    /// Timed trials per graph and algorithm.
    #[arg(short = 'n', long, default_value_t = BENCHMARK_ITERATIONS)]
    iterations: usize,

    /// Algorithms to run, in report order. Defaults to all of them.
    #[arg(short, long = "algorithm", value_enum)]
    algorithms: Vec<Algorithm>,

    /// Also write the full report as JSON.
    #[arg(long)]
    json: Option<PathBuf>,
  },

  /// Color a single graph and print the outcome.
  Color {
    /// Graph file in text format.
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Algorithm::IncidenceDegree)]
    algorithm: Algorithm,

    /// Write `vertex color` lines to this file.
    #[arg(long)]
    dump_colors: Option<PathBuf>,
  },

  /// Generate a random graph with an exact number of edges.
  Gen {
    nodes: usize,
    edges: usize,
    output: PathBuf,

    /// Seed of the random generator; entropy when absent.
    #[arg(long)]
    seed: Option<u64>,
  },
}

/// Configuration options for this run.
#[derive(Debug, PartialEq)]
pub struct Config {
  pub verbose: bool,
  pub command: Command,
}

impl Config {
  /// Algorithms selected for a `bench` run, or the defaults.
  pub fn algorithms(selected: &[Algorithm]) -> Vec<Algorithm> {
    if selected.is_empty() {
      DEFAULT_ALGORITHMS.to_vec()
    } else {
      selected.to_vec()
    }
  }
}

impl From<Cli> for Config {
  fn from(cli: Cli) -> Self {
    Config {
      verbose: cli.verbose,
      command: cli.command,
    }
  }
}

/// Parses command line input into a configuration. Prints usage and exits on
/// invalid args.
pub fn parse_args() -> Config {
  Cli::parse().into()
}

#[cfg(test)]
mod test {
  use super::*;

  fn parse(args: &[&str]) -> Config {
    Cli::try_parse_from(args).expect("args should parse").into()
  }

  #[test]
  fn bench_defaults() {
    let cfg = parse(&["colorbench", "bench", "a.txt", "b.txt", "-o", "r.csv"]);
    assert!(!cfg.verbose);
    match cfg.command {
      Command::Bench {
        inputs,
        output,
        iterations,
        algorithms,
        json,
      } => {
        assert_eq!(inputs.len(), 2);
        assert_eq!(output, PathBuf::from("r.csv"));
        assert_eq!(iterations, BENCHMARK_ITERATIONS);
        assert_eq!(Config::algorithms(&algorithms), Algorithm::ALL.to_vec());
        assert!(json.is_none());
      }
      _ => panic!("expected bench"),
    }
  }

  #[test]
  fn bench_picks_algorithms_in_order() {
    let cfg = parse(&[
      "colorbench", "-v", "bench", "g.txt", "-o", "r.csv", "-a", "ido", "-a",
      "greedy-set", "-n", "5",
    ]);
    assert!(cfg.verbose);
    match cfg.command {
      Command::Bench {
        algorithms,
        iterations,
        ..
      } => {
        assert_eq!(
          algorithms,
          vec![Algorithm::IncidenceDegree, Algorithm::GreedyWithSet]
        );
        assert_eq!(iterations, 5);
      }
      _ => panic!("expected bench"),
    }
  }

  #[test]
  fn gen_with_seed() {
    let cfg = parse(&["colorbench", "gen", "10", "20", "out.txt", "--seed", "3"]);
    assert_eq!(
      cfg.command,
      Command::Gen {
        nodes: 10,
        edges: 20,
        output: PathBuf::from("out.txt"),
        seed: Some(3),
      }
    );
  }

  #[test]
  fn color_defaults_to_ido() {
    let cfg = parse(&["colorbench", "color", "g.txt"]);
    match cfg.command {
      Command::Color { algorithm, .. } => {
        assert_eq!(algorithm, Algorithm::IncidenceDegree)
      }
      _ => panic!("expected color"),
    }
  }

  #[test]
  fn bench_needs_output_and_input() {
    assert!(Cli::try_parse_from(["colorbench", "bench", "g.txt"]).is_err());
    assert!(Cli::try_parse_from(["colorbench", "bench", "-o", "r.csv"]).is_err());
    assert!(Cli::try_parse_from([
      "colorbench", "bench", "g.txt", "-o", "r", "-a", "dsatur"
    ])
    .is_err());
  }
}
