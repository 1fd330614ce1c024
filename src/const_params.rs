//! Dedicated to record constant parameters that
//! influence the benchmark's design choice.

use crate::coloring::Algorithm;

/// Number of timed trials per graph and algorithm unless `-n` says otherwise.
pub const BENCHMARK_ITERATIONS: usize = 1;

/// Algorithms benchmarked when none are named on the command line.
pub const DEFAULT_ALGORITHMS: [Algorithm; 4] = Algorithm::ALL;

/// Breaks incidence degree ties by the larger static degree.
pub const IDO_DEGREE_TIEBREAK: bool = true;

/// Default log filter when neither `RUST_LOG` nor `--verbose` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter selected by `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "debug";
