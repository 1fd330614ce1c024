// Coloring Bench
//! File emission

use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::Path;

use crate::bench::GraphReport;
use crate::coloring::Algorithm;
use crate::error::Result;
use crate::graph::ColoredGraph;

/// Header line of the CSV report: the graph name, then a time and a color
/// column per algorithm.
pub fn csv_header(algorithms: &[Algorithm]) -> String {
  let mut line = String::from("NAME");
  for a in algorithms {
    line.push_str(&format!(",{0}TIME,{0}COLORS", a.label()));
  }
  line
}

/// One CSV row per graph. Times are medians in milliseconds. Columns follow
/// the order of each report's results.
pub fn csv_row(report: &GraphReport) -> String {
  let mut line = report.name.clone();
  for r in &report.results {
    line.push_str(&format!(",{},{}", r.median, r.color_count));
  }
  line
}

/// Writes the CSV report for `reports`.
pub fn emit_csv<W: Write>(
  out: &mut W,
  algorithms: &[Algorithm],
  reports: &[GraphReport],
) -> Result<()> {
  writeln!(out, "{}", csv_header(algorithms))?;
  for report in reports {
    writeln!(out, "{}", csv_row(report))?;
  }
  Ok(())
}

pub fn write_csv<P: AsRef<Path>>(
  path: P,
  algorithms: &[Algorithm],
  reports: &[GraphReport],
) -> Result<()> {
  let mut out = BufWriter::new(File::create(path)?);
  emit_csv(&mut out, algorithms, reports)?;
  out.flush()?;
  Ok(())
}

/// Writes `reports` as pretty-printed JSON.
pub fn write_json<P: AsRef<Path>>(
  path: P,
  reports: &[GraphReport],
) -> Result<()> {
  let mut out = BufWriter::new(File::create(path)?);
  serde_json::to_writer_pretty(&mut out, reports)?;
  writeln!(out)?;
  out.flush()?;
  Ok(())
}

/// Writes `g` in graph text format.
pub fn write_graph<P: AsRef<Path>>(path: P, g: &ColoredGraph) -> Result<()> {
  let mut out = BufWriter::new(File::create(path)?);
  write!(out, "{}", g)?;
  out.flush()?;
  Ok(())
}

/// Writes one `vertex color` line per vertex.
pub fn write_colors<P: AsRef<Path>>(path: P, g: &ColoredGraph) -> Result<()> {
  let mut out = BufWriter::new(File::create(path)?);
  for (v, c) in g.colors().iter().enumerate() {
    writeln!(out, "{} {}", v, c)?;
  }
  out.flush()?;
  Ok(())
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::bench::run_suite;
  use std::fs;

  fn reports() -> Vec<GraphReport> {
    let triangle =
      ColoredGraph::from_adjacency(vec![vec![1, 2], vec![2], vec![]]).unwrap();
    run_suite(
      vec![("triangle.txt".to_string(), triangle)],
      &[Algorithm::Greedy, Algorithm::IncidenceDegree],
      1,
    )
  }

  #[test]
  fn header_lists_every_algorithm() {
    assert_eq!(
      csv_header(&Algorithm::ALL),
      "NAME,GREEDYTIME,GREEDYCOLORS,GREEDYSETTIME,GREEDYSETCOLORS,\
       LDOCTIME,LDOCCOLORS,IDCTIME,IDCCOLORS"
    );
  }

  #[test]
  fn csv_has_row_per_graph() {
    let mut buf = Vec::new();
    let algs = [Algorithm::Greedy, Algorithm::IncidenceDegree];
    emit_csv(&mut buf, &algs, &reports()).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "NAME,GREEDYTIME,GREEDYCOLORS,IDCTIME,IDCCOLORS");

    let cells: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(cells.len(), 5);
    assert_eq!(cells[0], "triangle.txt");
    assert_eq!(cells[2], "3");
    assert_eq!(cells[4], "3");
    assert!(cells[1].parse::<f64>().is_ok());
  }

  #[test]
  fn json_report_parses_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    write_json(&path, &reports()).unwrap();

    let value: serde_json::Value =
      serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value[0]["name"], "triangle.txt");
    assert_eq!(value[0]["results"][1]["algorithm"], "ido");
    assert_eq!(value[0]["results"][1]["color_count"], 3);
    assert_eq!(value[0]["results"][0]["valid"], true);
  }

  #[test]
  fn graph_file_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("g.txt");
    let lists = vec![vec![3], vec![], vec![1], vec![]];
    let g = ColoredGraph::from_adjacency(lists).unwrap();
    write_graph(&path, &g).unwrap();
    assert_eq!(ColoredGraph::from_file(&path).unwrap(), g);
  }

  #[test]
  fn color_dump_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colors.txt");
    let mut g = ColoredGraph::from_adjacency(vec![vec![1], vec![]]).unwrap();
    Algorithm::Greedy.run(&mut g);
    write_colors(&path, &g).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "0 1\n1 2\n");
  }
}
