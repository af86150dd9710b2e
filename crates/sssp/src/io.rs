//! Text formats at the process boundary.
//!
//! Input is `V E src` followed by `E` triples `u v w`; tokens may be
//! separated by any whitespace. Output is one `vertex\tdistance\tpredecessor`
//! line per vertex, with `INFINITY` and `NIL` for missing values.

use std::fmt;
use std::io::Read;
use std::io::Write;

use tracing::warn;

use crate::dijkstra::ShortestPaths;
use crate::error::Result;
use crate::error::SsspError;
use crate::graph::Graph;

pub const INFINITY_LABEL: &str = "INFINITY";
pub const NIL_LABEL: &str = "NIL";

#[derive(Clone, Debug)]
pub struct GraphInput {
    pub graph: Graph,
    pub source: usize,
}

struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: std::str::SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            current: "".split_whitespace(),
            line: 0,
        }
    }

    fn next_int(&mut self, what: &str) -> Result<i64> {
        loop {
            if let Some(token) = self.current.next() {
                return token.parse().map_err(|_| SsspError::Parse {
                    line: self.line,
                    reason: format!("expected integer {what}, found {token:?}"),
                });
            }
            match self.lines.next() {
                Some((idx, text)) => {
                    self.line = idx + 1;
                    self.current = text.split_whitespace();
                }
                None => {
                    return Err(SsspError::Parse {
                        line: self.line.max(1),
                        reason: format!("unexpected end of input, expected {what}"),
                    });
                }
            }
        }
    }

    fn next_count(&mut self, what: &str) -> Result<usize> {
        let value = self.next_int(what)?;
        usize::try_from(value).map_err(|_| {
            SsspError::InvalidArgument(format!(
                "{what} must be non-negative, got {value} (line {})",
                self.line
            ))
        })
    }

    /// Vertex ids below zero are out of range like ids at or above `V`.
    fn next_vertex(&mut self, what: &str, vertex_count: usize) -> Result<usize> {
        let value = self.next_int(what)?;
        usize::try_from(value).map_err(|_| SsspError::OutOfRange {
            vertex: i128::from(value),
            vertex_count,
        })
    }
}

pub fn parse_input(text: &str) -> Result<GraphInput> {
    let mut tokens = Tokens::new(text);
    let vertex_count = tokens.next_count("vertex count")?;
    let edge_count = tokens.next_count("edge count")?;
    let source = tokens.next_vertex("source vertex", vertex_count)?;

    let mut graph = Graph::try_new(vertex_count)?;
    let mut negative = 0_usize;
    for _ in 0..edge_count {
        let from = tokens.next_vertex("edge source", vertex_count)?;
        let to = tokens.next_vertex("edge destination", vertex_count)?;
        let weight = tokens.next_int("edge weight")?;
        if weight < 0 {
            negative += 1;
        }
        graph.add_edge(from, to, weight)?;
    }

    if negative > 0 {
        warn!(
            negative,
            "graph has negative edge weights; distances may be wrong"
        );
    }

    Ok(GraphInput { graph, source })
}

pub fn read_input<R: Read>(mut reader: R) -> Result<GraphInput> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_input(&text)
}

/// The output table for one result, one line per vertex.
pub struct DistanceTable<'a>(pub &'a ShortestPaths);

impl fmt::Display for DistanceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paths = self.0;
        for v in 0..paths.vertex_count() {
            match paths.distance(v) {
                None => writeln!(f, "{v}\t{INFINITY_LABEL}\t{NIL_LABEL}")?,
                Some(d) => match paths.predecessor(v) {
                    None => writeln!(f, "{v}\t{d}\t{NIL_LABEL}")?,
                    Some(p) => writeln!(f, "{v}\t{d}\t{p}")?,
                },
            }
        }
        Ok(())
    }
}

pub fn write_output<W: Write>(mut writer: W, paths: &ShortestPaths) -> Result<()> {
    write!(writer, "{}", DistanceTable(paths))?;
    writer.flush()?;
    Ok(())
}

pub fn format_output(paths: &ShortestPaths) -> String {
    DistanceTable(paths).to_string()
}
