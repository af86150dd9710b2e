use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use tracing::info;
use tracing::warn;

use crate::dijkstra::ShortestPaths;
use crate::dijkstra::dijkstra;
use crate::error::Result;
use crate::io::read_input;
use crate::io::write_output;

pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Where the pipeline reads its graph and writes its results.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

/// Reads the graph, solves it and writes the result table.
///
/// On any failure the output path is deleted, so an output file left by an
/// earlier run never survives a failed one.
pub fn run(config: &Config) -> Result<ShortestPaths> {
    let result = solve(&config.input).and_then(|paths| {
        write_file(&config.output, &paths)?;
        Ok(paths)
    });

    match result {
        Ok(paths) => {
            info!(path = %config.output.display(), "results written");
            Ok(paths)
        }
        Err(err) => {
            discard_output(&config.output);
            Err(err)
        }
    }
}

fn solve(input_path: &Path) -> Result<ShortestPaths> {
    let input = read_input(BufReader::new(File::open(input_path)?))?;
    info!(
        path = %input_path.display(),
        vertices = input.graph.vertex_count(),
        edges = input.graph.edge_count(),
        source = input.source,
        "graph loaded"
    );
    dijkstra(&input.graph, input.source)
}

fn write_file(path: &Path, paths: &ShortestPaths) -> Result<()> {
    let file = File::create(path)?;
    write_output(BufWriter::new(file), paths)
}

fn discard_output(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => info!(path = %path.display(), "removed output of failed run"),
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => warn!(path = %path.display(), error = %err, "could not remove output"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::Config;

    #[test]
    fn default_paths() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("input.txt"));
        assert_eq!(config.output, PathBuf::from("output.txt"));
    }

    #[test]
    fn builder_overrides() {
        let config = Config::default().with_input("a.txt").with_output("b.txt");
        assert_eq!(config, Config::new("a.txt", "b.txt"));
    }
}
