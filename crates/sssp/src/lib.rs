mod config;
mod dijkstra;
mod error;
pub mod generator;
pub mod graph;
pub mod indexed_heap;
pub mod io;

pub use config::Config;
pub use config::run;
pub use dijkstra::ShortestPaths;
pub use dijkstra::dijkstra;
pub use error::Result;
pub use error::SsspError;
pub use graph::Edge;
pub use graph::Graph;
pub use indexed_heap::IndexedMinHeap;

/// Path weights are summed in a type wider than the `i64` edge weights, so no
/// path in a graph that fits in memory can reach `INF`.
pub type Distance = i128;

/// Distance of a vertex the source cannot reach.
pub const INF: Distance = Distance::MAX;
