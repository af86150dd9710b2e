use crate::error::Result;
use crate::error::SsspError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub to: u32,
    pub weight: i64,
}

/// Directed graph stored as one edge vector per vertex.
///
/// Edges leaving a vertex are yielded most-recently-added first.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Like `new`, but reports a vertex count that does not fit the `u32` id
    /// space or cannot be allocated instead of panicking.
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        if vertex_count > 0 && u32::try_from(vertex_count - 1).is_err() {
            return Err(SsspError::InvalidArgument(format!(
                "vertex count {vertex_count} exceeds the u32 id space"
            )));
        }

        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count).map_err(|err| {
            SsspError::InvalidArgument(format!("cannot allocate {vertex_count} vertices: {err}"))
        })?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, i64)]) -> Result<Self> {
        let mut graph = Self::try_new(vertex_count)?;
        for &(from, to, weight) in edges {
            graph.add_edge(from as usize, to as usize, weight)?;
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) -> Result<()> {
        self.vertex_id(from)?;
        let to = self.vertex_id(to)?;

        self.adjacency[from].push(Edge { to, weight });
        self.edge_count += 1;
        Ok(())
    }

    fn vertex_id(&self, v: usize) -> Result<u32> {
        match u32::try_from(v) {
            Ok(id) if self.contains_vertex(v) => Ok(id),
            _ => Err(SsspError::out_of_range(v, self.vertex_count())),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.vertex_count()
    }

    #[inline]
    pub fn out_degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    #[inline]
    pub fn out_edges(&self, v: usize) -> OutEdges<'_> {
        OutEdges {
            inner: self.adjacency[v].iter().rev(),
        }
    }

    pub fn edges_vec(&self) -> Vec<(u32, u32, i64)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for u in 0..self.vertex_count() {
            // `add_edge` only accepts sources that fit in u32.
            for edge in self.out_edges(u) {
                edges.push((u as u32, edge.to, edge.weight));
            }
        }
        edges
    }
}

pub struct OutEdges<'a> {
    inner: std::iter::Rev<std::slice::Iter<'a, Edge>>,
}

impl Iterator for OutEdges<'_> {
    type Item = Edge;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for OutEdges<'_> {}
