use tracing::debug;

use crate::Distance;
use crate::INF;
use crate::error::Result;
use crate::error::SsspError;
use crate::graph::Graph;
use crate::indexed_heap::IndexedMinHeap;

/// Distances and predecessors from one source.
///
/// `dist[v] == INF` marks an unreachable vertex.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPaths {
    source: usize,
    dist: Vec<Distance>,
    prev: Vec<Option<usize>>,
}

impl ShortestPaths {
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.dist.len()
    }

    #[inline]
    pub fn distances(&self) -> &[Distance] {
        &self.dist
    }

    #[inline]
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.prev
    }

    #[inline]
    pub fn distance(&self, v: usize) -> Option<Distance> {
        self.dist.get(v).copied().filter(|&d| d != INF)
    }

    #[inline]
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.prev.get(v).copied().flatten()
    }

    #[inline]
    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }

    /// Vertices from the source to `target`, both inclusive.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut cur = target;
        while let Some(p) = self.predecessor(cur) {
            // A cycle in `prev` only appears with negative weights.
            if path.len() > self.dist.len() {
                return None;
            }
            path.push(p);
            cur = p;
        }
        if cur != self.source {
            return None;
        }

        path.reverse();
        Some(path)
    }
}

pub fn dijkstra(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    let n = graph.vertex_count();
    if !graph.contains_vertex(source) {
        return Err(SsspError::out_of_range(source, n));
    }

    let mut dist = vec![INF; n];
    let mut prev = vec![None; n];
    let mut heap = IndexedMinHeap::new(n);
    for v in 0..n {
        heap.insert(v, dist[v])?;
    }
    dist[source] = 0;
    heap.decrease_key(source, 0)?;

    let mut relaxations = 0_usize;
    while let Some(entry) = heap.extract_min() {
        let u = entry.vertex;
        let du = dist[u];
        if du == INF {
            continue;
        }

        for edge in graph.out_edges(u) {
            let v = edge.to as usize;
            if !heap.is_in_heap(v) {
                continue;
            }
            // At most V - 1 i64 terms, far below i128::MAX.
            let cand = du + Distance::from(edge.weight);
            if cand < dist[v] {
                dist[v] = cand;
                prev[v] = Some(u);
                heap.decrease_key(v, cand)?;
                relaxations += 1;
            }
        }
    }

    debug!(
        vertices = n,
        edges = graph.edge_count(),
        source,
        relaxations,
        reachable = dist.iter().filter(|&&d| d != INF).count(),
        "dijkstra finished"
    );

    Ok(ShortestPaths { source, dist, prev })
}
