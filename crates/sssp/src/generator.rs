//! Seeded graph families for tests and benchmarks. All weights are
//! non-negative.

use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::graph::Graph;

const C_MAX: i64 = 1_000_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    DenseZero,
    AlmostLine,
    GridRandom,
    WrongDijkstraKiller,
}

impl GraphCase {
    pub const ALL: [GraphCase; 6] = [
        Self::SparseRandom,
        Self::DenseRandom,
        Self::DenseZero,
        Self::AlmostLine,
        Self::GridRandom,
        Self::WrongDijkstraKiller,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::DenseZero => "dense_zero",
            Self::AlmostLine => "almost_line",
            Self::GridRandom => "grid_random",
            Self::WrongDijkstraKiller => "wrong_dijkstra_killer",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: Graph,
    pub source: usize,
    pub target: usize,
}

type EdgeList = Vec<(u32, u32, i64)>;

pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    match case {
        GraphCase::SparseRandom => sparse_random_case(size.max(32), seed, 4),
        GraphCase::DenseRandom => dense_case(size.max(256), seed, |rng| rng.random_range(0..=C_MAX)),
        GraphCase::DenseZero => dense_case(size.max(256), seed, |_| 0),
        GraphCase::AlmostLine => almost_line_case(size.max(8), seed),
        GraphCase::GridRandom => grid_random_case(size.max(256), seed),
        GraphCase::WrongDijkstraKiller => wrong_dijkstra_killer_case(size.max(512)),
    }
}

fn sparse_random_case(size: usize, seed: u64, edge_factor: usize) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let m_target = n.saturating_mul(edge_factor).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=C_MAX));
    }

    let (source, target) = random_endpoints(&mut rng, n);
    assemble(n, edges, source, target)
}

fn dense_case(size: usize, seed: u64, mut weight: impl FnMut(&mut StdRng) -> i64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in 0..n {
            if u != v {
                let w = weight(&mut rng);
                edges.push((u as u32, v as u32, w));
            }
        }
    }

    let (source, target) = random_endpoints(&mut rng, n);
    assemble(n, edges, source, target)
}

fn almost_line_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size;
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        push_unique_edge(&mut edges, &mut used, i, i + 1, rng.random_range(0..=C_MAX));
    }

    let m_target = n.saturating_mul(2).min(complete_edges(n));
    while edges.len() < m_target {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        let (u, v) = if rng.random_bool(0.5) { (b, a) } else { (a, b) };
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=C_MAX));
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    for edge in &mut edges {
        edge.0 = perm[edge.0 as usize] as u32;
        edge.1 = perm[edge.1 as usize] as u32;
    }
    edges.shuffle(&mut rng);

    assemble(n, edges, perm[0], perm[n - 1])
}

fn grid_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = floor_sqrt((size / 4).max(16)).max(4);
    let n = len * len;
    let mut edges = Vec::with_capacity(n * 4);
    let index = |i: usize, j: usize| (i * len + j) as u32;

    for i in 0..len {
        for j in 0..len {
            let from = index(i, j);
            if j + 1 < len {
                edges.push((from, index(i, j + 1), rng.random_range(0..=C_MAX)));
            }
            if i + 1 < len {
                edges.push((from, index(i + 1, j), rng.random_range(0..=C_MAX)));
            }
            if j > 0 {
                edges.push((from, index(i, j - 1), rng.random_range(0..=C_MAX)));
            }
            if i > 0 {
                edges.push((from, index(i - 1, j), rng.random_range(0..=C_MAX)));
            }
        }
    }

    edges.shuffle(&mut rng);
    let (source, target) = random_endpoints(&mut rng, n);
    assemble(n, edges, source, target)
}

/// Two fans joined through a hub; every cheap-looking first hop is the wrong
/// one, so the first tentative distances are all later decreased.
fn wrong_dijkstra_killer_case(size: usize) -> GeneratedGraph {
    let one = (size / 4).max(8);
    let n = one * 2 + 3;
    let hub = one + 1;
    let mut edges = Vec::with_capacity(one * 4);

    for i in 0..one {
        let k = i as i64;
        let rest = (one - i - 1) as i64;
        edges.push((0, (i + 1) as u32, k));
        edges.push(((i + 1) as u32, hub as u32, rest * 2));
        edges.push((hub as u32, (hub + 1 + i) as u32, 2 * k));
        edges.push(((hub + 1 + i) as u32, (n - 1) as u32, rest));
    }

    assemble(n, edges, 0, n - 1)
}

fn assemble(n: usize, edges: EdgeList, source: usize, target: usize) -> GeneratedGraph {
    let graph = Graph::from_edges(n, &edges).expect("generated endpoints are below n");
    GeneratedGraph {
        graph,
        source,
        target,
    }
}

fn random_endpoints(rng: &mut StdRng, n: usize) -> (usize, usize) {
    let source = rng.random_range(0..n);
    let mut target = rng.random_range(0..n);
    if source == target {
        target = (target + 1) % n;
    }
    (source, target)
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn push_unique_edge(
    edges: &mut EdgeList,
    used: &mut HashSet<u64>,
    u: usize,
    v: usize,
    weight: i64,
) -> bool {
    if u == v {
        return false;
    }
    let key = ((u as u64) << 32) | v as u64;
    if used.insert(key) {
        edges.push((u as u32, v as u32, weight));
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::GraphCase;
    use super::generate_case;

    #[test]
    fn cases_are_deterministic_and_in_range() {
        for case in GraphCase::ALL {
            let a = generate_case(case, 300, 42);
            let b = generate_case(case, 300, 42);
            let n = a.graph.vertex_count();
            assert!(n >= 2, "case={case:?}");
            assert!(a.source < n && a.target < n, "case={case:?}");
            assert_ne!(a.source, a.target, "case={case:?}");
            assert_eq!(a.graph.edges_vec(), b.graph.edges_vec(), "case={case:?}");
            assert!(
                a.graph.edges_vec().iter().all(|&(_, _, w)| w >= 0),
                "case={case:?}"
            );
        }
    }

    #[test]
    fn killer_case_reaches_target() {
        let input = generate_case(GraphCase::WrongDijkstraKiller, 512, 0);
        let sp = crate::dijkstra(&input.graph, input.source).unwrap();
        assert!(sp.is_reachable(input.target));
    }
}
